//! Panic hook that gives the shell back a sane terminal.

use super::setup::restore_stdout;
use std::panic;

/// Chain terminal restoration in front of the current hook (color-eyre's,
/// when installed first), so the report prints on the normal screen.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_stdout();
        original_hook(info);
    }));
}
