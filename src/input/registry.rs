//! Maps key events to [`Action`]s for the current context.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::action::Action;
use super::context::{InputContext, KeyContext};
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Lookup order:
/// 1. Global bindings (Ctrl+C)
/// 2. Bindings for the current context
/// 3. Printable characters, when the command modal is open
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    config: KeybindingConfig,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` means the key is not bound here.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let combo = KeyCombo::new(key.code, key.modifiers);
        if let Some(action) = self.config.get_global(&combo) {
            return Some(action.clone());
        }

        let key_context = context.key_context();
        if let Some(action) = self.config.get(key_context, &combo) {
            return Some(action.clone());
        }

        match (key_context, key.code) {
            (KeyContext::CommandInput, KeyCode::Char(c))
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                Some(Action::InsertChar(c))
            }
            // The confirm prompt swallows everything else.
            (KeyContext::ConfirmCancelLogin, _) => Some(Action::Noop),
            _ => None,
        }
    }
}
