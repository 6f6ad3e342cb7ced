//! Flags handled before the TUI starts.
//!
//! ```ignore
//! match termfolio::cli::parse_args(std::env::args()) {
//!     CliCommand::RunTui { api_url } => { /* start the TUI */ }
//!     other => std::process::exit(run_cli_command(&other)),
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{version_line, VERSION};

/// Handle every command except `RunTui`, returning the exit code.
pub fn run_cli_command(command: &CliCommand) -> i32 {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            0
        }
        CliCommand::Help => {
            println!("{USAGE}");
            0
        }
        CliCommand::Invalid(message) => {
            eprintln!("termfolio: {message}\n\n{USAGE}");
            2
        }
        CliCommand::RunTui { .. } => 0,
    }
}
