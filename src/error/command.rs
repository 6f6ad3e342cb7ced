//! Errors raised by the colon-command dispatcher.

use thiserror::Error;

/// Command dispatch error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Input did not match any known command. Carries the literal text.
    #[error("Unknown command: {input}")]
    UnknownCommand { input: String },

    /// A command was submitted while the help overlay was open.
    #[error("Help overlay is open")]
    HelpModalOpen,
}

impl CommandError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            CommandError::UnknownCommand { input } => {
                format!("Unknown command: {}. Type :help for a list.", input)
            }
            CommandError::HelpModalOpen => "Close the help window first (Esc).".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CommandError::UnknownCommand { .. } => "E_CMD_UNKNOWN",
            CommandError::HelpModalOpen => "E_CMD_HELP_OPEN",
        }
    }
}
