//! Snapshot of the state the key registry needs to pick an action.

use crate::app::{Modal, NavigationState};

/// Which key map applies right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// "Cancel login? (y/n)"
    ConfirmCancelLogin,
    Help,
    CommandInput,
    /// Shortcut layer.
    CommandMode,
    /// Shortcuts off; only Escape brings them back.
    Browse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub modal: Modal,
    pub command_mode: bool,
    pub confirm_cancel_login: bool,
}

impl InputContext {
    pub fn from_state(state: &NavigationState) -> Self {
        Self {
            modal: state.modal,
            command_mode: state.command_mode,
            confirm_cancel_login: state.confirm_cancel_login,
        }
    }

    pub fn key_context(&self) -> KeyContext {
        if self.confirm_cancel_login {
            return KeyContext::ConfirmCancelLogin;
        }
        match self.modal {
            Modal::Help => KeyContext::Help,
            Modal::Command => KeyContext::CommandInput,
            Modal::None if self.command_mode => KeyContext::CommandMode,
            Modal::None => KeyContext::Browse,
        }
    }
}
