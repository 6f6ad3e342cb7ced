//! Short-lived inline notices.

use crate::error::FolioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Text shown on the status line until a timer with the same generation
/// clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub generation: u64,
}

impl Notice {
    pub fn info(text: impl Into<String>, generation: u64) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
            generation,
        }
    }

    pub fn error(err: &FolioError, generation: u64) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: err.user_message(),
            generation,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
