//! Results delivered to the event loop by spawned tasks.

use super::content::TabContent;
use super::types::Tab;
use crate::error::FolioError;
use crate::models::User;

#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A tab load finished. `generation` is the view generation it was
    /// started under.
    ContentLoaded {
        tab: Tab,
        generation: u64,
        result: Result<TabContent, FolioError>,
    },
    AuthSucceeded { user: User },
    AuthFailed { error: FolioError },
    NoticeElapsed { generation: u64 },
    LoginRetryElapsed { generation: u64 },
}
