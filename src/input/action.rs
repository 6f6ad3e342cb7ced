//! User intents produced by the key registry.

/// Everything a key press can ask the navigation state to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,

    // Shortcut layer
    PreviousTab,
    NextTab,
    ScrollDown,
    ScrollUp,
    OpenCommand,

    /// Context dependent: closes, cancels or toggles command mode.
    Escape,

    // Command modal editing
    InsertChar(char),
    Backspace,
    Submit,
    HistoryPrevious,
    HistoryNext,

    // "Cancel login? (y/n)"
    ConfirmCancelLogin,
    KeepLogin,

    CloseHelp,

    /// Key consumed without effect.
    Noop,
}
