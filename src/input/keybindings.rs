//! Default key bindings per [`KeyContext`].

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::action::Action;
use super::context::KeyContext;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active in every context.
    pub global: HashMap<KeyCombo, Action>,
    pub contexts: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            contexts: HashMap::new(),
        };
        config
            .global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Action::Quit);

        config.bind(
            KeyContext::CommandMode,
            &[
                (KeyCombo::plain(KeyCode::Char('h')), Action::PreviousTab),
                (KeyCombo::plain(KeyCode::Char('l')), Action::NextTab),
                (KeyCombo::plain(KeyCode::Char('j')), Action::ScrollDown),
                (KeyCombo::plain(KeyCode::Char('k')), Action::ScrollUp),
                (KeyCombo::plain(KeyCode::Down), Action::ScrollDown),
                (KeyCombo::plain(KeyCode::Up), Action::ScrollUp),
                (KeyCombo::plain(KeyCode::Char(':')), Action::OpenCommand),
                // Some terminals report ':' with SHIFT held.
                (
                    KeyCombo::new(KeyCode::Char(':'), KeyModifiers::SHIFT),
                    Action::OpenCommand,
                ),
                (KeyCombo::plain(KeyCode::Esc), Action::Escape),
            ],
        );

        config.bind(
            KeyContext::Browse,
            &[
                (KeyCombo::plain(KeyCode::Down), Action::ScrollDown),
                (KeyCombo::plain(KeyCode::Up), Action::ScrollUp),
                (KeyCombo::plain(KeyCode::Esc), Action::Escape),
            ],
        );

        config.bind(
            KeyContext::CommandInput,
            &[
                (KeyCombo::plain(KeyCode::Enter), Action::Submit),
                (KeyCombo::plain(KeyCode::Backspace), Action::Backspace),
                (KeyCombo::plain(KeyCode::Up), Action::HistoryPrevious),
                (KeyCombo::plain(KeyCode::Down), Action::HistoryNext),
                (KeyCombo::plain(KeyCode::Esc), Action::Escape),
            ],
        );

        config.bind(
            KeyContext::Help,
            &[
                (KeyCombo::plain(KeyCode::Esc), Action::Escape),
                (KeyCombo::plain(KeyCode::Enter), Action::CloseHelp),
                (KeyCombo::plain(KeyCode::Char('q')), Action::CloseHelp),
                (KeyCombo::plain(KeyCode::Char(':')), Action::OpenCommand),
                (
                    KeyCombo::new(KeyCode::Char(':'), KeyModifiers::SHIFT),
                    Action::OpenCommand,
                ),
            ],
        );

        config.bind(
            KeyContext::ConfirmCancelLogin,
            &[
                (KeyCombo::plain(KeyCode::Char('y')), Action::ConfirmCancelLogin),
                (KeyCombo::plain(KeyCode::Char('Y')), Action::ConfirmCancelLogin),
                (
                    KeyCombo::new(KeyCode::Char('Y'), KeyModifiers::SHIFT),
                    Action::ConfirmCancelLogin,
                ),
                (KeyCombo::plain(KeyCode::Char('n')), Action::KeepLogin),
                (KeyCombo::plain(KeyCode::Esc), Action::KeepLogin),
            ],
        );

        config
    }

    fn bind(&mut self, context: KeyContext, bindings: &[(KeyCombo, Action)]) {
        let map = self.contexts.entry(context).or_default();
        for (combo, action) in bindings {
            map.insert(*combo, action.clone());
        }
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Action> {
        self.global.get(combo)
    }

    pub fn get(&self, context: KeyContext, combo: &KeyCombo) -> Option<&Action> {
        self.contexts.get(&context)?.get(combo)
    }
}
