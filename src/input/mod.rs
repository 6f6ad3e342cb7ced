//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> KeyRegistry::dispatch(InputContext) -> Action -> NavigationState::apply
//! ```
//!
//! - [`action`] - The [`Action`] enum of user intents
//! - [`context`] - [`InputContext`] built from the navigation state
//! - [`keybindings`] - Default bindings per context
//! - [`registry`] - [`KeyRegistry`] resolving a key to an action

pub mod action;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use action::Action;
pub use context::{InputContext, KeyContext};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::KeyRegistry;
