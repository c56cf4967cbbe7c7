//! # Input Events
//!
//! Every user action reaching the core is an `InputEvent`. Adapters translate
//! raw keys into these through [`KeyBindings`](super::keymap::KeyBindings);
//! the engine never sees a physical key.

use serde::{Deserialize, Serialize};

/// A single normalized user action, produced once per poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    Up,
    Down,
    Enter,
    Backspace,
    EscapeToMenu,
    Character(char),
    Quit,
    /// Nothing happened this poll.
    None,
}
