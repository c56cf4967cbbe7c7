//! Astralixi library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod headless;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which physical key returns to the main menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyProfile {
    /// Desktop terminal: Esc returns to the menu.
    #[default]
    Desktop,
    /// Handheld keyboard: Alt+Enter returns to the menu.
    Handheld,
}
