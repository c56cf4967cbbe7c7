//! # Key Bindings
//!
//! Maps raw key names (`"up"`, `"esc"`, `"alt_enter"`, `"a"`) to
//! [`InputEvent`]s. Adapters produce the names; the table decides what they
//! mean. Which key returns to the menu differs between devices, so it comes
//! from a [`KeyProfile`] preset and can be overridden per key in the config.

use log::debug;
use std::collections::HashMap;

use crate::KeyProfile;

use super::event::InputEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    table: HashMap<String, InputEvent>,
}

impl KeyBindings {
    pub fn for_profile(profile: KeyProfile) -> Self {
        let mut bindings = Self {
            table: HashMap::new(),
        };
        bindings
            .bind("up", InputEvent::Up)
            .bind("down", InputEvent::Down)
            .bind("enter", InputEvent::Enter)
            .bind("backspace", InputEvent::Backspace)
            .bind("ctrl_c", InputEvent::Quit)
            .bind("ctrl_q", InputEvent::Quit);

        match profile {
            KeyProfile::Desktop => bindings.bind("esc", InputEvent::EscapeToMenu),
            KeyProfile::Handheld => bindings.bind("alt_enter", InputEvent::EscapeToMenu),
        };
        bindings
    }

    /// Apply per-key overrides on top of the preset.
    pub fn with_overrides(mut self, overrides: &HashMap<String, InputEvent>) -> Self {
        for (key, event) in overrides {
            debug!("Key override: {} -> {:?}", key, event);
            self.bind(key, *event);
        }
        self
    }

    pub fn bind(&mut self, key: &str, event: InputEvent) -> &mut Self {
        self.table.insert(key.to_string(), event);
        self
    }

    /// Translate a key name. Unbound single characters become
    /// `Character(c)`; any other unbound name is `None`.
    pub fn translate(&self, key: &str) -> InputEvent {
        if let Some(event) = self.table.get(key) {
            return *event;
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => InputEvent::Character(c),
            _ => InputEvent::None,
        }
    }

    /// Key names bound to `event`, sorted.
    pub fn keys_for(&self, event: InputEvent) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .table
            .iter()
            .filter(|(_, e)| **e == event)
            .map(|(k, _)| k.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::for_profile(KeyProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_uses_esc() {
        let keys = KeyBindings::for_profile(KeyProfile::Desktop);
        assert_eq!(keys.translate("esc"), InputEvent::EscapeToMenu);
        assert_eq!(keys.translate("alt_enter"), InputEvent::None);
    }

    #[test]
    fn test_handheld_uses_alt_enter() {
        let keys = KeyBindings::for_profile(KeyProfile::Handheld);
        assert_eq!(keys.translate("alt_enter"), InputEvent::EscapeToMenu);
        assert_eq!(keys.translate("esc"), InputEvent::None);
    }

    #[test]
    fn test_characters_and_unknown_keys() {
        let keys = KeyBindings::default();
        assert_eq!(keys.translate("a"), InputEvent::Character('a'));
        assert_eq!(keys.translate("é"), InputEvent::Character('é'));
        assert_eq!(keys.translate("f5"), InputEvent::None);
        assert_eq!(keys.translate(""), InputEvent::None);
    }

    #[test]
    fn test_overrides_replace_and_add() {
        let overrides = HashMap::from([
            ("esc".to_string(), InputEvent::Quit),
            ("f1".to_string(), InputEvent::EscapeToMenu),
        ]);
        let keys = KeyBindings::for_profile(KeyProfile::Desktop).with_overrides(&overrides);
        assert_eq!(keys.translate("esc"), InputEvent::Quit);
        assert_eq!(keys.translate("f1"), InputEvent::EscapeToMenu);
        assert_eq!(keys.keys_for(InputEvent::Quit), vec!["ctrl_c", "ctrl_q", "esc"]);
    }

    #[test]
    fn test_bound_character_wins() {
        let mut keys = KeyBindings::default();
        keys.bind("q", InputEvent::Quit);
        assert_eq!(keys.translate("q"), InputEvent::Quit);
    }
}
