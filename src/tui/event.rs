use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use crate::core::keymap::KeyBindings;
use crate::core::{InputEvent, InputSource, Polled};

/// Default poll timeout. A timeout yields `InputEvent::None`, which the
/// engine ignores without redrawing.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Crossterm keyboard as an `InputSource`.
pub struct TerminalInput {
    bindings: KeyBindings,
    timeout: Duration,
}

impl TerminalInput {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            timeout: POLL_TIMEOUT,
        }
    }
}

impl InputSource for TerminalInput {
    fn next_event(&mut self) -> io::Result<Option<Polled>> {
        if !event::poll(self.timeout)? {
            return Ok(Some(Polled::Event(InputEvent::None)));
        }
        let polled = match event::read()? {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                let event = key_name(&key_event)
                    .map(|name| self.bindings.translate(&name))
                    .unwrap_or(InputEvent::None);
                Polled::Event(event)
            }
            Event::Resize(_, _) => Polled::Resized,
            _ => Polled::Event(InputEvent::None),
        };
        Ok(Some(polled))
    }
}

/// Name a key press the way the binding table expects it.
///
/// Releases and repeats are dropped so one physical press is one event.
pub fn key_name(key_event: &KeyEvent) -> Option<String> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    let modifiers = key_event.modifiers;
    let name = match key_event.code {
        // Ctrl wins over Shift/Alt, so Ctrl+Shift+C still quits
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => {
            format!("ctrl_{}", c.to_ascii_lowercase())
        }
        KeyCode::Enter if modifiers.contains(KeyModifiers::ALT) => "alt_enter".to_string(),
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::ALT) => format!("alt_{c}"),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };
    Some(name)
}
