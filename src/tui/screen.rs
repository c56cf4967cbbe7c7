//! # Device Screen Component
//!
//! Draws the current canvas inside a bordered box sized like the handheld
//! display, centered in the terminal.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `Canvas` lives in the sink and accumulates render commands
//! - `Screen` is created each frame with a borrowed canvas

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear};
use unicode_width::UnicodeWidthStr;

use crate::core::keymap::KeyBindings;
use crate::core::scene::ScreenLayout;
use crate::core::{InputEvent, RenderCommand, TextStyle};
use crate::tui::component::Component;

/// Text currently on the device screen.
///
/// `Clear` drops everything drawn so far; `TextAt` is kept in draw order.
/// Delay requests never reach the canvas.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    texts: Vec<RenderCommand>,
}

impl Canvas {
    pub fn apply(&mut self, commands: &[RenderCommand]) {
        for command in commands {
            match command {
                RenderCommand::Clear => self.texts.clear(),
                RenderCommand::TextAt { .. } => self.texts.push(command.clone()),
                RenderCommand::DelayRequest(_) => {}
            }
        }
    }

    pub fn texts(&self) -> &[RenderCommand] {
        &self.texts
    }
}

pub struct Screen<'a> {
    canvas: &'a Canvas,
    layout: ScreenLayout,
    hint: &'a str,
}

impl<'a> Screen<'a> {
    pub fn new(canvas: &'a Canvas, layout: ScreenLayout, hint: &'a str) -> Self {
        Self {
            canvas,
            layout,
            hint,
        }
    }
}

impl Component for Screen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let outer = device_rect(self.layout, area);
        frame.render_widget(Clear, outer);

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Astralixi ")
            .title_alignment(Alignment::Left);
        if self.hint.width() + 2 <= usize::from(outer.width) {
            block = block.title_bottom(Line::from(self.hint).centered());
        }
        let inner = block.inner(outer);
        frame.render_widget(block, outer);

        let buf = frame.buffer_mut();
        for command in self.canvas.texts() {
            let RenderCommand::TextAt { x, y, text, style } = command else {
                continue;
            };
            if *x >= inner.width || *y >= inner.height {
                continue;
            }
            let max_width = usize::from(inner.width - x);
            buf.set_stringn(inner.x + x, inner.y + y, text, max_width, style_for(*style));
        }
    }
}

fn style_for(style: TextStyle) -> Style {
    match style {
        TextStyle::Normal => Style::default().fg(Color::White),
        TextStyle::Title => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TextStyle::Highlight => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        TextStyle::Prompt => Style::default().fg(Color::Green),
    }
}

/// Device-sized rect (plus border) centered in `area`, clamped to fit.
fn device_rect(layout: ScreenLayout, area: Rect) -> Rect {
    let width = layout.cols.saturating_add(2).min(area.width);
    let height = layout.rows.saturating_add(2).min(area.height);
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Bottom-border hint naming the first menu and quit keys, e.g.
/// `" Esc Menu  Ctrl+C Quit "`.
pub fn help_hint(bindings: &KeyBindings) -> String {
    let mut parts = Vec::new();
    if let Some(key) = bindings.keys_for(InputEvent::EscapeToMenu).first() {
        parts.push(format!("{} Menu", display_key(key)));
    }
    if let Some(key) = bindings.keys_for(InputEvent::Quit).first() {
        parts.push(format!("{} Quit", display_key(key)));
    }
    format!(" {} ", parts.join("  "))
}

/// `"alt_enter"` → `"Alt+Enter"`.
fn display_key(name: &str) -> String {
    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyProfile;
    use crate::core::RenderPlan;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(canvas: &Canvas, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                Screen::new(canvas, ScreenLayout::default(), " Esc Menu ").render(f, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect::<String>()
    }

    #[test]
    fn test_clear_drops_earlier_text() {
        let mut plan = RenderPlan::new();
        plan.clear()
            .text(1, 2, "Opening a...", TextStyle::Normal)
            .clear()
            .text(1, 0, "File Manager", TextStyle::Title);
        let mut canvas = Canvas::default();
        canvas.apply(plan.commands());
        assert_eq!(canvas.texts().len(), 1);
    }

    #[test]
    fn test_render_shows_text_and_hint() {
        let mut plan = RenderPlan::new();
        plan.clear()
            .text(1, 0, "Astralixi OS", TextStyle::Title)
            .text(1, 2, ">File Manager", TextStyle::Highlight);
        let mut canvas = Canvas::default();
        canvas.apply(plan.commands());

        let text = screen_text(&canvas, 60, 20);
        assert!(text.contains("Astralixi OS"));
        assert!(text.contains(">File Manager"));
        assert!(text.contains("Esc Menu"));
    }

    #[test]
    fn test_text_outside_screen_is_clipped() {
        let mut canvas = Canvas::default();
        let mut plan = RenderPlan::new();
        plan.text(1, 50, "below", TextStyle::Normal)
            .text(38, 1, "overflowing", TextStyle::Normal);
        canvas.apply(plan.commands());

        // Tiny terminal: must not panic, nothing spills out
        let text = screen_text(&canvas, 20, 5);
        assert!(!text.contains("below"));
    }

    #[test]
    fn test_device_rect_is_centered() {
        let rect = device_rect(ScreenLayout::default(), Rect::new(0, 0, 82, 34));
        assert_eq!(rect, Rect::new(20, 10, 42, 14));
    }

    #[test]
    fn test_help_hint_per_profile() {
        let desktop = help_hint(&KeyBindings::for_profile(KeyProfile::Desktop));
        assert_eq!(desktop, " Esc Menu  Ctrl+C Quit ");
        let handheld = help_hint(&KeyBindings::for_profile(KeyProfile::Handheld));
        assert_eq!(handheld, " Alt+Enter Menu  Ctrl+C Quit ");
    }
}
