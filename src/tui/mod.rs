//! # TUI Adapter
//!
//! The ratatui-specific layer. Reads crossterm keys, turns them into
//! `InputEvent`s through the key bindings, and draws render plans inside a
//! device-sized box.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing is drawn on a schedule. The terminal is redrawn when the engine
//! returns a plan, once per stage, or when the terminal is resized. A poll
//! timeout produces `InputEvent::None`, which the engine ignores.
//!
//! Delay requests are honored here: the stage before the delay is drawn,
//! then the thread sleeps before the next stage.

mod component;
mod event;
mod screen;

use log::{debug, info};
use std::io::{self, stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::config::ResolvedConfig;
use crate::core::scene::ScreenLayout;
use crate::core::{EngineSettings, NavigationEngine, RenderPlan, RenderSink, drive};
use crate::tui::component::Component;
use crate::tui::event::TerminalInput;
use crate::tui::screen::{Canvas, Screen, help_hint};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Disambiguated escape codes let Alt+Enter arrive as one key; terminals
        // without the Kitty protocol ignore the request
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

/// Draws render plans to the terminal.
pub struct TerminalSink {
    terminal: DefaultTerminal,
    canvas: Canvas,
    layout: ScreenLayout,
    hint: String,
}

impl TerminalSink {
    pub fn new(terminal: DefaultTerminal, layout: ScreenLayout, hint: String) -> Self {
        Self {
            terminal,
            canvas: Canvas::default(),
            layout,
            hint,
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let Self {
            terminal,
            canvas,
            layout,
            hint,
        } = self;
        terminal.draw(|f| {
            let area = f.area();
            Screen::new(&*canvas, *layout, hint.as_str()).render(f, area);
        })?;
        Ok(())
    }
}

impl RenderSink for TerminalSink {
    fn present(&mut self, plan: &RenderPlan) -> io::Result<()> {
        for stage in plan.stages() {
            self.canvas.apply(stage.commands);
            self.draw()?;
            if let Some(wait) = stage.then_wait {
                debug!("Holding frame for {:?}", wait);
                std::thread::sleep(wait);
            }
        }
        Ok(())
    }

    fn repaint(&mut self) -> io::Result<()> {
        self.draw()
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let engine = NavigationEngine::new(EngineSettings::from(&config)).map_err(io::Error::other)?;
    let mut state = engine.new_state().map_err(io::Error::other)?;

    let hint = help_hint(&config.key_bindings);
    let mut input = TerminalInput::new(config.key_bindings);

    let terminal = ratatui::init();
    let mode_guard = TerminalModeGuard::new();
    let mut sink = TerminalSink::new(terminal, config.layout, hint);

    let result = drive(&engine, &mut state, &mut input, &mut sink);

    drop(mode_guard);
    ratatui::restore();
    info!("Terminal restored");
    result.map_err(io::Error::from)
}
