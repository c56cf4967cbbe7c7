//! # Headless Adapter
//!
//! Line-oriented stand-in for a screen and keyboard: reads one key name per
//! line (`down`, `enter`, `a`, `esc`) and writes every render plan as plain
//! text. Delay requests are printed, not slept. Useful for scripting the UI
//! on a desktop without a real terminal.
//!
//! ```text
//! $ printf 'down\nenter\n' | astralixi --headless
//! clear
//! text 1,0 title "Astralixi OS"
//! ...
//! ```

use log::info;
use std::io::{self, BufRead, Write};

use crate::core::config::ResolvedConfig;
use crate::core::keymap::KeyBindings;
use crate::core::{
    EngineSettings, InputSource, NavigationEngine, Polled, RenderCommand, RenderPlan, RenderSink,
    TextStyle, drive,
};

/// Reads key names, one per line, and translates them through the bindings.
pub struct LineInput<R> {
    reader: R,
    bindings: KeyBindings,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R, bindings: KeyBindings) -> Self {
        Self { reader, bindings }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_event(&mut self) -> io::Result<Option<Polled>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let key = line.trim_end_matches(['\r', '\n']);
        Ok(Some(Polled::Event(self.bindings.translate(key))))
    }
}

/// Writes render plans as one command per line, plans separated by `---`.
pub struct TextSink<W> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for TextSink<W> {
    fn present(&mut self, plan: &RenderPlan) -> io::Result<()> {
        for command in plan.commands() {
            match command {
                RenderCommand::Clear => writeln!(self.writer, "clear")?,
                RenderCommand::TextAt { x, y, text, style } => {
                    writeln!(self.writer, "text {x},{y} {} {text:?}", style_name(*style))?
                }
                RenderCommand::DelayRequest(d) => {
                    writeln!(self.writer, "delay {}ms", d.as_millis())?
                }
            }
        }
        writeln!(self.writer, "---")?;
        self.writer.flush()
    }
}

fn style_name(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Normal => "normal",
        TextStyle::Title => "title",
        TextStyle::Highlight => "highlight",
        TextStyle::Prompt => "prompt",
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let engine = NavigationEngine::new(EngineSettings::from(&config)).map_err(io::Error::other)?;
    let mut state = engine.new_state().map_err(io::Error::other)?;

    let stdin = io::stdin();
    let mut input = LineInput::new(stdin.lock(), config.key_bindings);
    let mut sink = TextSink::new(io::stdout().lock());

    info!("Headless session started");
    drive(&engine, &mut state, &mut input, &mut sink)?;
    Ok(())
}
