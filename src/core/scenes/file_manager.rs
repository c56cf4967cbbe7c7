//! # File Manager
//!
//! A demonstrative file list with a command prompt on the bottom row.
//! Nothing here touches the file system: "opening" an entry is a message
//! followed by a delay request that the sink schedules.

use std::time::Duration;

use crate::core::cursor::{SelectionCursor, TextInputBuffer};
use crate::core::event::InputEvent;
use crate::core::render::{RenderPlan, TextStyle};
use crate::core::scene::{Scene, SceneId, SceneOutcome, ScreenLayout, render_list};

pub const FILE_MANAGER_TITLE: &str = "File Manager";

pub const DEFAULT_ENTRIES: &[&str] = &[
    "notes.txt",
    "notes1.txt",
    "notes2.txt",
    "apps/",
    "config.sys",
];

pub const DEFAULT_OPEN_DELAY: Duration = Duration::from_secs(2);

pub struct FileManagerScene {
    entries: Vec<String>,
    open_delay: Duration,
    layout: ScreenLayout,
}

impl FileManagerScene {
    pub fn new(entries: Vec<String>, open_delay: Duration, layout: ScreenLayout) -> Self {
        Self {
            entries,
            open_delay,
            layout,
        }
    }

    fn render_opening(&self, entry: &str) -> RenderPlan {
        let mut plan = RenderPlan::new();
        plan.clear()
            .text(
                ScreenLayout::MARGIN_X,
                self.layout.list_row(0),
                format!("Opening {entry}..."),
                TextStyle::Normal,
            )
            .delay(self.open_delay);
        plan
    }
}

impl Scene for FileManagerScene {
    fn id(&self) -> SceneId {
        SceneId::FileManager
    }

    fn item_count(&self) -> usize {
        self.entries.len()
    }

    fn render(&self, cursor: Option<&SelectionCursor>, buffer: &TextInputBuffer) -> RenderPlan {
        let mut plan = RenderPlan::new();
        render_list(
            &mut plan,
            &self.layout,
            FILE_MANAGER_TITLE,
            self.entries.iter().map(String::as_str),
            cursor.map_or(0, SelectionCursor::index),
        );
        plan.text(
            ScreenLayout::MARGIN_X,
            self.layout.prompt_row(),
            format!("> {}", buffer.as_str()),
            TextStyle::Prompt,
        );
        plan
    }

    fn on_event(
        &self,
        mut cursor: Option<&mut SelectionCursor>,
        buffer: &mut TextInputBuffer,
        event: InputEvent,
    ) -> SceneOutcome {
        match event {
            InputEvent::Up => {
                if let Some(c) = cursor.as_deref_mut() {
                    c.move_up();
                }
            }
            InputEvent::Down => {
                if let Some(c) = cursor.as_deref_mut() {
                    c.move_down();
                }
            }
            InputEvent::Character(c) => buffer.push(c),
            InputEvent::Backspace => buffer.backspace(),
            InputEvent::Enter => {
                let index = cursor.as_deref().map_or(0, SelectionCursor::index);
                // Submitting clears the prompt; commands are not interpreted.
                buffer.clear();
                if let Some(entry) = self.entries.get(index) {
                    log::info!("Opening {entry}");
                    let mut plan = self.render_opening(entry);
                    plan.extend(self.render(cursor.as_deref(), buffer));
                    return SceneOutcome::stay(plan);
                }
            }
            _ => {}
        }
        SceneOutcome::stay(self.render(cursor.as_deref(), buffer))
    }
}
