//! # Main Menu
//!
//! The entry scene. Up/Down move the selection, Enter opens the scene the
//! selected entry points at.

use crate::core::cursor::{SelectionCursor, TextInputBuffer};
use crate::core::event::InputEvent;
use crate::core::render::RenderPlan;
use crate::core::scene::{Scene, SceneId, SceneOutcome, ScreenLayout, render_list};

pub const MENU_TITLE: &str = "Astralixi OS";

#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub label: &'static str,
    pub target: SceneId,
}

pub const MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry {
        label: "App Launcher",
        target: SceneId::AppLauncherPlaceholder,
    },
    MenuEntry {
        label: "File Manager",
        target: SceneId::FileManager,
    },
    MenuEntry {
        label: "Settings",
        target: SceneId::SettingsPlaceholder,
    },
];

pub struct MenuScene {
    layout: ScreenLayout,
    handles_escape: bool,
}

impl MenuScene {
    pub fn new(layout: ScreenLayout) -> Self {
        Self {
            layout,
            handles_escape: false,
        }
    }

    /// Opt in to seeing the `EscapeToMenu` event after the engine switched here.
    pub fn with_escape_handling(mut self, enabled: bool) -> Self {
        self.handles_escape = enabled;
        self
    }
}

impl Scene for MenuScene {
    fn id(&self) -> SceneId {
        SceneId::Menu
    }

    fn item_count(&self) -> usize {
        MENU_ENTRIES.len()
    }

    fn render(&self, cursor: Option<&SelectionCursor>, _buffer: &TextInputBuffer) -> RenderPlan {
        let mut plan = RenderPlan::new();
        render_list(
            &mut plan,
            &self.layout,
            MENU_TITLE,
            MENU_ENTRIES.iter().map(|e| e.label),
            cursor.map_or(0, SelectionCursor::index),
        );
        plan
    }

    fn on_event(
        &self,
        mut cursor: Option<&mut SelectionCursor>,
        buffer: &mut TextInputBuffer,
        event: InputEvent,
    ) -> SceneOutcome {
        match (event, cursor.as_deref_mut()) {
            (InputEvent::Up, Some(c)) => c.move_up(),
            (InputEvent::Down, Some(c)) => c.move_down(),
            (InputEvent::Enter, c) => {
                let index = c.map_or(0, |c| c.index());
                if let Some(entry) = MENU_ENTRIES.get(index) {
                    return SceneOutcome::switch(entry.target);
                }
            }
            _ => {}
        }
        SceneOutcome::stay(self.render(cursor.as_deref(), buffer))
    }

    fn handles_menu_return(&self) -> bool {
        self.handles_escape
    }
}
