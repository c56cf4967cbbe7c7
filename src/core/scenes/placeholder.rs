//! Placeholder scenes that show one fixed message and ignore input.

use crate::core::cursor::{SelectionCursor, TextInputBuffer};
use crate::core::event::InputEvent;
use crate::core::render::{RenderPlan, TextStyle};
use crate::core::scene::{Scene, SceneId, SceneOutcome, ScreenLayout};

pub struct PlaceholderScene {
    id: SceneId,
    message: &'static str,
    layout: ScreenLayout,
}

impl PlaceholderScene {
    pub fn app_launcher(layout: ScreenLayout) -> Self {
        Self {
            id: SceneId::AppLauncherPlaceholder,
            message: "Launching App...",
            layout,
        }
    }

    pub fn settings(layout: ScreenLayout) -> Self {
        Self {
            id: SceneId::SettingsPlaceholder,
            message: "Settings Coming Soon!",
            layout,
        }
    }
}

impl Scene for PlaceholderScene {
    fn id(&self) -> SceneId {
        self.id
    }

    fn render(&self, _cursor: Option<&SelectionCursor>, _buffer: &TextInputBuffer) -> RenderPlan {
        let mut plan = RenderPlan::new();
        plan.clear().text(
            ScreenLayout::MARGIN_X,
            self.layout.list_row(0),
            self.message,
            TextStyle::Normal,
        );
        plan
    }

    fn on_event(
        &self,
        cursor: Option<&mut SelectionCursor>,
        buffer: &mut TextInputBuffer,
        _event: InputEvent,
    ) -> SceneOutcome {
        SceneOutcome::stay(self.render(cursor.as_deref(), buffer))
    }
}
