//! # Scenes
//!
//! A scene is one modal screen: it knows its items, how to draw itself and
//! how it reacts to an event. The engine owns one instance per `SceneId`
//! and dispatches to the active one. Adding a screen means adding a
//! `SceneId` variant and a `Scene` implementation.

use std::fmt;

use super::cursor::{SelectionCursor, TextInputBuffer};
use super::event::InputEvent;
use super::render::RenderPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Menu,
    FileManager,
    AppLauncherPlaceholder,
    SettingsPlaceholder,
}

impl SceneId {
    pub const ALL: [SceneId; 4] = [
        SceneId::Menu,
        SceneId::FileManager,
        SceneId::AppLauncherPlaceholder,
        SceneId::SettingsPlaceholder,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SceneId::Menu => "Menu",
            SceneId::FileManager => "File Manager",
            SceneId::AppLauncherPlaceholder => "App Launcher",
            SceneId::SettingsPlaceholder => "Settings",
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cell grid the scenes lay themselves out on.
///
/// The handheld screen is 240x240 pixels; at text scale 2 that is roughly
/// 40 columns by 12 rows, which is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub cols: u16,
    pub rows: u16,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self { cols: 40, rows: 12 }
    }
}

impl ScreenLayout {
    /// Left margin for all text.
    pub const MARGIN_X: u16 = 1;
    pub const TITLE_ROW: u16 = 0;
    const LIST_TOP: u16 = 2;

    /// Row of the `i`-th list entry.
    pub fn list_row(&self, i: usize) -> u16 {
        Self::LIST_TOP.saturating_add(u16::try_from(i).unwrap_or(u16::MAX))
    }

    /// The bottom row, used by the command prompt.
    pub fn prompt_row(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    /// How many list entries fit between the list top and the prompt row.
    /// Never zero, so the selected entry always has a row.
    pub fn list_capacity(&self) -> usize {
        usize::from(self.prompt_row().saturating_sub(Self::LIST_TOP)).max(1)
    }

    /// First visible entry of a list scrolled just far enough to show
    /// `selected`.
    pub fn scroll_offset(&self, selected: usize) -> usize {
        (selected + 1).saturating_sub(self.list_capacity())
    }
}

/// What a scene returns after handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneOutcome {
    /// Scene to switch to, if any.
    pub next: Option<SceneId>,
    pub plan: RenderPlan,
}

impl SceneOutcome {
    pub fn stay(plan: RenderPlan) -> Self {
        Self { next: None, plan }
    }

    pub fn switch(next: SceneId) -> Self {
        Self {
            next: Some(next),
            plan: RenderPlan::new(),
        }
    }
}

pub trait Scene {
    fn id(&self) -> SceneId;

    /// Number of selectable entries. Zero means the scene has no cursor.
    fn item_count(&self) -> usize {
        0
    }

    /// Draw the scene as it currently stands.
    fn render(&self, cursor: Option<&SelectionCursor>, buffer: &TextInputBuffer) -> RenderPlan;

    /// React to one event. Global events are filtered out by the engine
    /// unless the scene opts in through [`Scene::handles_menu_return`].
    fn on_event(
        &self,
        cursor: Option<&mut SelectionCursor>,
        buffer: &mut TextInputBuffer,
        event: InputEvent,
    ) -> SceneOutcome;

    /// Whether this scene wants to see the `EscapeToMenu` event after the
    /// engine has already switched to it.
    fn handles_menu_return(&self) -> bool {
        false
    }
}

/// Draw a titled list with a `>` marker on the selected entry. Lists longer
/// than the screen show a window that keeps the selection visible.
pub(crate) fn render_list<'a>(
    plan: &mut RenderPlan,
    layout: &ScreenLayout,
    title: &str,
    items: impl IntoIterator<Item = &'a str>,
    selected: usize,
) {
    use super::render::TextStyle;

    plan.clear()
        .text(ScreenLayout::MARGIN_X, ScreenLayout::TITLE_ROW, title, TextStyle::Title);
    let offset = layout.scroll_offset(selected);
    let visible = items
        .into_iter()
        .enumerate()
        .skip(offset)
        .take(layout.list_capacity());
    for (row, (i, item)) in visible.enumerate() {
        let (prefix, style) = if i == selected {
            (">", TextStyle::Highlight)
        } else {
            (" ", TextStyle::Normal)
        };
        plan.text(
            ScreenLayout::MARGIN_X,
            layout.list_row(row),
            format!("{prefix}{item}"),
            style,
        );
    }
}
