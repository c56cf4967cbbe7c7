//! # Navigation Engine
//!
//! Maps `(state, event)` to a new state and an [`Effect`]. Global events are
//! resolved first, everything else goes to the active scene.
//!
//! ```text
//! State + InputEvent  →  handle_event()  →  State' + Effect
//! ```
//!
//! Precedence:
//!
//! 1. A terminated state ignores everything.
//! 2. `Quit` terminates.
//! 3. `None` is silent: no state change, no redraw.
//! 4. `EscapeToMenu` switches to the menu with its cursor at 0. The menu only
//!    sees the event itself if it asks for it.
//! 5. Anything else is dispatched to the active scene.
//!
//! The engine draws nothing and never sleeps. Delays come back as data
//! inside the render plan.

use log::{debug, info, warn};
use std::time::Duration;

use super::config::ResolvedConfig;
use super::error::NavError;
use super::event::InputEvent;
use super::render::RenderPlan;
use super::scene::{Scene, SceneId, ScreenLayout};
use super::scenes::{FileManagerScene, MenuScene, PlaceholderScene};
use super::state::NavigationState;

/// What the caller should do after one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed; don't redraw.
    None,
    Render(RenderPlan),
    /// The engine reached its terminal state.
    Quit,
}

/// Everything needed to build the scene set.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub file_entries: Vec<String>,
    pub open_delay: Duration,
    pub layout: ScreenLayout,
    /// Whether the menu also handles the `EscapeToMenu` that switched to it.
    pub menu_handles_escape: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        use super::scenes::file_manager::{DEFAULT_ENTRIES, DEFAULT_OPEN_DELAY};

        Self {
            file_entries: DEFAULT_ENTRIES.iter().map(|s| s.to_string()).collect(),
            open_delay: DEFAULT_OPEN_DELAY,
            layout: ScreenLayout::default(),
            menu_handles_escape: false,
        }
    }
}

impl From<&ResolvedConfig> for EngineSettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            file_entries: config.file_entries.clone(),
            open_delay: config.open_delay,
            layout: config.layout,
            menu_handles_escape: config.menu_handles_escape,
        }
    }
}

pub struct NavigationEngine {
    menu: MenuScene,
    file_manager: FileManagerScene,
    app_launcher: PlaceholderScene,
    settings: PlaceholderScene,
}

impl NavigationEngine {
    pub fn new(settings: EngineSettings) -> Result<Self, NavError> {
        if settings.file_entries.is_empty() {
            warn!("File manager configured with no entries");
            return Err(NavError::EmptyList(SceneId::FileManager));
        }
        Ok(Self {
            menu: MenuScene::new(settings.layout)
                .with_escape_handling(settings.menu_handles_escape),
            file_manager: FileManagerScene::new(
                settings.file_entries,
                settings.open_delay,
                settings.layout,
            ),
            app_launcher: PlaceholderScene::app_launcher(settings.layout),
            settings: PlaceholderScene::settings(settings.layout),
        })
    }

    pub fn scene(&self, id: SceneId) -> &dyn Scene {
        match id {
            SceneId::Menu => &self.menu,
            SceneId::FileManager => &self.file_manager,
            SceneId::AppLauncherPlaceholder => &self.app_launcher,
            SceneId::SettingsPlaceholder => &self.settings,
        }
    }

    pub fn scenes(&self) -> impl Iterator<Item = &dyn Scene> {
        SceneId::ALL.into_iter().map(|id| self.scene(id))
    }

    /// A fresh state sized for this engine's scenes.
    pub fn new_state(&self) -> Result<NavigationState, NavError> {
        NavigationState::new(self.scenes())
    }

    /// Render the active scene without handling an event (first frame).
    pub fn initial_plan(&self, state: &NavigationState) -> Result<RenderPlan, NavError> {
        let scene = self.scene(state.scene());
        self.check_cursor(state, scene)?;
        Ok(scene.render(state.cursor(scene.id()), state.text_input()))
    }

    pub fn handle_event(
        &self,
        state: &mut NavigationState,
        event: InputEvent,
    ) -> Result<Effect, NavError> {
        if state.is_terminated() {
            debug!("Ignoring {:?} after quit", event);
            return Ok(Effect::None);
        }

        match event {
            InputEvent::None => return Ok(Effect::None),
            InputEvent::Quit => {
                info!("Quit from {}", state.scene());
                state.terminate();
                return Ok(Effect::Quit);
            }
            InputEvent::EscapeToMenu => {
                if state.scene() != SceneId::Menu {
                    info!("Scene transition: {} -> {} (global)", state.scene(), SceneId::Menu);
                }
                state.enter(SceneId::Menu);
                if !self.menu.handles_menu_return() {
                    return self.initial_plan(state).map(Effect::Render);
                }
            }
            _ => {}
        }

        self.dispatch(state, event)
    }

    fn dispatch(&self, state: &mut NavigationState, event: InputEvent) -> Result<Effect, NavError> {
        let id = state.scene();
        let scene = self.scene(id);
        self.check_cursor(state, scene)?;
        debug!("{} handling {:?}", id, event);

        let (cursor, buffer) = state.scene_parts(id);
        let outcome = scene.on_event(cursor, buffer, event);

        let Some(next) = outcome.next else {
            return Ok(Effect::Render(outcome.plan));
        };

        info!("Scene transition: {} -> {}", id, next);
        state.enter(next);
        let mut plan = outcome.plan;
        plan.extend(self.initial_plan(state)?);
        Ok(Effect::Render(plan))
    }

    /// Fail fast when the state's cursor doesn't fit the scene's list.
    fn check_cursor(&self, state: &NavigationState, scene: &dyn Scene) -> Result<(), NavError> {
        let count = scene.item_count();
        let result = match state.cursor(scene.id()) {
            Some(cursor) => cursor.validate(scene.id(), count).map(|_| ()),
            None if count == 0 => Ok(()),
            None => Err(NavError::Configuration {
                scene: scene.id(),
                index: 0,
                len: count,
            }),
        };
        if let Err(ref e) = result {
            warn!("{e}");
        }
        result
    }
}
