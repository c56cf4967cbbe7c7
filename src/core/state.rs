//! # Navigation State
//!
//! The single source of mutable UI state. Scenes never hold state of their
//! own; everything that changes between events lives here.
//!
//! ```text
//! NavigationState
//! ├── scene: SceneId                          // active scene
//! ├── cursors: HashMap<SceneId, Cursor>       // one per list scene
//! ├── text_input: TextInputBuffer             // file manager prompt
//! └── terminated: bool                        // set by Quit, never cleared
//! ```
//!
//! Fields are private. Only the engine mutates the state, through the
//! `pub(crate)` methods below; everyone else gets read accessors.

use std::collections::HashMap;

use super::cursor::{SelectionCursor, TextInputBuffer};
use super::error::NavError;
use super::scene::{Scene, SceneId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    scene: SceneId,
    cursors: HashMap<SceneId, SelectionCursor>,
    text_input: TextInputBuffer,
    terminated: bool,
}

impl NavigationState {
    /// Build a state with Menu active and every cursor at 0.
    ///
    /// A cursor is created for each scene that reports items.
    pub fn new<'a>(scenes: impl IntoIterator<Item = &'a dyn Scene>) -> Result<Self, NavError> {
        let mut cursors = HashMap::new();
        for scene in scenes {
            let count = scene.item_count();
            if count > 0 {
                cursors.insert(scene.id(), SelectionCursor::new(scene.id(), count)?);
            }
        }
        Ok(Self {
            scene: SceneId::Menu,
            cursors,
            text_input: TextInputBuffer::new(),
            terminated: false,
        })
    }

    pub fn scene(&self) -> SceneId {
        self.scene
    }

    pub fn cursor(&self, scene: SceneId) -> Option<&SelectionCursor> {
        self.cursors.get(&scene)
    }

    pub fn text_input(&self) -> &TextInputBuffer {
        &self.text_input
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Split borrow used by the engine to hand a scene its cursor and buffer.
    pub(crate) fn scene_parts(
        &mut self,
        scene: SceneId,
    ) -> (Option<&mut SelectionCursor>, &mut TextInputBuffer) {
        (self.cursors.get_mut(&scene), &mut self.text_input)
    }

    /// Make `scene` active with a fresh cursor. Entering the file manager
    /// also empties its prompt.
    pub(crate) fn enter(&mut self, scene: SceneId) {
        self.scene = scene;
        if let Some(cursor) = self.cursors.get_mut(&scene) {
            cursor.reset();
        }
        if scene == SceneId::FileManager {
            self.text_input.clear();
        }
    }

    pub(crate) fn terminate(&mut self) {
        self.terminated = true;
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_engine;

    use super::*;

    #[test]
    fn test_state_new_defaults() {
        let engine = test_engine();
        let state = engine.new_state().unwrap();
        assert_eq!(state.scene(), SceneId::Menu);
        assert_eq!(state.cursor(SceneId::Menu).map(|c| c.index()), Some(0));
        assert_eq!(state.cursor(SceneId::FileManager).map(|c| c.len()), Some(5));
        assert!(state.cursor(SceneId::SettingsPlaceholder).is_none());
        assert!(state.text_input().is_empty());
        assert!(!state.is_terminated());
    }

    #[test]
    fn test_enter_resets_cursor_and_prompt() {
        let engine = test_engine();
        let mut state = engine.new_state().unwrap();
        {
            let (cursor, buffer) = state.scene_parts(SceneId::FileManager);
            cursor.unwrap().move_up();
            buffer.push('q');
        }
        state.enter(SceneId::FileManager);
        assert_eq!(state.cursor(SceneId::FileManager).map(|c| c.index()), Some(0));
        assert!(state.text_input().is_empty());
    }
}
