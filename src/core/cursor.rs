//! Selection cursor and text input buffer.
//!
//! Both are small value types owned by `NavigationState`. The cursor keeps
//! `0 <= index < len` at all times; moving past either end wraps.

use super::error::NavError;
use super::scene::SceneId;

/// Bounded, wrapping index into a list of `len >= 1` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCursor {
    index: usize,
    len: usize,
}

impl SelectionCursor {
    /// Create a cursor at 0 over `len` items. `scene` is only used for the error.
    pub fn new(scene: SceneId, len: usize) -> Result<Self, NavError> {
        if len == 0 {
            return Err(NavError::EmptyList(scene));
        }
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn move_up(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn move_down(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Check the cursor against the list it is about to index.
    ///
    /// Fails when the list length changed since the cursor was built.
    pub fn validate(&self, scene: SceneId, list_len: usize) -> Result<usize, NavError> {
        if self.len != list_len || self.index >= list_len {
            return Err(NavError::Configuration {
                scene,
                index: self.index,
                len: list_len,
            });
        }
        Ok(self.index)
    }
}

/// Append/delete-last text buffer behind the file manager prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputBuffer {
    text: String,
}

impl TextInputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Remove the last character. No-op on an empty buffer.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
