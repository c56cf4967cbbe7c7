//! # Core Navigation Logic
//!
//! This module contains the scene navigation engine.
//! It knows nothing about any specific screen or keyboard.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NavigationState      │
//!                    │  • InputEvent           │
//!                    │  • handle_event()       │
//!                    │  • RenderPlan           │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ InputSource / RenderSink
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Headless  │      │  Handheld  │
//!     │  Adapter   │      │  Adapter   │      │  (future)  │
//!     │ (ratatui)  │      │  (stdio)   │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `NavigationState`, all mutable UI state in one place
//! - [`engine`]: `NavigationEngine::handle_event`, the reducer
//! - [`scene`] / [`scenes`]: the `Scene` trait and its implementations
//! - [`event`] / [`keymap`]: input events and the key binding table
//! - [`render`]: render plans handed to sinks
//! - [`driver`]: the poll loop and the adapter traits

pub mod config;
pub mod cursor;
pub mod driver;
pub mod engine;
pub mod error;
pub mod event;
pub mod keymap;
pub mod render;
pub mod scene;
pub mod scenes;
pub mod state;

// Re-export commonly used types for convenience
pub use driver::{InputSource, Polled, RenderSink, drive};
pub use engine::{Effect, EngineSettings, NavigationEngine};
pub use error::{DriveError, NavError};
pub use event::InputEvent;
pub use render::{RenderCommand, RenderPlan, TextStyle};
pub use scene::SceneId;
pub use state::NavigationState;
