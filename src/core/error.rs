//! Error types for the navigation core and its driver loop.

use std::fmt;

use super::scene::SceneId;

/// Errors raised by the navigation engine.
///
/// Ordinary input can never fail: cursor moves wrap, backspace on an empty
/// prompt is a no-op and unknown events are ignored. These variants only
/// signal a state that does not match the scenes it is used with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The cursor for `scene` does not fit the scene's current item list.
    Configuration {
        scene: SceneId,
        index: usize,
        len: usize,
    },
    /// A list scene was configured with no items.
    EmptyList(SceneId),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::Configuration { scene, index, len } => write!(
                f,
                "configuration error: cursor {index} does not fit {len} items in {scene}"
            ),
            NavError::EmptyList(scene) => write!(f, "configuration error: {scene} has no items"),
        }
    }
}

impl std::error::Error for NavError {}

/// Errors that stop the driver loop.
#[derive(Debug)]
pub enum DriveError {
    /// Input source or render sink failed.
    Io(std::io::Error),
    Navigation(NavError),
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::Io(e) => write!(f, "I/O error: {e}"),
            DriveError::Navigation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DriveError {}

impl From<std::io::Error> for DriveError {
    fn from(e: std::io::Error) -> Self {
        DriveError::Io(e)
    }
}

impl From<NavError> for DriveError {
    fn from(e: NavError) -> Self {
        DriveError::Navigation(e)
    }
}

impl From<DriveError> for std::io::Error {
    fn from(e: DriveError) -> Self {
        match e {
            DriveError::Io(io) => io,
            DriveError::Navigation(nav) => std::io::Error::other(nav),
        }
    }
}
