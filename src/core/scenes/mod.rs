//! Concrete scene implementations.
//!
//! ```text
//! scenes/
//! ├── menu.rs          (Main menu, the only scene that switches scenes)
//! ├── file_manager.rs  (Demo file list + command prompt)
//! └── placeholder.rs   (App launcher / settings stand-ins)
//! ```

pub mod file_manager;
pub mod menu;
pub mod placeholder;

pub use file_manager::FileManagerScene;
pub use menu::MenuScene;
pub use placeholder::PlaceholderScene;
