//! UI layer for desktop GUI: app shell, shared widgets, and theme.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{DesktopGuiApp, PersistedGuiSettings, SETTINGS_STORAGE_KEY};
