//! Shared UI mechanisms for the folio portfolio application.
//!
//! Provides the appearance (light/dark) store, the viewport-reveal
//! mechanism, and the themed root / toggle components the app builds on.

pub mod appearance;
pub mod theme;
pub mod visibility;

pub use appearance::{AppearanceMode, AppearanceStore, FilePreferences, PreferenceError, PreferenceStore};
pub use theme::{current_appearance, initialize_appearance, toggle_appearance, ThemeToggle, ThemedRoot, CURRENT_MODE};
pub use visibility::{use_reveal, RevealState, VisibilityLatch, DEFAULT_REVEAL_THRESHOLD};

/// Shared CSS containing design tokens, light/dark theme definitions,
/// and the reveal transition classes.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
