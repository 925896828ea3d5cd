//! UI module for Laigter
//!
//! Provides the presets manager window and the settings panel.

pub mod presets_manager;
pub mod properties_panel;

pub use presets_manager::{PresetsAction, PresetsManagerWindow};
