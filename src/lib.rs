//! Laigter Library
//!
//! Generation-settings and preset management for 2D sprite lighting maps.

pub mod app;
pub mod preferences;
pub mod presets;
pub mod processor;
pub mod ui;

// Re-export commonly used types
pub use app::LaigterApp;
pub use preferences::AppPreferences;
pub use presets::{Preset, PresetError, PresetStore};
pub use processor::{ImageProcessor, ParallaxType, ProcessorSettings};
