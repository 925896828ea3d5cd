//! Preset persistence and application
//!
//! A preset is a checked subset of the parameter catalog together with the
//! values those parameters had when the presets manager was opened. This
//! module owns the on-disk format and the dispatch from file codes to
//! processor setters; the dialog driving it lives in `ui::presets_manager`.

pub mod catalog;
pub mod store;

pub use catalog::{ParamGroup, ParamKind, Parameter, PARAMETERS, PARAM_COUNT};
pub use store::{Preset, PresetEntry, PresetError, PresetStore, MAGIC_HEADER};
