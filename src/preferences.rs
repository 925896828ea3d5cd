//! Application preferences (stored in config directory)
//!
//! Small bits of UI state worth remembering between sessions, persisted as
//! XML in the platform config directory. Loading is best-effort: a missing
//! or unreadable file just yields defaults.

use quick_xml::de::from_str;
use quick_xml::se::to_string;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted application preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename = "LaigterPreferences")]
pub struct AppPreferences {
    /// Directory of the last opened sprite
    #[serde(rename = "lastOpenDir", default, skip_serializing_if = "Option::is_none")]
    pub last_open_dir: Option<String>,

    /// Directory last used to export or import a preset
    #[serde(rename = "lastPresetDir", default, skip_serializing_if = "Option::is_none")]
    pub last_preset_dir: Option<String>,
}

impl AppPreferences {
    /// Get the preferences file path
    fn prefs_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("Laigter");
            p.push("preferences.xml");
            p
        })
    }

    /// Load preferences from config directory
    pub fn load() -> Self {
        let Some(path) = Self::prefs_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(contents) => from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save preferences to config directory
    pub fn save(&self) -> Result<(), PreferencesError> {
        let Some(path) = Self::prefs_path() else {
            return Err(PreferencesError::NoConfigDir);
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(PreferencesError::Io)?;
        }
        let xml = to_string(self).map_err(PreferencesError::XmlWrite)?;
        let formatted = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", xml);
        fs::write(&path, formatted).map_err(PreferencesError::Io)?;
        Ok(())
    }

    /// Remember the directory a sprite was opened from, saving best-effort.
    pub fn set_last_open_dir(&mut self, dir: &std::path::Path) {
        self.last_open_dir = Some(dir.to_string_lossy().to_string());
        if let Err(e) = self.save() {
            log::warn!("Failed to save preferences: {}", e);
        }
    }

    /// Remember the directory used for preset export/import.
    pub fn set_last_preset_dir(&mut self, dir: &std::path::Path) {
        self.last_preset_dir = Some(dir.to_string_lossy().to_string());
        if let Err(e) = self.save() {
            log::warn!("Failed to save preferences: {}", e);
        }
    }

    /// Last sprite directory, if it still exists.
    pub fn get_last_open_dir(&self) -> Option<PathBuf> {
        self.last_open_dir.as_ref().map(PathBuf::from).filter(|p| p.exists())
    }

    /// Last preset export/import directory, if it still exists.
    pub fn get_last_preset_dir(&self) -> Option<PathBuf> {
        self.last_preset_dir.as_ref().map(PathBuf::from).filter(|p| p.exists())
    }
}

/// Preferences-related errors
#[derive(Debug)]
pub enum PreferencesError {
    Io(std::io::Error),
    XmlWrite(quick_xml::SeError),
    NoConfigDir,
}

impl std::fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferencesError::Io(e) => write!(f, "IO error: {}", e),
            PreferencesError::XmlWrite(e) => write!(f, "XML write error: {}", e),
            PreferencesError::NoConfigDir => write!(f, "Could not find config directory"),
        }
    }
}

impl std::error::Error for PreferencesError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences_are_empty() {
        let prefs = AppPreferences::default();
        assert!(prefs.last_open_dir.is_none());
        assert!(prefs.last_preset_dir.is_none());
        assert!(prefs.get_last_open_dir().is_none());
    }

    #[test]
    fn test_missing_dirs_filtered_out() {
        let prefs = AppPreferences {
            last_open_dir: Some("/definitely/not/a/real/path".to_string()),
            last_preset_dir: None,
        };
        assert!(prefs.get_last_open_dir().is_none());
    }
}
