//! Editor settings - persisted JSON configuration with safe defaults.
//!
//! Settings live at `<config dir>/layerboard/settings.json`. Every field has a
//! serde default, so partial or older files still load.

use crate::constants::{
    CONNECTION_HIT_TOLERANCE, DEFAULT_CONTAINER_SIZE, HANDLE_HIT_RADIUS, ZOOM_STEP,
};
use crate::hit_testing::HitTolerances;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Default settings file location, if the platform has a config directory
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("layerboard").join("settings.json"))
}

/// How the user starts a new connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionInitiation {
    /// Drag out of a handle on a node side
    #[default]
    Handles,
    /// Click the source node, then the target. Each click on a node links
    /// from the previously clicked one; a press on empty canvas drops a
    /// loose end from it.
    ClickToLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub connection_initiation: ConnectionInitiation,
    /// Releasing a new connection over empty canvas leaves a loose endpoint
    /// instead of discarding the attempt
    pub loose_endpoints_allowed: bool,
    /// Scale change per wheel notch
    pub zoom_step: f64,
    /// Screen-pixel radius of node connection handles
    pub handle_hit_radius: f64,
    /// Screen-pixel distance within which a click selects a connection
    pub connection_hit_tolerance: f64,
    /// Container size used until the host reports one
    pub container_width: f64,
    pub container_height: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            connection_initiation: ConnectionInitiation::Handles,
            loose_endpoints_allowed: true,
            zoom_step: ZOOM_STEP,
            handle_hit_radius: HANDLE_HIT_RADIUS,
            connection_hit_tolerance: CONNECTION_HIT_TOLERANCE,
            container_width: DEFAULT_CONTAINER_SIZE.0,
            container_height: DEFAULT_CONTAINER_SIZE.1,
        }
    }
}

impl EditorSettings {
    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Load from the default location, falling back to defaults on any failure
    pub fn load_or_default() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), "Failed to load settings: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings atomically (temp file + rename)
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    pub fn hit_tolerances(&self) -> HitTolerances {
        HitTolerances {
            handle_radius: self.handle_hit_radius,
            connection: self.connection_hit_tolerance,
        }
    }

    pub fn container_size(&self) -> (f64, f64) {
        (self.container_width, self.container_height)
    }
}
