//! Cosmetic editor settings, persisted independently of the line document.

use crate::storage::{Storage, StorageError, StorageResult};
use log::warn;
use serde::{Deserialize, Serialize};

/// Fixed storage key for persisted editor settings.
pub const SETTINGS_STORAGE_KEY: &str = "graphic_editor_settings_v1";

/// Editor settings: grid and default stroke cosmetics. These never touch
/// the line document or its history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorSettings {
    /// Grid cell size in document units.
    pub grid_size: f64,
    /// Whether the grid is drawn.
    pub show_grid: bool,
    /// Whether new endpoints snap to the grid.
    pub snap_to_grid: bool,
    /// Default stroke color for new lines.
    pub stroke_color: String,
    /// Default stroke width for new lines.
    pub stroke_width: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size: 20.0,
            show_grid: true,
            snap_to_grid: true,
            stroke_color: "#000000".to_string(),
            stroke_width: 2.0,
        }
    }
}

impl EditorSettings {
    /// Load settings from storage. A missing key or an unreadable payload
    /// falls back to the defaults; settings are never worth failing over.
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.load(SETTINGS_STORAGE_KEY) {
            Ok(payload) => serde_json::from_str(&payload).unwrap_or_else(|err| {
                warn!("ignoring corrupt editor settings: {err}");
                Self::default()
            }),
            Err(StorageError::NotFound(_)) => Self::default(),
            Err(err) => {
                warn!("failed to read editor settings: {err}");
                Self::default()
            }
        }
    }

    /// Persist the settings under [`SETTINGS_STORAGE_KEY`].
    pub fn save(&self, storage: &dyn Storage) -> StorageResult<()> {
        let payload = serde_json::to_string(self)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        storage.save(SETTINGS_STORAGE_KEY, &payload)
    }
}
