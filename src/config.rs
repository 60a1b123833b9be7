//! Persisted view settings.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::model::TimeScale;

/// Settings the timeline reads on every render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineSettings {
    pub time_scale: TimeScale,
    pub hidden_project_ids: HashSet<Uuid>,
    pub show_completed_items: bool,
    /// Keep a dimmed row for hidden projects so they can be shown again
    /// from the chart.
    pub show_hidden_rows: bool,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            time_scale: TimeScale::Week,
            hidden_project_ids: HashSet::new(),
            show_completed_items: true,
            show_hidden_rows: false,
        }
    }
}

impl TimelineSettings {
    /// Flip a project between hidden and shown. Returns true when it is now
    /// hidden.
    pub fn toggle_project_visibility(&mut self, project_id: Uuid) -> bool {
        if self.hidden_project_ids.remove(&project_id) {
            false
        } else {
            self.hidden_project_ids.insert(project_id);
            true
        }
    }

    pub fn is_hidden(&self, project_id: Uuid) -> bool {
        self.hidden_project_ids.contains(&project_id)
    }
}

/// Settings backed by a JSON file in the OS config directory.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    pub settings: TimelineSettings,
}

impl SettingsStore {
    /// Load from the default location.
    pub fn open() -> Self {
        Self::load(Self::default_path())
    }

    /// Load from `path`. A missing or unreadable file yields defaults.
    pub fn load(path: PathBuf) -> Self {
        let settings = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Ignoring malformed settings file {:?}: {}", path, e);
                    TimelineSettings::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => TimelineSettings::default(),
            Err(e) => {
                tracing::warn!("Failed to read settings file {:?}: {}", path, e);
                TimelineSettings::default()
            }
        };
        Self { path, settings }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.settings)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!("Saved settings to {:?}", self.path);
        Ok(())
    }

    /// Save, logging instead of failing. Used from UI callbacks where
    /// there is nobody to hand the error to.
    pub fn save_or_warn(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("Failed to save settings to {:?}: {}", self.path, e);
        }
    }

    pub fn config_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "TimelinePlanner")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn default_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }
}
