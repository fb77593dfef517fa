//! Saved user state: last entered parameters and the theme preference
//!
//! Stored as a flat JSON object so each value sits under its own key
//! (`initialCapital`, `years`, `theme`, ...).

use crate::error::Result;
use crate::params::RawParams;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the state file
pub const DEFAULT_STATE_PATH: &str = "projection_state.json";

/// Environment variable overriding the state file location
pub const STATE_PATH_ENV: &str = "PORTFOLIO_STATE_PATH";

/// Display theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Everything persisted between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    #[serde(flatten)]
    pub params: RawParams,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            params: RawParams::default(),
            theme: Theme::default(),
            saved_at: None,
        }
    }
}

/// JSON file holding the saved state
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$PORTFOLIO_STATE_PATH`, or the default path
    pub fn from_env() -> Self {
        match std::env::var(STATE_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::new(path),
            _ => Self::new(DEFAULT_STATE_PATH),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved state. A missing file yields defaults; an unreadable or
    /// corrupt one is logged and also yields defaults.
    pub fn load(&self) -> SavedState {
        match self.try_load() {
            Ok(Some(state)) => state,
            Ok(None) => SavedState::default(),
            Err(e) => {
                log::warn!("ignoring saved state at {}: {e}", self.path.display());
                SavedState::default()
            }
        }
    }

    /// Load the saved state, reporting errors. `Ok(None)` when nothing was saved yet.
    pub fn try_load(&self) -> Result<Option<SavedState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Write the state, stamping it with the current time
    pub fn save(&self, state: &SavedState) -> Result<SavedState> {
        let stamped = SavedState {
            saved_at: Some(Utc::now()),
            ..state.clone()
        };
        let json = serde_json::to_string_pretty(&stamped)?;
        std::fs::write(&self.path, json)?;
        log::info!("saved state to {}", self.path.display());
        Ok(stamped)
    }

    /// Update only the theme, keeping the saved parameters
    pub fn save_theme(&self, theme: Theme) -> Result<SavedState> {
        let mut state = self.load();
        state.theme = theme;
        self.save(&state)
    }

    /// Update only the parameters, keeping the theme
    pub fn save_params(&self, params: RawParams) -> Result<SavedState> {
        let mut state = self.load();
        state.params = params;
        self.save(&state)
    }
}
