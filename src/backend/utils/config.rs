//! Application configuration.
//!
//! Defaults are compiled in; a handful of environment variables override
//! them at startup.

use crate::backend::utils::paths::app_dir_or_local;
use serde::{Deserialize, Serialize};

use std::path::PathBuf;

/// Storage key holding the session indicator.
pub const DEFAULT_SESSION_KEY: &str = "cybergym_session";

/// File name of the desktop key/value store inside `data_dir`.
pub const SESSION_FILE: &str = "session.json";

pub const ENV_SESSION_KEY: &str = "CYBERGYM_SESSION_KEY";
pub const ENV_DATA_DIR: &str = "CYBERGYM_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub session_key: String,
    /// Desktop store directory; `None` means the per-user application
    /// directory, resolved only when the desktop store is opened.
    pub data_dir: Option<PathBuf>,
    pub window: WindowSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl AppConfig {
    /// Defaults with environment overrides applied.
    pub fn load() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides looked up by environment variable name. Empty values
    /// are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(key) = value(ENV_SESSION_KEY) {
            self.session_key = key.trim().to_string();
        }
        if let Some(dir) = value(ENV_DATA_DIR) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// Location of the desktop session store.
    pub fn session_file(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(app_dir_or_local)
            .join(SESSION_FILE)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_string(),
            data_dir: None,
            window: WindowSettings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "CyberGym".to_string(),
            width: 1100.0,
            height: 720.0,
        }
    }
}
