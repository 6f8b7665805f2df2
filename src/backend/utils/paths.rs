//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the application data directory.
const APP_DIR: &str = "CyberGym";

/// Get the per-user application directory (`CyberGym`).
#[inline]
pub fn get_app_dir() -> Result<PathBuf> {
    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("XDG_DATA_HOME")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".local/share"))
            })
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(APP_DIR))
}

/// Like [`get_app_dir`], but falls back to a directory relative to the
/// working directory when no home directory is known.
pub fn app_dir_or_local() -> PathBuf {
    get_app_dir().unwrap_or_else(|e| {
        log::warn!("{e}; using ./{APP_DIR}");
        PathBuf::from(APP_DIR)
    })
}
