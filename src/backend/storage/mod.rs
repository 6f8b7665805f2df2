//! Key/value storage the session indicator lives in.
//!
//! The browser build uses `localStorage`; the desktop build keeps the same
//! string-to-string map in a JSON file. All stores are used from the UI
//! thread only.

mod file;
mod memory;
#[cfg(all(feature = "web", not(feature = "desktop")))]
mod web;

pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(all(feature = "web", not(feature = "desktop")))]
pub use web::WebStore;

use crate::backend::utils::config::AppConfig;
use crate::utils::Result;
use std::rc::Rc;

/// String key/value storage.
pub trait SessionStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Opens the persistent store for the current target.
#[cfg(all(feature = "web", not(feature = "desktop")))]
pub fn open(_config: &AppConfig) -> Rc<dyn SessionStore> {
    match WebStore::open() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            log::warn!("localStorage unavailable ({e}); sessions will not survive a reload");
            Rc::new(MemoryStore::default())
        }
    }
}

/// Opens the persistent store for the current target.
#[cfg(not(all(feature = "web", not(feature = "desktop"))))]
pub fn open(config: &AppConfig) -> Rc<dyn SessionStore> {
    let path = config.session_file();
    log::debug!("Session store at {}", path.display());
    Rc::new(FileStore::new(path))
}

#[cfg(all(test, feature = "desktop"))]
mod tests {
    use super::*;

    #[test]
    fn desktop_build_opens_the_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };

        let store = open(&config);
        store.set(&config.session_key, "token").unwrap();

        assert!(config.session_file().exists());
        assert_eq!(
            FileStore::new(config.session_file())
                .get(&config.session_key)
                .unwrap()
                .as_deref(),
            Some("token")
        );
    }
}
