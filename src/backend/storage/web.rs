//! Browser `localStorage`.

use super::SessionStore;
use crate::utils::{Error, Result};

pub struct WebStore {
    storage: web_sys::Storage,
}

impl WebStore {
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| Error::Unavailable("no browser window"))?;
        let storage = window
            .local_storage()?
            .ok_or_else(|| Error::Unavailable("localStorage is disabled"))?;
        Ok(Self { storage })
    }
}

impl SessionStore for WebStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.storage.set_item(key, value)?)
    }

    fn remove(&self, key: &str) -> Result<()> {
        Ok(self.storage.remove_item(key)?)
    }
}
