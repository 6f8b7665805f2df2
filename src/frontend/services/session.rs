//! Session indicator.
//!
//! A user counts as signed in while a non-empty value is stored under the
//! session key. Nothing else about the stored value matters for routing.

use crate::backend::storage::{self, SessionStore};
use crate::backend::utils::config::AppConfig;
use crate::utils::{Error, Result};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Display name used when the stored value can't be read as a record.
pub const DEFAULT_USERNAME: &str = "Athlete";

/// Value written under the session key on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub username: String,
    pub signed_in_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(username: String) -> Self {
        Self {
            username,
            signed_in_at: Utc::now(),
        }
    }

    /// Validates if a username meets the requirements.
    pub fn is_valid_username(username: &str) -> bool {
        (3..=32).contains(&username.len())
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    }
}

/// Handle on the stored session indicator.
#[derive(Clone)]
pub struct SessionIndicator {
    store: Rc<dyn SessionStore>,
    key: Rc<str>,
}

impl SessionIndicator {
    pub fn new(store: Rc<dyn SessionStore>, key: &str) -> Self {
        Self {
            store,
            key: Rc::from(key),
        }
    }

    /// Opens the indicator on the platform store.
    pub fn open(config: &AppConfig) -> Self {
        Self::new(storage::open(config), &config.session_key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a session is stored. Read failures count as no session.
    pub fn is_present(&self) -> bool {
        match self.store.get(&self.key) {
            Ok(Some(value)) => !value.is_empty(),
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to read session indicator `{}`: {e}", self.key);
                false
            }
        }
    }

    /// The stored record, if one is present and parses.
    pub fn record(&self) -> Option<SessionRecord> {
        let raw = self.store.get(&self.key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    /// Stores a new session for `username`.
    pub fn start(&self, username: &str) -> Result<SessionRecord> {
        let username = username.trim();
        if !SessionRecord::is_valid_username(username) {
            return Err(Error::InvalidUsername);
        }

        let record = SessionRecord::new(username.to_string());
        let json = serde_json::to_string(&record)?;
        self.store
            .set(&self.key, &json)
            .map_err(|e| Error::session("save session", e))?;

        info!("Session started for {username}");
        Ok(record)
    }

    /// Removes the stored session.
    pub fn end(&self) -> Result<()> {
        self.store
            .remove(&self.key)
            .map_err(|e| Error::session("clear session", e))?;
        info!("Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryStore;

    const KEY: &str = "cybergym_session";

    fn indicator() -> (Rc<MemoryStore>, SessionIndicator) {
        let store = Rc::new(MemoryStore::default());
        let indicator = SessionIndicator::new(store.clone(), KEY);
        (store, indicator)
    }

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Unavailable("storage offline"))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Unavailable("storage offline"))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(Error::Unavailable("storage offline"))
        }
    }

    #[test]
    fn absent_key_is_no_session() {
        let (_, indicator) = indicator();
        assert!(!indicator.is_present());
        assert_eq!(indicator.record(), None);
    }

    #[test]
    fn any_non_empty_value_is_a_session() {
        let (store, indicator) = indicator();
        store.set(KEY, "opaque-token").unwrap();

        assert!(indicator.is_present());
        assert_eq!(indicator.record(), None);
    }

    #[test]
    fn empty_value_is_no_session() {
        let (store, indicator) = indicator();
        store.set(KEY, "").unwrap();
        assert!(!indicator.is_present());
    }

    #[test]
    fn read_error_is_no_session() {
        let indicator = SessionIndicator::new(Rc::new(BrokenStore), KEY);
        assert!(!indicator.is_present());
        assert_eq!(indicator.record(), None);
    }

    #[test]
    fn start_then_end() {
        let (store, indicator) = indicator();

        let record = indicator.start("  coach_kim ").unwrap();
        assert_eq!(record.username, "coach_kim");
        assert!(indicator.is_present());
        assert_eq!(indicator.record(), Some(record));
        assert!(store.get(KEY).unwrap().unwrap().contains("coach_kim"));

        indicator.end().unwrap();
        assert!(!indicator.is_present());
    }

    #[test]
    fn start_rejects_invalid_usernames_without_writing() {
        let (store, indicator) = indicator();

        let too_long = "x".repeat(33);
        for username in ["", "ab", "has space", "emoji🏋", too_long.as_str()] {
            assert!(
                matches!(indicator.start(username), Err(Error::InvalidUsername)),
                "{username:?} accepted"
            );
        }
        assert_eq!(store.get(KEY).unwrap(), None);
    }

    #[test]
    fn storage_failures_surface_on_start_and_end() {
        let indicator = SessionIndicator::new(Rc::new(BrokenStore), KEY);

        let err = indicator.start("coach_kim").unwrap_err();
        assert_eq!(err.to_string(), "Failed to save session: storage offline");
        assert!(indicator.end().is_err());
    }

    #[test]
    fn uses_the_configured_key() {
        let (store, _) = indicator();
        let other = SessionIndicator::new(store.clone(), "staff_session");
        other.start("front_desk").unwrap();

        assert_eq!(other.key(), "staff_session");
        assert_eq!(store.get(KEY).unwrap(), None);
    }
}
