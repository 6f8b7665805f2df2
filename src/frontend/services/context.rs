//! Authentication context and state management.

use crate::frontend::services::session::{DEFAULT_USERNAME, SessionIndicator, SessionRecord};
use crate::utils::Result;
use dioxus::prelude::*;

/// Shared by every page through the Dioxus context.
///
/// Storage is the source of truth; `current_session` mirrors it for
/// rendering.
#[derive(Clone)]
pub struct AuthState {
    pub current_session: Signal<Option<SessionRecord>>,
    indicator: SessionIndicator,
}

impl AuthState {
    pub fn new(indicator: SessionIndicator, current_session: Signal<Option<SessionRecord>>) -> Self {
        Self {
            current_session,
            indicator,
        }
    }

    /// Reads the session indicator from storage.
    pub fn is_authenticated(&self) -> bool {
        self.indicator.is_present()
    }

    /// Re-reads the stored record into `current_session` when they differ.
    pub fn refresh(&mut self) {
        let stored = self.indicator.record();
        if *self.current_session.peek() != stored {
            self.current_session.set(stored);
        }
    }

    /// Logs in with a username and stores the session.
    pub fn login(&mut self, username: &str) -> Result<()> {
        let record = self.indicator.start(username)?;
        self.current_session.set(Some(record));
        Ok(())
    }

    /// Logs out the current user.
    pub fn logout(&mut self) -> Result<()> {
        self.indicator.end()?;
        self.current_session.set(None);
        Ok(())
    }

    /// Gets the current username or returns the default display name.
    pub fn get_username(&self) -> String {
        self.current_session
            .read()
            .as_ref()
            .map_or_else(|| DEFAULT_USERNAME.to_string(), |s| s.username.clone())
    }
}
