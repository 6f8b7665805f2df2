//! Error type shared by storage and session code.

/// Failures surfaced by the session stores and the session indicator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `JsValue` thrown by a browser API.
    #[error("Browser error: {0}")]
    Browser(String),

    /// The store can't be used at all on this platform.
    #[error("{0}")]
    Unavailable(&'static str),

    #[error(
        "Username must be 3-32 characters long and can only contain letters, numbers, `_`, `-` and `.`"
    )]
    InvalidUsername,

    /// A store operation failed while changing the session.
    #[error("Failed to {action}: {source}")]
    Session {
        action: &'static str,
        source: Box<Error>,
    },
}

impl Error {
    pub fn session(action: &'static str, source: Error) -> Self {
        Self::Session {
            action,
            source: Box::new(source),
        }
    }
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        Self::Browser(format!("{err:?}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
