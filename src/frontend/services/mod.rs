//! Frontend services for session state.

pub mod context;
pub mod session;

pub use context::AuthState;
pub use session::{SessionIndicator, SessionRecord};
