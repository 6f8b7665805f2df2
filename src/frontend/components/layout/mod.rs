//! Layout components.

pub mod auth;
pub mod main;

pub use auth::AuthLayout;
pub use main::Layout;
