//! Views targeted by the route table.

pub mod auth;
pub mod dashboard;

pub use auth::Auth;
pub use dashboard::Dashboard;
