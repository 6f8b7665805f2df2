//! Application routing system.

pub mod guard;
pub mod routes;

pub use guard::{NavigationDecision, NavigationGuard};
pub use routes::{Route, RouteMeta};
