//! Route table.

use crate::frontend::app::guard::NavigationGuard;
use crate::frontend::pages::{Auth, Dashboard};

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Per-route metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub name: &'static str,
    pub requires_auth: bool,
}

/// Main routing enum for the application.
///
/// Every route sits under [`NavigationGuard`], so the guard runs on each
/// navigation.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavigationGuard)]
        /// Authentication page route.
        #[route("/login")]
        Auth {},
        /// Member dashboard. Requires a session.
        #[route("/")]
        Dashboard {},
}

impl Route {
    /// Every route in the table.
    pub const ALL: [Route; 2] = [Route::Auth {}, Route::Dashboard {}];

    pub const fn meta(&self) -> RouteMeta {
        match self {
            Self::Auth {} => RouteMeta {
                name: "auth",
                requires_auth: false,
            },
            Self::Dashboard {} => RouteMeta {
                name: "dashboard",
                requires_auth: true,
            },
        }
    }

    /// Where unauthenticated users are sent.
    pub const fn login() -> Self {
        Self::Auth {}
    }

    /// Where authenticated users are sent away from the login page.
    pub const fn root() -> Self {
        Self::Dashboard {}
    }

    pub fn is_login(&self) -> bool {
        *self == Self::login()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paths_match_the_table() {
        assert_eq!(Route::Auth {}.to_string(), "/login");
        assert_eq!(Route::Dashboard {}.to_string(), "/");
        assert_eq!("/login".parse::<Route>().ok(), Some(Route::login()));
        assert_eq!("/".parse::<Route>().ok(), Some(Route::root()));
    }

    #[test]
    fn paths_and_names_are_unique() {
        let paths: HashSet<String> = Route::ALL.iter().map(ToString::to_string).collect();
        let names: HashSet<&str> = Route::ALL.iter().map(|r| r.meta().name).collect();
        assert_eq!(paths.len(), Route::ALL.len());
        assert_eq!(names.len(), Route::ALL.len());
    }

    #[test]
    fn only_the_dashboard_requires_auth() {
        assert!(Route::Dashboard {}.meta().requires_auth);
        assert!(!Route::Auth {}.meta().requires_auth);
        assert_eq!(Route::Dashboard {}.meta().name, "dashboard");
        assert_eq!(Route::Auth {}.meta().name, "auth");
    }

    #[test]
    fn login_route_is_recognised() {
        assert!(Route::login().is_login());
        assert!(!Route::root().is_login());
    }
}
