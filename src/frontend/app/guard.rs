//! Navigation guard.
//!
//! Consulted before every navigation: unauthenticated users are sent to the
//! login page, authenticated users are sent away from it.

use crate::frontend::app::routes::Route;
use crate::frontend::services::AuthState;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator, use_route};
use log::{debug, info};

/// Outcome of evaluating the guard for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(Route),
}

impl NavigationDecision {
    pub fn evaluate(target: &Route, has_session: bool) -> Self {
        if target.meta().requires_auth && !has_session {
            Self::Redirect(Route::login())
        } else if target.is_login() && has_session {
            Self::Redirect(Route::root())
        } else {
            Self::Proceed
        }
    }
}

/// Layout wrapping every route. Re-renders on each route change and reads
/// the session indicator from storage every time; the redirect itself runs
/// from an effect once the decision for a route is known.
#[component]
pub fn NavigationGuard() -> Element {
    let route = use_route::<Route>();
    let auth = use_context::<AuthState>();
    let nav = navigator();

    let has_session = auth.is_authenticated();
    let decision = NavigationDecision::evaluate(&route, has_session);
    debug!("Navigation to {route} (session: {has_session}): {decision:?}");

    use_effect(use_reactive(
        (&route, &decision),
        move |(route, decision)| match decision {
            NavigationDecision::Proceed => {
                let mut auth = auth.clone();
                auth.refresh();
            }
            NavigationDecision::Redirect(target) => {
                info!("Redirecting {route} -> {target}");
                nav.replace(target);
            }
        },
    ));

    match decision {
        NavigationDecision::Proceed => rsx! { Outlet::<Route> {} },
        NavigationDecision::Redirect(_) => rsx! {},
    }
}
