//! Member dashboard.

use crate::frontend::app::Route;
use crate::frontend::components::layout::Layout;
use crate::frontend::services::AuthState;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

const SIGNED_IN_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut error = use_signal(|| None::<String>);

    let username = auth.get_username();
    let signed_in_at = auth
        .current_session
        .read()
        .as_ref()
        .map(|s| s.signed_in_at.format(SIGNED_IN_FORMAT).to_string());

    let sign_out = move |()| {
        let mut auth = auth.clone();
        match auth.logout() {
            Ok(()) => {
                nav.push(Route::login());
            }
            Err(e) => {
                log::error!("Sign-out failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        Layout {
            username: username.clone(),
            on_sign_out: sign_out,
            section {
                class: "welcome",
                h1 { "Welcome back, {username}" }
                if let Some(since) = signed_in_at {
                    p { class: "session-info", "Signed in since {since}" }
                }
                if let Some(message) = error() {
                    p { class: "dashboard-error", "{message}" }
                }
            }
        }
    }
}
