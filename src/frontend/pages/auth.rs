//! Authentication page component.

use crate::frontend::app::Route;
use crate::frontend::components::layout::AuthLayout;
use crate::frontend::services::AuthState;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Auth() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let mut auth = auth.clone();

        match auth.login(&username.read()) {
            Ok(()) => {
                error.set(None);
                nav.push(Route::root());
            }
            Err(e) => {
                log::warn!("Sign-in rejected: {e}");
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        AuthLayout {
            form {
                class: "auth-card",
                onsubmit: on_submit,
                h1 { class: "auth-title", "CyberGym" }
                p { class: "auth-subtitle", "Sign in to see your training schedule" }
                input {
                    class: "auth-input",
                    r#type: "text",
                    value: "{username}",
                    maxlength: "32",
                    placeholder: "Username",
                    autofocus: true,
                    oninput: move |e| {
                        username.set(e.value());
                        error.set(None);
                    }
                }
                button {
                    class: "auth-button",
                    r#type: "submit",
                    "Sign in"
                }
                if let Some(message) = error() {
                    p { class: "auth-error", "{message}" }
                }
            }
        }
    }
}
