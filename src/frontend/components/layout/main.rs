use crate::backend::utils::css::ResourceLoader;
use dioxus::prelude::*;

/// Page chrome for signed-in views: top bar with the member's name and a
/// sign-out action.
#[component]
pub fn Layout(username: String, on_sign_out: EventHandler<()>, children: Element) -> Element {
    rsx! {
        style { dangerous_inner_html: ResourceLoader::get_css("dashboard") }

        header {
            class: "topbar",
            span { class: "brand", "CyberGym" }
            div {
                class: "topbar-user",
                span { class: "username", "{username}" }
                button {
                    class: "sign-out",
                    onclick: move |_| on_sign_out.call(()),
                    "Sign out"
                }
            }
        }

        main {
            class: "content",
            {children}
        }
    }
}
