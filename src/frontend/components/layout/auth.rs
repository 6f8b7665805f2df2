use crate::backend::utils::css::ResourceLoader;
use dioxus::prelude::*;

/// Centered card used by the sign-in page.
#[component]
pub fn AuthLayout(children: Element) -> Element {
    rsx! {
        style { dangerous_inner_html: ResourceLoader::get_css("auth") }

        div {
            class: "auth-container",
            {children}
        }
    }
}
