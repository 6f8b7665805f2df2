mod backend;
mod frontend;
mod utils;

use crate::backend::utils::config::AppConfig;
use crate::backend::utils::css::ResourceLoader;
use crate::frontend::app::Route;
use crate::frontend::services::{AuthState, SessionIndicator};
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_router::Router;

#[cfg(not(any(feature = "desktop", feature = "web")))]
compile_error!("enable either the `desktop` or the `web` feature");

fn main() {
    utils::logging::init();

    let config = AppConfig::load();
    log::info!("Session key `{}`", config.session_key);

    launch(config);
}

#[cfg(feature = "desktop")]
fn launch(config: AppConfig) {
    use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

    let size = LogicalSize::new(config.window.width, config.window.height);
    let window = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(config.window.title.clone())
                .with_inner_size(size)
                .with_min_inner_size(size),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(window)
        .with_context(config)
        .launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
fn launch(config: AppConfig) {
    LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    let indicator = use_hook(|| SessionIndicator::open(&config));
    let current_session = use_signal(|| indicator.record());
    use_context_provider(|| AuthState::new(indicator.clone(), current_session));

    rsx! {
        style { dangerous_inner_html: ResourceLoader::get_css("base") }
        Router::<Route> {}
    }
}
