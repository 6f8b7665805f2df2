//! Logging setup.
//!
//! Everything in the crate logs through the `log` facade. The backend is
//! picked by target: `env_logger` for the desktop window, the browser console
//! for the web build.

/// Filter used when `RUST_LOG` is not set.
#[cfg(feature = "desktop")]
const DEFAULT_FILTER: &str = "warn,cybergym=info";

#[cfg(feature = "desktop")]
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .init();
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
pub fn init() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    console_log::init_with_level(log::Level::Info).ok();
}
