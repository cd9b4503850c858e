pub mod dashboards;
pub mod shared;
pub mod usecases;

pub use shared::api_utils::{ApiConfig, DEFAULT_API_BASE};
pub use shared::http::{ApiClient, ApiError, ApiErrorKind, RequestOptions};

/// Install the browser logger and panic hook
///
/// Call once from the host application's entry point.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: log::Level) {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
}

/// Native hosts install their own `log` backend; only the level cap is applied here
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(level: log::Level) {
    log::set_max_level(level.to_level_filter());
}
