//! albums - listing with CSV/XLSX bulk import
//!
//! Runs in the browser by default; build with `--features desktop` for a
//! native webview window.

use albums_web::App;

fn main() {
    configure_logging();
    dioxus::launch(App);
}

#[cfg(target_arch = "wasm32")]
fn configure_logging() {
    dioxus::logger::init(tracing::Level::INFO).ok();
}

#[cfg(not(target_arch = "wasm32"))]
fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
