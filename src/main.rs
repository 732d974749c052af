//! Agent Studio Console - Main Entry Point
//!
//! Serves the console shell with Dioxus plus the small admin API the pages
//! consume. Uses dioxus::serve() pattern for dx serve compatibility.

use agent_studio_console::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::routing::get;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = agent_studio_console::config::ConsoleConfig::from_env();
    tracing::info!(
        default_route = %config.default_route,
        "Starting Agent Studio console..."
    );

    use agent_studio_console::handlers::list_models_handler;

    // NO #[tokio::main] - dioxus::serve creates its own runtime
    dioxus::serve(|| async move {
        let router = dioxus::server::router(App)
            // Model registry for the admin pages
            .route("/api/models", get(list_models_handler));

        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
