//! Status page library.
//!
//! Serves the stamped build metadata and a per-request browser health
//! check over HTTP:
//!
//! - `GET /` — HTML status page,
//! - `GET /health` — JSON `{ ok, message }`,
//! - `GET /build-info` — JSON build metadata.
//!
//! All routes are mounted under [`PageConfig::base_path`].

pub mod artifact;
pub mod build_info;
pub mod config;
pub mod probe;
pub mod routes;
pub mod state;

use axum::{Router, routing::get};

pub use config::PageConfig;
pub use probe::RequestCapabilities;
pub use state::{AppState, SharedState};

use routes::{build_info as build_info_route, health, page};

/// Builds the HTTP router with every route under `base_path`.
pub fn router(state: SharedState, base_path: &str) -> Router {
    let base = base_path.trim_end_matches('/');

    let mut app = Router::new()
        .route(&format!("{base}/"), get(page::index))
        .route(&format!("{base}/health"), get(health::health))
        .route(&format!("{base}/build-info"), get(build_info_route::build_info));

    if !base.is_empty() {
        app = app.route(base, get(page::index));
    }

    app.with_state(state)
}
