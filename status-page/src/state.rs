//! Shared application state.

use std::sync::Arc;

use stamp::BuildInfo;

/// State handed to request handlers via Axum's `State` extractor.
///
/// Build metadata is fixed for the life of the process; health is
/// computed per request and never stored here.
pub struct AppState {
    pub build_info: BuildInfo,
}

impl AppState {
    pub fn new(build_info: BuildInfo) -> Self {
        Self { build_info }
    }
}

/// Thread-safe alias for `AppState`.
pub type SharedState = Arc<AppState>;
