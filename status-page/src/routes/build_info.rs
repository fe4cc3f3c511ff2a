use axum::{Json, extract::State};
use stamp::BuildInfo;

use crate::state::SharedState;

/// `GET /build-info`
pub async fn build_info(State(state): State<SharedState>) -> Json<BuildInfo> {
    Json(state.build_info.clone())
}
