use axum::{Json, http::HeaderMap, http::StatusCode};
use stamp::{HealthStatus, runtime_health};

use crate::probe::RequestCapabilities;

/// `GET /health`
///
/// Reports whether the requesting browser exposes the required APIs.
/// Always `200 OK`; a degraded runtime is reported in the body.
pub async fn health(headers: HeaderMap) -> (StatusCode, Json<HealthStatus>) {
    let status = runtime_health(&RequestCapabilities::from_headers(&headers));
    (StatusCode::OK, Json(status))
}
