use serde::{Deserialize, Serialize};

/// Message reported when every required capability is present.
pub const HEALTHY_MESSAGE: &str = "Runtime healthy: required browser APIs are available.";

/// Message reported when at least one required capability is missing.
pub const DEGRADED_MESSAGE: &str = "Runtime degraded: expected browser APIs are missing.";

/// Result of a runtime capability check.
///
/// Computed fresh on every call; never cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
    pub message: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            ok: true,
            message: HEALTHY_MESSAGE.to_string(),
        }
    }

    pub fn degraded() -> Self {
        Self {
            ok: false,
            message: DEGRADED_MESSAGE.to_string(),
        }
    }
}
