//! Core records shared by the generator, the health reporter and the
//! status page.
//!
//! - [`BuildInfo`]: commit, run number, build time and environment,
//!   stamped once per build.
//! - [`HealthStatus`]: the outcome of a single runtime capability check.

mod build_info;
mod health;

pub use build_info::{BuildInfo, format_build_time};
pub use health::{DEGRADED_MESSAGE, HEALTHY_MESSAGE, HealthStatus};
