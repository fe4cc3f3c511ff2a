//! Build metadata stamping and runtime health reporting.
//!
//! This crate provides the two pieces a status page needs:
//!
//! - strongly-typed records (`types`): [`BuildInfo`] and [`HealthStatus`],
//! - generator configuration read from the environment (`config`),
//! - the template generator that stamps build metadata into an
//!   artifact (`generator`),
//! - the capability-probe based health reporter (`health`).
//!
//! The `generate-build-info` binary wraps [`generate`] for use as a
//! build step; `build.rs` scripts can call it directly.

pub mod config;
pub mod generator;
pub mod health;
pub mod types;

// Re-export configuration.
pub use config::{BuildInputs, GeneratorConfig};

// Re-export the generator entry points.
pub use generator::{
    GenerateError, Placeholder, generate, generate_at, missing_placeholders, render,
};

// Re-export the health reporter.
pub use health::{Capabilities, StaticCapabilities, runtime_health};

// Re-export records at the crate root for convenience.
pub use types::*;
