//! Build-info generator.
//!
//! Reads a template, stamps the current build inputs and wall-clock time
//! into its placeholder tokens, and overwrites the output artifact.
//!
//! ```ignore
//! use stamp::{BuildInputs, GeneratorConfig, generate};
//!
//! let cfg = GeneratorConfig::from_env();
//! let info = generate(&cfg, &BuildInputs::from_env())?;
//! println!("stamped {}", info.commit_sha);
//! ```

pub mod error;
pub mod template;

use std::fs;

use chrono::{DateTime, Utc};

use crate::config::{BuildInputs, GeneratorConfig};
use crate::types::BuildInfo;

pub use error::GenerateError;
pub use template::{Placeholder, missing_placeholders, render};

/// Runs the generator, stamping the current time.
pub fn generate(cfg: &GeneratorConfig, inputs: &BuildInputs) -> Result<BuildInfo, GenerateError> {
    generate_at(cfg, inputs, Utc::now())
}

/// Runs the generator with an explicit build timestamp.
///
/// Returns the [`BuildInfo`] that was written.
pub fn generate_at(
    cfg: &GeneratorConfig,
    inputs: &BuildInputs,
    built_at: DateTime<Utc>,
) -> Result<BuildInfo, GenerateError> {
    let template =
        fs::read_to_string(&cfg.template_path).map_err(|source| GenerateError::ReadTemplate {
            path: cfg.template_path.clone(),
            source,
        })?;

    for missing in missing_placeholders(&template) {
        tracing::warn!(
            template = %cfg.template_path.display(),
            "template has no {missing} placeholder"
        );
    }

    let info = BuildInfo::from_inputs(inputs, built_at);
    let content = render(&template, &info);

    let write_err = |source| GenerateError::WriteOutput {
        path: cfg.output_path.clone(),
        source,
    };

    if let Some(parent) = cfg.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(&cfg.output_path, content).map_err(write_err)?;

    tracing::debug!(
        output = %cfg.output_path.display(),
        commit = %info.commit_sha,
        run = %info.run_number,
        environment = %info.environment,
        build_time = %info.build_time,
        "build metadata written"
    );

    Ok(info)
}
