//! Generator configuration.
//!
//! Two pieces of configuration drive a generator run:
//!
//! - [`BuildInputs`]: the commit, run number and environment values, read
//!   from `COMMIT_SHA`, `RUN_NUMBER` and `DEPLOY_ENV` with fixed fallbacks,
//! - [`GeneratorConfig`]: where the template lives and where the rendered
//!   artifact is written. Default paths are relative to the workspace root.
//!
//! The build timestamp is never configurable; the generator always stamps
//! the current wall-clock time.

use std::env;
use std::path::PathBuf;

/// Environment variable holding the commit identifier.
pub const COMMIT_SHA_VAR: &str = "COMMIT_SHA";
/// Environment variable holding the CI run number.
pub const RUN_NUMBER_VAR: &str = "RUN_NUMBER";
/// Environment variable holding the deployment environment name.
pub const DEPLOY_ENV_VAR: &str = "DEPLOY_ENV";

/// Environment variable overriding [`GeneratorConfig::template_path`].
pub const TEMPLATE_PATH_VAR: &str = "BUILD_INFO_TEMPLATE";
/// Environment variable overriding [`GeneratorConfig::output_path`].
pub const OUTPUT_PATH_VAR: &str = "BUILD_INFO_OUTPUT";

/// Template shipped with the status page.
pub const DEFAULT_TEMPLATE_PATH: &str = "status-page/templates/build_info.rs.tpl";
/// Rendered module, kept under `target/` next to other build output.
pub const DEFAULT_OUTPUT_PATH: &str = "target/build-info/generated_build_info.rs";

pub const DEFAULT_COMMIT_SHA: &str = "local-dev";
pub const DEFAULT_RUN_NUMBER: &str = "local";
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Externally supplied values substituted into the template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildInputs {
    pub commit_sha: String,
    pub run_number: String,
    pub environment: String,
}

impl Default for BuildInputs {
    fn default() -> Self {
        Self {
            commit_sha: DEFAULT_COMMIT_SHA.to_string(),
            run_number: DEFAULT_RUN_NUMBER.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl BuildInputs {
    /// Reads inputs from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads inputs through `lookup`, falling back to the defaults for
    /// unset or empty values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            commit_sha: read(COMMIT_SHA_VAR, DEFAULT_COMMIT_SHA),
            run_number: read(RUN_NUMBER_VAR, DEFAULT_RUN_NUMBER),
            environment: read(DEPLOY_ENV_VAR, DEFAULT_ENVIRONMENT),
        }
    }
}

/// Template and output locations for a generator run.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Template containing the placeholder tokens.
    pub template_path: PathBuf,
    /// Artifact path; overwritten on every run.
    pub output_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl GeneratorConfig {
    pub fn new(template_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Defaults, with `BUILD_INFO_TEMPLATE` / `BUILD_INFO_OUTPUT` overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults, with non-empty values from `lookup` overriding each path.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(path) = lookup(TEMPLATE_PATH_VAR).filter(|v| !v.is_empty()) {
            cfg.template_path = path.into();
        }
        if let Some(path) = lookup(OUTPUT_PATH_VAR).filter(|v| !v.is_empty()) {
            cfg.output_path = path.into();
        }
        cfg
    }
}
