use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::BuildInputs;

/// Build metadata stamped into an artifact at build time.
///
/// Field names serialise in camelCase (`commitSha`, `runNumber`,
/// `buildTime`, `environment`) so the JSON form matches the element ids
/// the status page binds them to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// Commit identifier, e.g. a git SHA.
    pub commit_sha: String,
    /// CI run number.
    pub run_number: String,
    /// ISO-8601 build timestamp in UTC.
    pub build_time: String,
    /// Deployment environment name.
    pub environment: String,
}

impl BuildInfo {
    /// Combines resolved build inputs with a build timestamp.
    pub fn from_inputs(inputs: &BuildInputs, built_at: DateTime<Utc>) -> Self {
        Self {
            commit_sha: inputs.commit_sha.clone(),
            run_number: inputs.run_number.clone(),
            build_time: format_build_time(built_at),
            environment: inputs.environment.clone(),
        }
    }

    /// Parses `build_time` back into a timestamp.
    ///
    /// Returns `None` if the field does not hold a valid RFC 3339 string.
    pub fn parsed_build_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.build_time)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_build_time(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
