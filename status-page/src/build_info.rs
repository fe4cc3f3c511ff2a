//! Build metadata compiled into this binary.
//!
//! `build.rs` renders `templates/build_info.rs.tpl` with the stamp
//! generator; the result defines [`BUILD_INFO`].

use stamp::BuildInfo;

/// Borrowed, `static`-friendly form of [`BuildInfo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StampedBuildInfo {
    pub commit_sha: &'static str,
    pub run_number: &'static str,
    pub build_time: &'static str,
    pub environment: &'static str,
}

impl From<StampedBuildInfo> for BuildInfo {
    fn from(s: StampedBuildInfo) -> Self {
        BuildInfo {
            commit_sha: s.commit_sha.to_string(),
            run_number: s.run_number.to_string(),
            build_time: s.build_time.to_string(),
            environment: s.environment.to_string(),
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/generated_build_info.rs"));

/// Owned copy of the compiled-in build metadata.
pub fn compiled() -> BuildInfo {
    BUILD_INFO.into()
}
