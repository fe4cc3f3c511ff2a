//! Checks on values stamped into `templates/build_info.rs.tpl`.
//!
//! The template wraps each value in an `r##"..."##` raw string, so a value
//! containing the closing delimiter would end the literal early and the
//! generated module would not compile. `build.rs` runs [`check_inputs`]
//! before rendering.

use stamp::BuildInputs;
use stamp::config::{COMMIT_SHA_VAR, DEPLOY_ENV_VAR, RUN_NUMBER_VAR};

/// Closing delimiter of the raw strings in the template.
pub const RAW_STRING_CLOSE: &str = "\"##";

/// Rejects inputs that cannot be embedded in the template verbatim.
pub fn check_inputs(inputs: &BuildInputs) -> Result<(), String> {
    let values = [
        (COMMIT_SHA_VAR, &inputs.commit_sha),
        (RUN_NUMBER_VAR, &inputs.run_number),
        (DEPLOY_ENV_VAR, &inputs.environment),
    ];

    match values.iter().find(|(_, v)| v.contains(RAW_STRING_CLOSE)) {
        Some((var, value)) => Err(format!(
            "{var}={value:?} contains `{RAW_STRING_CLOSE}`, which would end the raw string it is stamped into"
        )),
        None => Ok(()),
    }
}
