// status-page/build.rs
//
// Stamps build metadata into $OUT_DIR/generated_build_info.rs, which
// `src/build_info.rs` includes.

use std::env;
use std::path::PathBuf;

use stamp::config::{COMMIT_SHA_VAR, DEPLOY_ENV_VAR, RUN_NUMBER_VAR};
use stamp::{BuildInputs, GeneratorConfig, generate};

#[path = "src/artifact.rs"]
mod artifact;

const TEMPLATE: &str = "templates/build_info.rs.tpl";

fn main() {
    for var in [COMMIT_SHA_VAR, RUN_NUMBER_VAR, DEPLOY_ENV_VAR] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed={TEMPLATE}");
    println!("cargo:rerun-if-changed=src/artifact.rs");

    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR"));
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));

    let cfg = GeneratorConfig::new(
        manifest_dir.join(TEMPLATE),
        out_dir.join("generated_build_info.rs"),
    );

    let inputs = BuildInputs::from_env();
    if let Err(e) = artifact::check_inputs(&inputs) {
        panic!("refusing to stamp build metadata: {e}");
    }

    if let Err(e) = generate(&cfg, &inputs) {
        panic!("failed to generate build metadata: {e}");
    }
}
