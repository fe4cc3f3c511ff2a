use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use stamp::config::{
    COMMIT_SHA_VAR, DEPLOY_ENV_VAR, OUTPUT_PATH_VAR, RUN_NUMBER_VAR, TEMPLATE_PATH_VAR,
};
use tempfile::tempdir;

fn run_generator(template: &Path, output: &Path, env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_generate-build-info"));
    cmd.env(TEMPLATE_PATH_VAR, template)
        .env(OUTPUT_PATH_VAR, output)
        .env_remove(COMMIT_SHA_VAR)
        .env_remove(RUN_NUMBER_VAR)
        .env_remove(DEPLOY_ENV_VAR);
    for (k, v) in env {
        cmd.env(k, v);
    }
    cmd.output().expect("generator binary should start")
}

#[test]
fn success_prints_one_confirmation_line() {
    let dir = tempdir().unwrap();
    let template = dir.path().join("info.tpl");
    let output = dir.path().join("out/info.txt");
    fs::write(&template, "__COMMIT_SHA__ __RUN_NUMBER__ __ENVIRONMENT__ __BUILD_TIME__").unwrap();

    let out = run_generator(&template, &output, &[(RUN_NUMBER_VAR, "88")]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout,
        format!("Build metadata injected into {}\n", output.display())
    );

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("local-dev 88 development "));
    assert!(!written.contains("__BUILD_TIME__"));
}

#[test]
fn missing_template_exits_with_status_one() {
    let dir = tempdir().unwrap();
    let template = dir.path().join("nope.tpl");
    let output = dir.path().join("out.txt");

    let out = run_generator(&template, &output, &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("fatal error: failed to read template"));
    assert!(stderr.contains("nope.tpl"));
    assert!(!output.exists());
}
