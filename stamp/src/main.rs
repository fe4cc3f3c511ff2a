// stamp/src/main.rs
//
// Build step that stamps commit, run number, environment and the current
// time into the build-info template.

use stamp::{BuildInputs, GeneratorConfig, generate};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "stamp=info".to_string()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cfg = GeneratorConfig::from_env();
    let inputs = BuildInputs::from_env();

    tracing::info!(
        template = %cfg.template_path.display(),
        output = %cfg.output_path.display(),
        "generating build metadata"
    );

    generate(&cfg, &inputs).map_err(|e| e.to_string())?;

    println!("Build metadata injected into {}", cfg.output_path.display());
    Ok(())
}
