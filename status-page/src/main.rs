// status-page/src/main.rs

//! Status page binary.
//!
//! Serves the build metadata compiled in by `build.rs` together with a
//! browser runtime health check.

use std::sync::Arc;

use tokio::signal;

use status_page::{AppState, PageConfig, build_info, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "status_page=info,stamp=info".to_string()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cfg = PageConfig::from_env();
    let info = build_info::compiled();

    tracing::info!(
        commit = %info.commit_sha,
        run = %info.run_number,
        environment = %info.environment,
        build_time = %info.build_time,
        "loaded build metadata"
    );

    let app = router(Arc::new(AppState::new(info)), &cfg.base_path);

    tracing::info!(
        "status page listening on http://{}{}/",
        cfg.listen_addr,
        cfg.base_path
    );

    let listener = tokio::net::TcpListener::bind(cfg.listen_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", cfg.listen_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("status page server error: {e}"))?;

    Ok(())
}

/// Waits for Ctrl-C and returns, used for graceful shutdown.
async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
