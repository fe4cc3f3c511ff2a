//! The status page itself.
//!
//! Each value is written into an element whose id matches the
//! [`BuildInfo`] field name, plus a `healthStatus` element coloured by the
//! health outcome.

use axum::{extract::State, http::HeaderMap, response::Html};
use stamp::{BuildInfo, HealthStatus, runtime_health};

use crate::probe::RequestCapabilities;
use crate::state::SharedState;

pub const HEALTHY_COLOR: &str = "#156b2f";
pub const DEGRADED_COLOR: &str = "#a21a1a";

/// `GET /`
pub async fn index(State(state): State<SharedState>, headers: HeaderMap) -> Html<String> {
    let health = runtime_health(&RequestCapabilities::from_headers(&headers));
    if !health.ok {
        tracing::debug!("serving status page to a client missing browser APIs");
    }
    Html(render_page(&state.build_info, &health))
}

/// Renders the full HTML document.
pub fn render_page(info: &BuildInfo, health: &HealthStatus) -> String {
    let color = if health.ok { HEALTHY_COLOR } else { DEGRADED_COLOR };

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Build status</title>
  </head>
  <body>
    <main>
      <h1>Build status</h1>
      <dl>
        <dt>Commit</dt>
        <dd id="commitSha">{commit_sha}</dd>
        <dt>Run number</dt>
        <dd id="runNumber">{run_number}</dd>
        <dt>Build time</dt>
        <dd id="buildTime">{build_time}</dd>
        <dt>Environment</dt>
        <dd id="environment">{environment}</dd>
      </dl>
      <p id="healthStatus" style="color: {color}">{message}</p>
    </main>
  </body>
</html>
"#,
        commit_sha = escape_html(&info.commit_sha),
        run_number = escape_html(&info.run_number),
        build_time = escape_html(&info.build_time),
        environment = escape_html(&info.environment),
        message = escape_html(&health.message),
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
