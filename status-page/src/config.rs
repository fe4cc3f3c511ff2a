//! Status page configuration.
//!
//! Configures the HTTP listen address and the path prefix the page is
//! served under. When running inside GitHub Actions the page is mounted
//! under `/<repository name>` so it lines up with a project Pages site.

use std::env;
use std::net::SocketAddr;

/// Environment variable overriding the listen address.
pub const LISTEN_ADDR_VAR: &str = "STATUS_PAGE_ADDR";

/// Configuration for the status page HTTP server.
#[derive(Clone, Debug)]
pub struct PageConfig {
    /// Address to bind the HTTP server to.
    pub listen_addr: SocketAddr,
    /// Prefix every route is mounted under, e.g. `"/my-repo"`. Empty for `/`.
    pub base_path: String,
}

pub fn default_listen_addr() -> SocketAddr {
    // Safe to unwrap: fixed, valid address literal.
    "0.0.0.0:8081"
        .parse()
        .expect("hard-coded status page listen address should parse")
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            base_path: String::new(),
        }
    }
}

impl PageConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = match lookup(LISTEN_ADDR_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("ignoring invalid {LISTEN_ADDR_VAR}={raw:?}");
                default_listen_addr()
            }),
            None => default_listen_addr(),
        };

        Self {
            listen_addr,
            base_path: base_path(&lookup),
        }
    }
}

/// `/<name>` for `GITHUB_REPOSITORY=<owner>/<name>` under GitHub Actions,
/// otherwise empty.
fn base_path<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let is_ci = lookup("GITHUB_ACTIONS").as_deref() == Some("true");
    let repo_name = lookup("GITHUB_REPOSITORY")
        .and_then(|r| r.split('/').nth(1).map(str::to_string))
        .filter(|name| !name.is_empty());

    match repo_name {
        Some(name) if is_ci => format!("/{name}"),
        _ => String::new(),
    }
}
