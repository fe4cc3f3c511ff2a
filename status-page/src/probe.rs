//! Browser capability probe.
//!
//! A page load is served to whatever browser asked for it, so the
//! capabilities are read off the request:
//!
//! - fetch: browsers implementing the Fetch standard attach Fetch
//!   Metadata headers (`Sec-Fetch-Mode`, `Sec-Fetch-Dest`) to requests,
//! - navigator: a `User-Agent` header is the request-side view of
//!   `navigator.userAgent`.

use axum::http::{HeaderMap, HeaderValue, header::USER_AGENT};
use stamp::Capabilities;

const SEC_FETCH_MODE: &str = "sec-fetch-mode";
const SEC_FETCH_DEST: &str = "sec-fetch-dest";

/// Capabilities advertised by a single HTTP request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestCapabilities {
    fetch: bool,
    navigator: bool,
}

impl RequestCapabilities {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            fetch: has_value(headers.get(SEC_FETCH_MODE)) || has_value(headers.get(SEC_FETCH_DEST)),
            navigator: has_value(headers.get(USER_AGENT)),
        }
    }
}

impl Capabilities for RequestCapabilities {
    fn has_fetch(&self) -> bool {
        self.fetch
    }

    fn has_navigator(&self) -> bool {
        self.navigator
    }
}

fn has_value(value: Option<&HeaderValue>) -> bool {
    value.is_some_and(|v| !v.as_bytes().iter().all(u8::is_ascii_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn browser_request_has_both() {
        let caps = RequestCapabilities::from_headers(&headers(&[
            ("user-agent", "Mozilla/5.0"),
            ("sec-fetch-mode", "navigate"),
            ("sec-fetch-dest", "document"),
        ]));
        assert!(caps.has_fetch());
        assert!(caps.has_navigator());
    }

    #[test]
    fn either_fetch_metadata_header_is_enough() {
        let caps = RequestCapabilities::from_headers(&headers(&[("sec-fetch-dest", "empty")]));
        assert!(caps.has_fetch());
        assert!(!caps.has_navigator());
    }

    #[test]
    fn blank_values_do_not_count() {
        let caps = RequestCapabilities::from_headers(&headers(&[
            ("user-agent", " "),
            ("sec-fetch-mode", ""),
        ]));
        assert_eq!(caps, RequestCapabilities::default());
    }

    #[test]
    fn bare_request_has_neither() {
        let caps = RequestCapabilities::from_headers(&HeaderMap::new());
        assert!(!caps.has_fetch());
        assert!(!caps.has_navigator());
    }
}
