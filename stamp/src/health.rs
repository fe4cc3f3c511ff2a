//! Runtime health reporting.
//!
//! The reporter inspects whatever hosts the page through a [`Capabilities`]
//! probe and answers with a [`HealthStatus`]. Two capabilities are
//! required: a network-fetch API and a navigator/platform-info API. The
//! result is a strict AND; there is no partially-degraded state.

use crate::types::HealthStatus;

/// Probe over the capabilities of the hosting runtime.
pub trait Capabilities {
    /// Whether a network-fetch API is available.
    fn has_fetch(&self) -> bool;
    /// Whether a navigator/platform-info API is available.
    fn has_navigator(&self) -> bool;
}

/// Probe with fixed answers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticCapabilities {
    pub fetch: bool,
    pub navigator: bool,
}

impl StaticCapabilities {
    pub fn new(fetch: bool, navigator: bool) -> Self {
        Self { fetch, navigator }
    }
}

impl Capabilities for StaticCapabilities {
    fn has_fetch(&self) -> bool {
        self.fetch
    }

    fn has_navigator(&self) -> bool {
        self.navigator
    }
}

impl<C: Capabilities + ?Sized> Capabilities for &C {
    fn has_fetch(&self) -> bool {
        (**self).has_fetch()
    }

    fn has_navigator(&self) -> bool {
        (**self).has_navigator()
    }
}

/// Reports runtime health. Never fails; missing capabilities are a
/// normal `ok: false` outcome.
pub fn runtime_health<C: Capabilities + ?Sized>(caps: &C) -> HealthStatus {
    let has_fetch = caps.has_fetch();
    let has_navigator = caps.has_navigator();

    tracing::debug!(has_fetch, has_navigator, "runtime capability probe");

    if has_fetch && has_navigator {
        HealthStatus::healthy()
    } else {
        HealthStatus::degraded()
    }
}
