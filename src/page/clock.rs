//! Timestamp sources for rendering.

use crate::utils::date::DateTimeUtc;

/// Supplies the current instant as an ISO-8601 string.
pub trait Clock: Send + Sync {
    fn now_iso(&self) -> String;
}

/// Wall clock, `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso(&self) -> String {
        DateTimeUtc::now().to_iso_millis()
    }
}

/// Always returns the same string. Backs `--now` and tests.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(iso: impl Into<String>) -> Self {
        Self(iso.into())
    }
}

impl Clock for FixedClock {
    fn now_iso(&self) -> String {
        self.0.clone()
    }
}
