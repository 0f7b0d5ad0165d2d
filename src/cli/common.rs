//! Helpers shared across CLI commands.

use anyhow::{Context, Result};

use crate::page::{Clock, FixedClock, PageTimestamp, SystemClock};

/// Clock for a command: `--now` pins the timestamp, otherwise the system
/// clock. A malformed `--now` fails before anything is rendered.
pub fn select_clock(now: Option<&str>) -> Result<Box<dyn Clock>> {
    match now {
        Some(iso) => {
            PageTimestamp::parse(iso).context("invalid --now value")?;
            Ok(Box::new(FixedClock::new(iso)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}
