// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use anyhow::{anyhow, Result};
use sl_core::Zone;

/// Version string shown by `--version`
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

/// Tracing filter directives, e.g. `sl_core=debug`
pub const LOG_VAR: &str = "SCHEDLOG_LOG";

/// Hours east of UTC the logs were written in
pub const UTC_OFFSET_VAR: &str = "SCHEDLOG_UTC_OFFSET";

pub fn log_filter() -> Option<String> {
    std::env::var(LOG_VAR).ok().filter(|s| !s.is_empty())
}

/// Offset from `SCHEDLOG_UTC_OFFSET`; an unparseable value is an error
/// rather than a silent fall back to local time.
pub fn utc_offset() -> Result<Option<f64>> {
    let Some(raw) = std::env::var(UTC_OFFSET_VAR).ok().filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|_| anyhow!("{UTC_OFFSET_VAR} must be a number of hours, got {raw:?}"))
}

/// Resolve the log zone: `--utc-offset` > `SCHEDLOG_UTC_OFFSET` > local time.
pub fn zone(flag: Option<f64>) -> Result<Zone> {
    let hours = match flag {
        Some(hours) => Some(hours),
        None => utc_offset()?,
    };
    match hours {
        Some(hours) => Zone::from_hours(hours).ok_or_else(|| anyhow!("invalid UTC offset: {hours} hours")),
        None => Ok(Zone::Local),
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
