// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp parsing and interval formatting.
//!
//! Log times are kept as `f64` epoch seconds. The fractional part of a
//! scheduler timestamp is added as `digits / 10000`, which is what every
//! historical export was computed with, so it stays that way.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};
use std::fmt::Display;

use crate::error::LineError;

const STAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const STAMP_LEN: usize = 19;

/// Time zone used to interpret log timestamps and to break epochs back down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The machine's local zone, as the scheduler wrote its logs.
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    /// Fixed offset east of UTC, in hours (fractions allowed).
    pub fn from_hours(hours: f64) -> Option<Self> {
        if !hours.is_finite() {
            return None;
        }
        FixedOffset::east_opt((hours * 3600.0).round() as i32).map(Zone::Fixed)
    }

    fn to_epoch(self, naive: &NaiveDateTime) -> Option<i64> {
        match self {
            Zone::Local => Local.from_local_datetime(naive).earliest().map(|t| t.timestamp()),
            Zone::Fixed(offset) => offset.from_local_datetime(naive).single().map(|t| t.timestamp()),
        }
    }

    /// Format an epoch with a strftime pattern, truncating to whole seconds.
    pub fn format(self, epoch: f64, pattern: &str) -> Option<String> {
        if !epoch.is_finite() {
            return None;
        }
        let utc = DateTime::<Utc>::from_timestamp(epoch.floor() as i64, 0)?;
        Some(match self {
            Zone::Local => render(&utc, &Local, pattern),
            Zone::Fixed(offset) => render(&utc, &offset, pattern),
        })
    }

    /// Date (`YYYY-mm-dd`), hour (`HH`) and weekday name, or `NA` three times.
    pub fn date_hour_day(self, epoch: Option<f64>) -> (String, String, String) {
        let parts = epoch.and_then(|e| {
            Some((
                self.format(e, "%Y-%m-%d")?,
                self.format(e, "%H")?,
                self.format(e, "%A")?,
            ))
        });
        parts.unwrap_or_else(|| ("NA".into(), "NA".into(), "NA".into()))
    }

    /// Compact `yymmdd HH:MM:SS` stamp, empty when the epoch is unknown.
    pub fn short_stamp(self, epoch: Option<f64>) -> String {
        epoch.and_then(|e| self.format(e, "%y%m%d %H:%M:%S")).unwrap_or_default()
    }
}

fn render<Tz: TimeZone>(utc: &DateTime<Utc>, tz: &Tz, pattern: &str) -> String
where
    Tz::Offset: Display,
{
    utc.with_timezone(tz).format(pattern).to_string()
}

/// Parse a scheduler timestamp such as `2016-03-10T04:15:02.0036`.
///
/// A date part that is not exactly 19 characters long has its first
/// character dropped; concatenating logs with `cat` leaves a stray
/// byte-order mark in front of some lines.
pub fn parse_timestamp(text: &str, zone: Zone) -> Result<f64, LineError> {
    let bad = || LineError::Timestamp(text.to_string());
    let (stamp, fraction) = text.trim().rsplit_once('.').ok_or_else(bad)?;
    let stamp = if stamp.chars().count() != STAMP_LEN {
        let mut chars = stamp.chars();
        chars.next();
        chars.as_str()
    } else {
        stamp
    };
    let naive = NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).map_err(|_| bad())?;
    let whole = zone.to_epoch(&naive).ok_or_else(bad)?;
    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let fraction: f64 = fraction.parse().map_err(|_| bad())?;
    Ok(whole as f64 + fraction / 10000.0)
}

/// Round to `places` decimals the way the historical exports did.
///
/// The exact binary value is rounded, with exact ties going to even, so
/// `0.125` becomes `0.12` and `0.375` becomes `0.38`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Render a float the way the historical exports did (`1.0`, `0.4`, `4336.2421875`).
pub fn float_str(value: f64) -> String {
    format!("{value:?}")
}

/// Seconds to minutes rounded to 2 decimals, or NaN when unknown.
pub fn interval_to_float_m(interval: Option<f64>) -> f64 {
    match interval {
        Some(secs) if secs.is_finite() => round_to(secs / 60.0, 2),
        _ => f64::NAN,
    }
}

/// Seconds to minutes rounded to 2 decimals, or `NA` when unknown.
pub fn interval_to_string_m(interval: Option<f64>) -> String {
    match interval {
        Some(secs) if secs.is_finite() => float_str(round_to(secs / 60.0, 2)),
        _ => "NA".to_string(),
    }
}

/// Friendly elapsed time, e.g. `70.0 min. / 1.17 hr.`
pub fn format_elapsed(seconds: f64) -> String {
    format!(
        "{} min. / {} hr.",
        float_str(round_to(seconds / 60.0, 1)),
        float_str(round_to(seconds / 3600.0, 2))
    )
}

/// Like [`format_elapsed`] for a textual seconds count; non-digit input is reported, not parsed.
pub fn format_elapsed_str(text: &str) -> String {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return format!("illegal time str <{text}>");
    }
    match text.parse::<f64>() {
        Ok(seconds) => format_elapsed(seconds),
        Err(_) => format!("illegal time str <{text}>"),
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
