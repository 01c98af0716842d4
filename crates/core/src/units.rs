// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Memory-size normalization and lenient integer coercion.

/// Normalize a reported working-set size to megabytes.
///
/// `MB` and `GB` suffixes are honoured; a bare number is a byte count.
pub fn memory_to_mb(size: &str) -> Option<f64> {
    let size = size.trim();
    if let Some(mb) = size.strip_suffix("MB") {
        return mb.trim().parse::<f64>().ok();
    }
    if let Some(gb) = size.strip_suffix("GB") {
        return gb.trim().parse::<f64>().ok().map(|v| v * 1024.0);
    }
    size.parse::<u64>().ok().map(|bytes| bytes as f64 / 1024.0 / 1024.0)
}

/// Parse an integer field, `None` for anything that is not one.
pub fn to_int_or_na(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Round a float to the nearest integer (ties to even), `None` when not finite.
pub fn round_to_int(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.round_ties_even() as i64)
}
