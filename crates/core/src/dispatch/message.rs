// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field extraction from individual log messages.

use regex::Regex;
use std::sync::LazyLock;

use super::rules::JobRef;
use crate::error::LineError;
use crate::time_fmt::{parse_timestamp, Zone};

#[allow(clippy::expect_used)]
static COLON_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"- Job (\d+):").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static SPACE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"- Job (\d+) ").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static JOB_NUMBER_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"job number (\d+) ").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static CONTROLLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"controller "([^"]*)""#).expect("constant regex pattern is valid"));

/// A line split into its timestamp and free-text body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamped<'a> {
    pub time: f64,
    pub body: &'a str,
}

/// Split `<timestamp> - <message>`.
pub fn split_stamp(line: &str, zone: Zone) -> Result<Stamped<'_>, LineError> {
    let (stamp, body) =
        line.split_once(" - ").ok_or(LineError::MissingSeparator { separator: " - " })?;
    let time = parse_timestamp(stamp, zone)?;
    Ok(Stamped { time, body })
}

/// Scheduler job number referenced by the line.
pub fn job_number(line: &str, job_ref: JobRef) -> Result<u32, LineError> {
    let re = match job_ref {
        JobRef::Colon => &COLON_REF,
        JobRef::Space => &SPACE_REF,
        JobRef::JobNumber => &JOB_NUMBER_REF,
        JobRef::None => return Err(LineError::MissingJobNumber),
    };
    re.captures(line)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or(LineError::MissingJobNumber)
}

/// Message text after the `Job N: ` prefix, or the whole body when there is none.
pub fn command(body: &str) -> &str {
    match body.split_once(": ") {
        Some((head, rest)) if head.starts_with("Job ") => rest,
        _ => body,
    }
}

fn after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.find(marker).map(|i| &text[i + marker.len()..])
}

/// `Found version 12.0.6310 for task id "AXIEM"` → `12.0.6310`
pub fn version(command: &str) -> Option<String> {
    let rest = after(command, "version ")?;
    let version = rest.split(' ').next().unwrap_or(rest);
    (!version.is_empty()).then(|| version.to_string())
}

/// Attribute list following `Submitted.`
pub fn submitted_attrs(command: &str) -> &str {
    after(command, "Submitted.").unwrap_or(command).trim()
}

/// UUID following `UniqueID=`
pub fn unique_id(body: &str) -> Result<&str, LineError> {
    let uuid = after(body, "UniqueID=").ok_or(LineError::MissingField("UniqueID"))?.trim();
    if uuid.is_empty() {
        return Err(LineError::MissingField("UniqueID"));
    }
    Ok(uuid)
}

/// Quoted host name following `controller`.
pub fn controller(command: &str) -> Result<&str, LineError> {
    CONTROLLER
        .captures(command)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or(LineError::MissingField("controller"))
}

/// Size text after `peak working set =`, without the trailing period.
pub fn working_set(command: &str) -> Result<&str, LineError> {
    let size = after(command, "=").ok_or(LineError::MissingField("working set"))?.trim();
    Ok(size.strip_suffix('.').unwrap_or(size))
}

/// `... Ended. Exit status: 0` → `0`
pub fn exit_status(command: &str) -> Result<&str, LineError> {
    let code = after(command, "Exit status:").ok_or(LineError::MissingField("exit status"))?.trim();
    if code.is_empty() {
        return Err(LineError::MissingField("exit status"));
    }
    Ok(code)
}

/// `... ended with exit code 1.` → `1`
pub fn exit_code(command: &str) -> Result<&str, LineError> {
    let code = after(command, "exit code ").ok_or(LineError::MissingField("exit code"))?.trim();
    let code = code.strip_suffix('.').unwrap_or(code);
    if code.is_empty() {
        return Err(LineError::MissingField("exit code"));
    }
    Ok(code)
}

/// Count after `Output Files remaining` (colon optional).
pub fn files_remaining(command: &str) -> Result<u32, LineError> {
    after(command, "Output Files remaining")
        .map(|rest| rest.trim_start_matches(':').trim())
        .and_then(|n| n.parse().ok())
        .ok_or(LineError::MissingField("files remaining count"))
}

/// Version detail after `Starting Job Scheduler`.
pub fn scheduler_start(body: &str) -> String {
    after(body, "Starting Job Scheduler").unwrap_or_default().trim().to_string()
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
