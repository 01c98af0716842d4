// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core model types.
pub mod strategies {
    use crate::job::Disposition;
    use crate::timeline::EventKind;
    use proptest::prelude::*;

    pub fn arb_event_kind() -> impl Strategy<Value = EventKind> {
        prop_oneof![
            Just(EventKind::Queued),
            Just(EventKind::Started),
            Just(EventKind::Ended),
            Just(EventKind::Cancelled),
            Just(EventKind::Terminated),
            Just(EventKind::Vanished),
            Just(EventKind::Shutdown),
        ]
    }

    pub fn arb_disposition() -> impl Strategy<Value = Disposition> {
        prop_oneof![
            "-?[0-9]{1,10}".prop_map(Disposition::Exit),
            Just(Disposition::Cancelled),
            Just(Disposition::Terminated),
            Just(Disposition::Shutdown),
            Just(Disposition::HostReassigned),
            Just(Disposition::Restored),
        ]
    }
}

// ── Log text builder ────────────────────────────────────────────────────

/// Renders well-formed scheduler log lines on an advancing clock.
///
/// Timestamps carry a `.0000` fraction, so parsed times are whole seconds.
/// Parse the output with `Zone::utc()` to get the epochs from [`LogBuilder::now`].
#[derive(Debug, Clone)]
pub struct LogBuilder {
    clock: NaiveDateTime,
    lines: Vec<String>,
}

impl Default for LogBuilder {
    fn default() -> Self {
        let clock = NaiveDate::from_ymd_opt(2016, 1, 20)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .unwrap_or_default();
        Self { clock, lines: Vec::new() }
    }
}

impl LogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at `YYYY-MM-DDTHH:MM:SS`.
    pub fn starting_at(stamp: &str) -> Self {
        let clock = NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S").unwrap_or_default();
        Self { clock, lines: Vec::new() }
    }

    /// Epoch (UTC) of the next line.
    pub fn now(&self) -> f64 {
        self.clock.and_utc().timestamp() as f64
    }

    pub fn wait(mut self, seconds: i64) -> Self {
        self.clock += TimeDelta::seconds(seconds);
        self
    }

    /// `<timestamp> - <message>`
    pub fn line(mut self, message: &str) -> Self {
        let stamp = self.clock.format("%Y-%m-%dT%H:%M:%S");
        self.lines.push(format!("{stamp}.0000 - {message}"));
        self
    }

    /// Verbatim text, no timestamp.
    pub fn raw(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    pub fn found(self, number: u32, task: &str) -> Self {
        self.line(&format!(r#"Job {number}: Found version 12.0.6310 for task id "{task}""#))
    }

    pub fn submitted(self, number: u32, name: &str, user: &str) -> Self {
        self.line(&format!(r#"Job {number}: Submitted. Name="{name}", User="{user}", Priority=1"#))
    }

    pub fn submitted_with_uuid(self, number: u32, name: &str, user: &str, uuid: &str) -> Self {
        self.line(&format!(
            r#"Job {number}: Submitted. Name="{name}", User="{user}", Priority=1, UniqueID={uuid}"#
        ))
    }

    pub fn creating(self, number: u32, np: u32) -> Self {
        self.line(&format!(
            r#"Job {number}: Creating Process "C:\Program Files\AWR\V12\mpiexec.exe" -np {np} -wdir C:\tmp"#
        ))
    }

    pub fn assigned(self, number: u32, task: &str, host: &str) -> Self {
        self.line(&format!(r#"Job {number}: assigned {task} to controller "{host}""#))
    }

    pub fn started(self, number: u32, task: &str, host: &str) -> Self {
        self.line(&format!(r#"Job {number}: started {task}, procId:0 on controller "{host}""#))
    }

    pub fn request(self, number: u32, max: u32) -> Self {
        self.line(&format!(
            r#"Job {number}: MaxProcessors={max}, MinProcessors=1, ThreadsPerProcessor=1, PreferredPerf="high", PreferredMemCap="low""#
        ))
    }

    pub fn working_set(self, number: u32, size: &str) -> Self {
        self.line(&format!("Job {number}: peak working set = {size}."))
    }

    pub fn releasing(self, number: u32) -> Self {
        self.line(&format!("Job {number}: releasing 1 processors"))
    }

    pub fn exit_status(self, number: u32, task: &str, code: &str) -> Self {
        self.line(&format!("Job {number}: ({task}) Ended. Exit status: {code}"))
    }

    pub fn exit_code(self, number: u32, code: &str) -> Self {
        self.line(&format!(
            r#"Job {number}: Process 404 ("C:\Program Files\AWR\V12\mpiexec.exe") ended with exit code {code}."#
        ))
    }

    pub fn files_remaining(self, number: u32, count: u32) -> Self {
        self.line(&format!("Job {number}: Output Files remaining: {count}"))
    }

    pub fn dequeue(self, number: u32, task: &str) -> Self {
        self.line(&format!("Dequeueing job number {number} ({task})"))
    }

    pub fn canceling(self, number: u32) -> Self {
        self.line(&format!("Job {number}: Setting job to CANCELING state"))
    }

    pub fn terminate(self, number: u32, task: &str) -> Self {
        self.line(&format!("Terminating job number {number} ({task})"))
    }

    pub fn restored(self, number: u32, uuid: &str) -> Self {
        self.line(&format!("Job {number} restored. UniqueID={uuid}"))
    }

    pub fn shutdown(self) -> Self {
        self.line("Job Scheduler shutting down with exit code 0x00000000")
    }

    pub fn restart(self) -> Self {
        self.line("Processing Command Line")
    }

    pub fn scheduler_start(self, version: &str) -> Self {
        self.line(&format!("Starting Job Scheduler {version}"))
    }

    /// Found, submitted, started, released and exited, one minute apart.
    pub fn complete_job(self, number: u32, task: &str, host: &str, code: &str) -> Self {
        self.found(number, task)
            .submitted(number, task, "dhoekstr")
            .wait(60)
            .started(number, task, host)
            .wait(60)
            .releasing(number)
            .exit_status(number, task, code)
            .wait(60)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn build(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}
