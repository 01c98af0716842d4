// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job entity and its per-message lifecycle transitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::hosts::HostMap;
use crate::time_fmt::{format_elapsed, Zone};
use crate::timeline::{EventKind, Timeline};
use crate::units::memory_to_mb;

/// Registry-unique job identity, rendered as `JOB{n}`.
///
/// Unlike the scheduler's job number this is never reused, so it is the
/// only safe key across scheduler restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl JobId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JOB{}", self.0)
    }
}

/// How a job ended, as far as the log lets us tell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Exit code text exactly as logged (may be negative or unsigned-wrapped)
    Exit(String),
    Cancelled,
    /// Terminated by the scheduler; exported as `cancelled`
    Terminated,
    Shutdown,
    HostReassigned,
    /// Number reconnected after a restart; only an `exit code` message replaces it
    Restored,
}

impl Disposition {
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Disposition::Cancelled | Disposition::Terminated)
    }

    /// Value written to the `exit_code` column.
    ///
    /// Terminations and cancellations share one label in every export.
    pub fn export_label(&self) -> &str {
        match self {
            Disposition::Exit(code) => code,
            Disposition::Cancelled | Disposition::Terminated => "cancelled",
            Disposition::Shutdown => "shutdown",
            Disposition::HostReassigned => "host_reassigned",
            Disposition::Restored => "restored",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::Terminated => f.write_str("terminated"),
            other => f.write_str(other.export_label()),
        }
    }
}

/// Processor and tier request from a `MaxProcessors=...` line (raw values).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequest {
    pub min_processors: Option<String>,
    pub max_processors: Option<String>,
    pub threads_per_processor: Option<String>,
    pub preferred_perf: Option<String>,
    pub preferred_mem_cap: Option<String>,
}

/// One submitted unit of work, reconstructed from the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    /// Scheduler-assigned number; 0 once a restart has invalidated it
    pub number: u32,
    pub version: Option<String>,
    /// Raw task name from the Submitted message (e.g. `AXIEM:5.0`)
    pub name: Option<String>,
    pub user: Option<String>,
    pub priority: Option<String>,
    pub unique_id: Option<String>,
    /// Submitted attributes without a dedicated field, in log order
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    pub submitted: Option<f64>,
    pub start: Option<f64>,
    pub stop: Option<f64>,
    pub duration: Option<f64>,
    /// Time spent queued (start minus submit)
    pub wait: Option<f64>,
    pub host: Option<String>,
    /// Process count from the `-np` flag of the launched command line
    pub num_processors: Option<u32>,
    #[serde(default)]
    pub request: ResourceRequest,
    pub working_set_mb: Option<f64>,
    pub files_remaining: Option<u32>,
    pub results_copy: Option<f64>,
    pub disposition: Option<Disposition>,
    /// Notes about inferred or discarded values
    #[serde(default)]
    pub exceptions: Vec<String>,
    /// Source lines that touched this job
    #[serde(skip)]
    pub lines: Vec<String>,
}

impl Job {
    /// Create a job from a `Found version` message.
    pub fn found(id: JobId, number: u32, version: Option<String>) -> Self {
        Self {
            id,
            number,
            version,
            name: None,
            user: None,
            priority: None,
            unique_id: None,
            attributes: IndexMap::new(),
            submitted: None,
            start: None,
            stop: None,
            duration: None,
            wait: None,
            host: None,
            num_processors: None,
            request: ResourceRequest::default(),
            working_set_mb: None,
            files_remaining: None,
            results_copy: None,
            disposition: None,
            exceptions: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn is_live(&self) -> bool {
        self.number != 0
    }

    /// True once any disposition is recorded, `Restored` included.
    pub fn has_outcome(&self) -> bool {
        self.disposition.is_some()
    }

    pub fn is_cancelled(&self) -> bool {
        self.disposition.as_ref().is_some_and(Disposition::is_cancellation)
    }

    /// Friendly simulator name derived from the raw task name.
    pub fn simulator(&self) -> Option<&str> {
        let name = self.name.as_deref()?;
        Some(if name.starts_with("mpiexec") {
            "Analyst"
        } else if name.starts_with("AXIEM") || name.starts_with("Axiem") {
            "AXIEM"
        } else if name.starts_with("AWR_EMS2Proxy") {
            "EM_3rd_Party"
        } else {
            name
        })
    }

    /// Major version from the first two characters of the version string.
    pub fn major_version(&self) -> Option<i64> {
        let version = self.version.as_deref()?;
        let head: String = version.chars().take(2).collect();
        head.parse().ok()
    }

    pub fn exceptions_text(&self) -> String {
        self.exceptions.iter().map(|e| format!("{e} - ")).collect()
    }

    pub(crate) fn note(&mut self, text: &str) {
        self.exceptions.push(text.to_string());
    }

    pub(crate) fn record_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// Recompute duration from start/stop.
    ///
    /// A negative span is dropped and annotated; cancelled jobs never get one.
    fn settle_duration(&mut self) {
        if self.is_cancelled() {
            self.duration = None;
            return;
        }
        let (Some(start), Some(stop)) = (self.start, self.stop) else {
            return;
        };
        let span = stop - start;
        if span < 0.0 {
            warn!(job = %self.id, number = self.number, span, "negative duration discarded");
            self.duration = None;
            self.note("negative duration deleted");
        } else {
            self.duration = Some(span);
        }
    }

    /// Set stop and duration at `time` when a start is known and no duration exists yet.
    fn close_at(&mut self, time: f64) {
        if self.duration.is_some() {
            return;
        }
        if self.start.is_some() {
            self.stop = Some(time);
            self.settle_duration();
        } else {
            warn!(job = %self.id, number = self.number, "job has no start time");
        }
    }

    fn update_wait(&mut self) {
        self.wait = match (self.start, self.submitted) {
            (Some(start), Some(submitted)) => Some(start - submitted),
            _ => None,
        };
    }

    fn release_host(&self, hosts: &mut HostMap) {
        if let Some(host) = &self.host {
            hosts.release(host, self.id);
        }
    }

    /// `Submitted. Name="...", User="...", Priority=1`
    pub fn submitted(&mut self, time: f64, attrs: &str, timeline: &mut Timeline) {
        self.submitted = Some(time);
        for (key, value) in parse_pairs(attrs) {
            match key {
                "Name" => self.name = Some(value),
                "User" => self.user = Some(value),
                "Priority" => self.priority = Some(value),
                "UniqueID" => self.unique_id = Some(value),
                _ => {
                    self.attributes.insert(key.to_string(), value);
                }
            }
        }
        timeline.record(time, EventKind::Queued, self.id);
    }

    /// Scheduler restarted and handed this job a new number.
    pub fn restore(&mut self, number: u32) {
        self.number = number;
        self.disposition = Some(Disposition::Restored);
    }

    /// `Creating Process <command line>`
    pub fn creating(&mut self, time: f64, command: &str) {
        self.start = Some(time);
        self.update_wait();
        if let Some(np) = processor_flag(command) {
            self.num_processors = Some(np);
        }
    }

    /// `started <task>, procId:N on controller "<host>"`
    pub fn started(&mut self, time: f64, host: &str, hosts: &mut HostMap, timeline: &mut Timeline) {
        if self.start.is_none() {
            self.start = Some(time);
        }
        self.update_wait();
        // started somewhere other than where it was assigned
        if let Some(assigned) = self.host.as_deref().filter(|h| *h != host) {
            hosts.release(assigned, self.id);
        }
        self.host = Some(host.to_string());
        hosts.occupy(host, self.id);
        timeline.record(time, EventKind::Started, self.id);
    }

    /// The job's host was handed to another job before this one reported an exit.
    pub fn vanished(&mut self, time: f64, timeline: &mut Timeline) {
        self.disposition = Some(Disposition::HostReassigned);
        self.note("exit status set by next assignment");
        if self.start.is_some() && self.stop.is_none() {
            self.stop = Some(time);
            if self.duration.is_none() {
                self.settle_duration();
            }
        }
        timeline.record(time, EventKind::Vanished, self.id);
    }

    /// `peak working set = <size>.`
    pub fn working_set(&mut self, size: &str) {
        match memory_to_mb(size) {
            Some(mb) => self.working_set_mb = Some(mb),
            None => warn!(job = %self.id, size, "unrecognized working set size"),
        }
    }

    /// `releasing N processors ...`
    pub fn releasing(&mut self, time: f64) {
        self.stop = Some(time);
        if self.start.is_none() {
            // start was lost to a scheduler restart
            self.duration = None;
            self.note("released without a start time");
        } else {
            self.settle_duration();
        }
    }

    /// `MaxProcessors=8, MinProcessors=1, ThreadsPerProcessor=1, PreferredPerf="low", ...`
    pub fn request(&mut self, attrs: &str) {
        for (key, value) in parse_pairs(attrs) {
            let value = value.trim_end_matches('.').trim_matches('"').to_string();
            match key {
                "MaxProcessors" => self.request.max_processors = Some(value),
                "MinProcessors" => self.request.min_processors = Some(value),
                "ThreadsPerProcessor" => self.request.threads_per_processor = Some(value),
                "PreferredPerf" => self.request.preferred_perf = Some(value),
                "PreferredMemCap" => self.request.preferred_mem_cap = Some(value),
                _ => {
                    self.attributes.insert(key.to_string(), value);
                }
            }
        }
    }

    /// `Output Files remaining: N`
    ///
    /// A nonzero count means the job is over and results are being copied
    /// back; zero means copying finished.
    pub fn files_remaining(&mut self, time: f64, count: u32) {
        self.files_remaining = Some(count);
        if count != 0 {
            if self.stop.is_none() {
                self.stop = Some(time);
                self.note("set stop time from copy line");
            }
            return;
        }
        if self.is_cancelled() {
            // trailing copy message after a cancel is spurious
            return;
        }
        match self.stop {
            Some(stop) => self.results_copy = Some(time - stop),
            None => warn!(job = %self.id, "output files=0 on a job with no stop time"),
        }
    }

    /// `(AXIEM:1.0) Ended. Exit status: <code>`
    pub fn exit_status(
        &mut self,
        time: f64,
        code: &str,
        hosts: &mut HostMap,
        timeline: &mut Timeline,
    ) {
        self.release_host(hosts);
        if self.has_outcome() {
            return;
        }
        self.disposition = Some(Disposition::Exit(code.to_string()));
        self.close_at(time);
        timeline.record(time, EventKind::Ended, self.id);
    }

    /// `Process N ("...") ended with exit code <code>.`
    pub fn exit_code(
        &mut self,
        time: f64,
        code: &str,
        hosts: &mut HostMap,
        timeline: &mut Timeline,
    ) {
        self.release_host(hosts);
        // the only message allowed to replace an earlier disposition, `Restored` included
        if self.has_outcome() && self.start.is_some() && self.duration.is_some() {
            return;
        }
        // a cancellation is more informative than the generic exit code that follows it
        if !self.is_cancelled() {
            self.disposition = Some(Disposition::Exit(code.to_string()));
        }
        self.close_at(time);
        timeline.record(time, EventKind::Ended, self.id);
    }

    /// `Dequeueing job number N`, `Dequeueing scheduled job`, `Setting job to CANCELING state`
    pub fn cancelled(&mut self, time: f64, hosts: &mut HostMap, timeline: &mut Timeline) {
        if self.has_outcome() {
            return;
        }
        if self.duration.is_none() && self.start.is_some() {
            self.stop = Some(time);
        }
        self.disposition = Some(Disposition::Cancelled);
        self.duration = None;
        self.release_host(hosts);
        timeline.record(time, EventKind::Cancelled, self.id);
    }

    /// `Terminating job number N (...)`
    pub fn terminated(&mut self, time: f64, hosts: &mut HostMap, timeline: &mut Timeline) {
        if self.has_outcome() {
            return;
        }
        self.stop = Some(time);
        self.disposition = Some(Disposition::Terminated);
        self.duration = None;
        self.release_host(hosts);
        timeline.record(time, EventKind::Terminated, self.id);
    }

    /// Explicit scheduler shutdown while this job was still open.
    pub fn shut_down(&mut self) {
        if !self.has_outcome() {
            self.disposition = Some(Disposition::Shutdown);
        }
    }

    /// Multi-line dump of the job's fields followed by its source lines.
    pub fn describe(&self, zone: Zone) -> String {
        let stamp = |t: Option<f64>| zone.short_stamp(t);
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let mut rows: Vec<(&str, String)> = vec![
            ("submitted", stamp(self.submitted)),
            ("start", stamp(self.start)),
            ("stop", stamp(self.stop)),
            ("exit", self.disposition.as_ref().map(ToString::to_string).unwrap_or_default()),
            ("name", text(&self.name)),
            ("host", text(&self.host)),
            ("number", self.number.to_string()),
            ("user", text(&self.user)),
            ("priority", text(&self.priority)),
            ("version", text(&self.version)),
            ("uuid", text(&self.unique_id)),
            ("duration", self.duration.map(format_elapsed).unwrap_or_default()),
            ("wait", self.wait.map(format_elapsed).unwrap_or_default()),
            ("exceptions", self.exceptions_text()),
        ];
        for (key, value) in &self.attributes {
            rows.push((key.as_str(), value.clone()));
        }
        let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 1;

        let mut out = format!("\n{} ==============================================\n", self.id);
        for (key, value) in rows {
            out.push_str(&format!("{key:>width$}: {value}\n"));
        }
        out.push_str("----- Log Lines -----\n");
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Split `Key=value, Key="value"` lists; malformed pairs are skipped.
fn parse_pairs(attrs: &str) -> impl Iterator<Item = (&str, String)> {
    attrs.split(',').filter_map(|pair| {
        let pair = pair.trim();
        if pair.is_empty() {
            return None;
        }
        match pair.split_once('=') {
            Some((key, value)) => Some((key.trim(), value.trim().trim_matches('"').to_string())),
            None => {
                warn!(pair, "attribute without '='");
                None
            }
        }
    })
}

fn processor_flag(command: &str) -> Option<u32> {
    let (_, rest) = command.split_once("-np ")?;
    rest.split_whitespace().next()?.parse().ok()
}

crate::builder! {
    JobBuilder => Job {
        fields {
            id: JobId = JobId(0),
            number: u32 = 1,
            attributes: IndexMap<String, String> = IndexMap::new(),
            request: ResourceRequest = ResourceRequest::default(),
            exceptions: Vec<String> = Vec::new(),
            lines: Vec<String> = Vec::new(),
        }
        optional {
            version: String,
            name: String,
            user: String,
            priority: String,
            unique_id: String,
            submitted: f64,
            start: f64,
            stop: f64,
            duration: f64,
            wait: f64,
            host: String,
            num_processors: u32,
            working_set_mb: f64,
            files_remaining: u32,
            results_copy: f64,
            disposition: Disposition,
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
