// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job registry: every job seen, number lookup, restarts and ingestion.
//!
//! Scheduler job numbers are only unique between restarts. On every
//! restart live numbers are reset to 0, so a number lookup can only ever
//! hit jobs from the current scheduler epoch.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::dispatch::Dispatcher;
use crate::error::{LookupError, ReconstructError};
use crate::hosts::HostMap;
use crate::job::{Job, JobId};
use crate::time_fmt::Zone;
use crate::timeline::Timeline;

/// Settings that shape how log text is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconstructConfig {
    pub zone: Zone,
}

/// A `Starting Job Scheduler` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerStart {
    pub time: f64,
    pub detail: String,
}

/// Per-file ingestion counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub source: String,
    /// Non-empty lines read
    pub lines: usize,
    /// `Submitted.` messages applied
    pub submitted: usize,
    pub unmatched: usize,
    /// Malformed lines and lookup misses that were skipped
    pub warnings: usize,
}

/// Ordered collection of all reconstructed jobs plus their shared timeline.
#[derive(Debug, Default)]
pub struct JobRegistry {
    config: ReconstructConfig,
    jobs: Vec<Job>,
    files: Vec<String>,
    starts: Vec<SchedulerStart>,
    timeline: Timeline,
    hosts: HostMap,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReconstructConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn config(&self) -> &ReconstructConfig {
        &self.config
    }

    pub fn zone(&self) -> Zone {
        self.config.zone
    }

    /// Read one log file into the registry, closing out open jobs at its end.
    pub fn read_log_file(&mut self, path: impl AsRef<Path>) -> Result<IngestSummary, ReconstructError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|source| ReconstructError::Io { path: path.to_path_buf(), source })?;
        let text = String::from_utf8_lossy(&bytes);
        self.read_log_str(&path.display().to_string(), &text)
    }

    /// Ingest log text held in memory under the given source name.
    pub fn read_log_str(&mut self, source: &str, text: &str) -> Result<IngestSummary, ReconstructError> {
        self.files.push(source.to_string());
        Dispatcher::new(self, source).run(text)
    }

    pub(crate) fn create_job(&mut self, number: u32, version: Option<String>) -> JobId {
        let id = JobId(self.jobs.len() as u64);
        self.jobs.push(Job::found(id, number, version));
        id
    }

    /// Find the live job carrying `number`.
    ///
    /// More than one live match means renumbering failed, which is fatal.
    pub fn find_by_number(&self, number: u32, line: usize) -> Result<Option<JobId>, ReconstructError> {
        let mut matches = self.jobs.iter().filter(|j| j.is_live() && j.number == number);
        let Some(first) = matches.next() else {
            return Ok(None);
        };
        let extra = matches.count();
        if extra > 0 {
            return Err(ReconstructError::DuplicateNumber { number, count: extra + 1, line });
        }
        Ok(Some(first.id))
    }

    /// Reconnect the job with `uuid` to a new scheduler number after a restart.
    pub fn set_number_from_uuid(&mut self, uuid: &str, number: u32) -> Result<JobId, LookupError> {
        let wanted = normalize_uuid(uuid);
        let matching: Vec<usize> = self
            .jobs
            .iter()
            .enumerate()
            .filter(|(_, j)| j.unique_id.as_deref().map(normalize_uuid) == Some(wanted))
            .map(|(i, _)| i)
            .collect();
        match matching.as_slice() {
            [index] => {
                let job = &mut self.jobs[*index];
                job.restore(number);
                Ok(job.id)
            }
            [] => Err(LookupError::NoSuchUuid(uuid.to_string())),
            many => Err(LookupError::AmbiguousUuid { uuid: uuid.to_string(), count: many.len() }),
        }
    }

    /// Invalidate all live numbers and emit one `shutdown` event.
    ///
    /// With `explicit_shutdown`, live jobs without an outcome are marked `shutdown`.
    pub fn restart_scheduler(&mut self, time: f64, explicit_shutdown: bool) {
        debug!(time, explicit_shutdown, "restarting scheduler");
        for job in self.jobs.iter_mut().filter(|j| j.is_live()) {
            if explicit_shutdown {
                job.shut_down();
            }
            job.number = 0;
        }
        self.timeline.shutdown(time);
    }

    /// `assigned <task> to controller "<host>"`
    ///
    /// A host still held by another job with no outcome means that job ended
    /// silently. Either way the host now belongs to `job`.
    pub fn assign_host(&mut self, job: JobId, host: &str, time: f64) {
        if let Some(previous) = self.hosts.occupant(host).filter(|p| *p != job) {
            if let Some(old) = self.jobs.get_mut(previous.index()).filter(|j| !j.has_outcome()) {
                debug!(host, vanished = %previous, next = %job, "host reassigned");
                old.vanished(time, &mut self.timeline);
            }
            self.hosts.remove(host);
        }
        self.hosts.occupy(host, job);
        if let Some(next) = self.jobs.get_mut(job.index()) {
            next.host.get_or_insert_with(|| host.to_string());
        }
    }

    /// Run a transition that needs the job alongside the timeline and host map.
    pub(crate) fn with_job<R>(
        &mut self,
        id: JobId,
        f: impl FnOnce(&mut Job, &mut Timeline, &mut HostMap) -> R,
    ) -> Option<R> {
        let job = self.jobs.get_mut(id.index())?;
        Some(f(job, &mut self.timeline, &mut self.hosts))
    }

    pub(crate) fn add_start(&mut self, start: SchedulerStart) {
        self.starts.push(start);
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(id.index())
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn number_of_jobs(&self) -> usize {
        self.jobs.len()
    }

    /// Submit time of the first job.
    pub fn first_job_at(&self) -> Option<f64> {
        self.jobs.first().and_then(|j| j.submitted)
    }

    /// Submit time of the last job.
    pub fn last_job_at(&self) -> Option<f64> {
        self.jobs.last().and_then(|j| j.submitted)
    }

    /// Jobs with a known duration (cancelled and still-open jobs have none).
    pub fn jobs_with_duration(&self) -> Vec<&Job> {
        self.jobs.iter().filter(|j| j.duration.is_some()).collect()
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn starts(&self) -> &[SchedulerStart] {
        &self.starts
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn hosts(&self) -> &HostMap {
        &self.hosts
    }
}

/// UUIDs are compared without surrounding braces or a trailing period.
fn normalize_uuid(uuid: &str) -> &str {
    uuid.trim().trim_end_matches('.').trim_matches(|c| c == '{' || c == '}')
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
