// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line dispatcher: classify each log line and apply it to the registry.

pub mod message;
pub mod rules;

pub use rules::{classify, Action, JobRef, Rule, RULES};

use tracing::{debug, info, info_span, warn};

use crate::error::{LineError, LookupError, ReconstructError};
use crate::job::JobId;
use crate::registry::{IngestSummary, JobRegistry, SchedulerStart};
use message::Stamped;

/// Why a line was not applied.
enum Skip {
    Line(LineError),
    Lookup(LookupError),
    Fatal(ReconstructError),
}

impl From<LineError> for Skip {
    fn from(e: LineError) -> Self {
        Skip::Line(e)
    }
}

impl From<LookupError> for Skip {
    fn from(e: LookupError) -> Self {
        Skip::Lookup(e)
    }
}

impl From<ReconstructError> for Skip {
    fn from(e: ReconstructError) -> Self {
        Skip::Fatal(e)
    }
}

/// Reads one source strictly in order and routes each line.
pub struct Dispatcher<'r> {
    registry: &'r mut JobRegistry,
    summary: IngestSummary,
    last_time: Option<f64>,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r mut JobRegistry, source: &str) -> Self {
        Self {
            registry,
            summary: IngestSummary { source: source.to_string(), ..IngestSummary::default() },
            last_time: None,
        }
    }

    /// Process every line, then close out jobs still open at end of input.
    pub fn run(mut self, text: &str) -> Result<IngestSummary, ReconstructError> {
        let span = info_span!("ingest", source = %self.summary.source);
        let _guard = span.enter();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim_end();
            let line = line.strip_prefix('\u{feff}').unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            self.summary.lines += 1;
            self.dispatch(index + 1, line)?;
        }

        // the last timestamp seen is the only end time available
        match self.last_time {
            Some(time) => self.registry.restart_scheduler(time, false),
            None => debug!("no timestamped lines, nothing to close out"),
        }

        info!(
            lines = self.summary.lines,
            submitted = self.summary.submitted,
            unmatched = self.summary.unmatched,
            warnings = self.summary.warnings,
            "ingested log"
        );
        Ok(self.summary)
    }

    /// Classify and apply a single non-empty line.
    pub fn dispatch(&mut self, lineno: usize, line: &str) -> Result<(), ReconstructError> {
        let stamped = message::split_stamp(line, self.registry.zone());
        if let Ok(s) = &stamped {
            self.last_time = Some(s.time);
        }

        let Some(rule) = classify(line) else {
            self.summary.unmatched += 1;
            debug!(line = lineno, "unmatched line: {line}");
            return Ok(());
        };

        match self.apply(rule, lineno, line, stamped) {
            Ok(()) => Ok(()),
            Err(Skip::Line(e)) => {
                self.summary.warnings += 1;
                warn!(line = lineno, rule = rule.name, "skipping malformed line: {e}");
                Ok(())
            }
            Err(Skip::Lookup(e)) => {
                self.summary.warnings += 1;
                warn!(line = lineno, rule = rule.name, "{e}");
                Ok(())
            }
            Err(Skip::Fatal(e)) => Err(e),
        }
    }

    fn lookup(&self, line: &str, lineno: usize, rule: &Rule) -> Result<JobId, Skip> {
        let number = message::job_number(line, rule.job_ref)?;
        match self.registry.find_by_number(number, lineno)? {
            Some(id) => Ok(id),
            None => Err(LookupError::NoSuchNumber(number).into()),
        }
    }

    fn apply(
        &mut self,
        rule: &Rule,
        lineno: usize,
        line: &str,
        stamped: Result<Stamped<'_>, LineError>,
    ) -> Result<(), Skip> {
        if rule.action == Action::Ignore {
            return Ok(());
        }
        let Stamped { time, body } = stamped?;
        let cmd = message::command(body);

        let id = match rule.action {
            Action::Found => {
                let number = message::job_number(line, rule.job_ref)?;
                self.registry.create_job(number, message::version(cmd))
            }
            Action::Restored => {
                let number = message::job_number(line, rule.job_ref)?;
                let uuid = message::unique_id(body)?;
                self.registry.set_number_from_uuid(uuid, number)?
            }
            Action::Shutdown | Action::Restart => {
                debug!(line = lineno, "restarting scheduler");
                self.registry.restart_scheduler(time, rule.action == Action::Shutdown);
                return Ok(());
            }
            Action::SchedulerStart => {
                self.registry
                    .add_start(SchedulerStart { time, detail: message::scheduler_start(body) });
                return Ok(());
            }
            Action::Assigned => {
                let id = self.lookup(line, lineno, rule)?;
                let host = message::controller(cmd)?;
                self.registry.assign_host(id, host, time);
                id
            }
            _ => {
                let id = self.lookup(line, lineno, rule)?;
                self.transition(id, rule.action, time, cmd)?;
                id
            }
        };

        self.registry.with_job(id, |job, _, _| job.record_line(line));
        Ok(())
    }

    /// Per-job transitions for messages that reference a live job number.
    fn transition(&mut self, id: JobId, action: Action, time: f64, cmd: &str) -> Result<(), Skip> {
        match action {
            Action::Submitted => {
                let attrs = message::submitted_attrs(cmd);
                self.registry.with_job(id, |job, timeline, _| job.submitted(time, attrs, timeline));
                self.summary.submitted += 1;
            }
            Action::Creating => {
                self.registry.with_job(id, |job, _, _| job.creating(time, cmd));
            }
            Action::Started => {
                let host = message::controller(cmd)?;
                self.registry
                    .with_job(id, |job, timeline, hosts| job.started(time, host, hosts, timeline));
            }
            Action::Releasing => {
                self.registry.with_job(id, |job, _, _| job.releasing(time));
            }
            Action::Request => {
                self.registry.with_job(id, |job, _, _| job.request(cmd));
            }
            Action::WorkingSet => {
                let size = message::working_set(cmd)?;
                self.registry.with_job(id, |job, _, _| job.working_set(size));
            }
            Action::ExitStatus => {
                let code = message::exit_status(cmd)?;
                self.registry.with_job(id, |job, timeline, hosts| {
                    job.exit_status(time, code, hosts, timeline)
                });
            }
            Action::ExitCode => {
                let code = message::exit_code(cmd)?;
                self.registry
                    .with_job(id, |job, timeline, hosts| job.exit_code(time, code, hosts, timeline));
            }
            Action::Cancel => {
                self.registry
                    .with_job(id, |job, timeline, hosts| job.cancelled(time, hosts, timeline));
            }
            Action::Terminate => {
                self.registry
                    .with_job(id, |job, timeline, hosts| job.terminated(time, hosts, timeline));
            }
            Action::CopyBack => {
                let count = message::files_remaining(cmd)?;
                self.registry.with_job(id, |job, _, _| job.files_remaining(time, count));
            }
            Action::FilesRemaining => {
                let count = message::files_remaining(cmd)?;
                self.registry.with_job(id, |job, _, _| job.files_remaining = Some(count));
            }
            Action::Found
            | Action::Restored
            | Action::Shutdown
            | Action::Restart
            | Action::Assigned
            | Action::SchedulerStart
            | Action::Ignore => {}
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
