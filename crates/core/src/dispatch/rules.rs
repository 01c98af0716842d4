// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered classification table for scheduler log lines.
//!
//! The first rule with a matching marker wins. Several markers are
//! substrings of other messages (`exit code ` also appears in the
//! scheduler shutdown line, `assigned` in many places), so a rule must
//! sit below every more specific rule that could also match its text.

/// What a classified line does to the reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Found,
    Submitted,
    Restored,
    Creating,
    Started,
    Releasing,
    Shutdown,
    Restart,
    Request,
    WorkingSet,
    ExitStatus,
    ExitCode,
    Cancel,
    Terminate,
    CopyBack,
    Assigned,
    SchedulerStart,
    FilesRemaining,
    Ignore,
}

/// Where the scheduler job number sits in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobRef {
    /// `- Job 12: ...`
    Colon,
    /// `- Job 12 restored. ...`
    Space,
    /// `... job number 12 (...)`
    JobNumber,
    None,
}

#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub markers: &'static [&'static str],
    pub action: Action,
    pub job_ref: JobRef,
}

impl Rule {
    pub fn matches(&self, line: &str) -> bool {
        self.markers.iter().any(|m| line.contains(m))
    }
}

const fn rule(
    name: &'static str,
    markers: &'static [&'static str],
    action: Action,
    job_ref: JobRef,
) -> Rule {
    Rule { name, markers, action, job_ref }
}

/// Classification rules in priority order.
pub static RULES: &[Rule] = &[
    rule("found", &["Found version"], Action::Found, JobRef::Colon),
    rule("submitted", &["Submitted."], Action::Submitted, JobRef::Colon),
    rule("restored", &["restored. UniqueID"], Action::Restored, JobRef::Space),
    rule("creating", &["Creating Process"], Action::Creating, JobRef::Colon),
    rule("started", &["on controller"], Action::Started, JobRef::Colon),
    rule("releasing", &["releasing"], Action::Releasing, JobRef::Colon),
    rule("shutdown", &["Job Scheduler shutting down"], Action::Shutdown, JobRef::None),
    rule("restart", &["Processing Command Line"], Action::Restart, JobRef::None),
    rule("request", &["MaxProcessors"], Action::Request, JobRef::Colon),
    // `=` required: "peak working set not reported" must not match
    rule("working_set", &["peak working set ="], Action::WorkingSet, JobRef::Colon),
    rule("exit_status", &["Exit status"], Action::ExitStatus, JobRef::Colon),
    // also matches the scheduler shutdown line, which is claimed above
    rule("exit_code", &["exit code "], Action::ExitCode, JobRef::Colon),
    rule("dequeue", &["Dequeueing job"], Action::Cancel, JobRef::JobNumber),
    rule("dequeue_scheduled", &["Dequeueing scheduled job"], Action::Cancel, JobRef::Colon),
    rule("canceling", &["Setting job to CANCELING state"], Action::Cancel, JobRef::Colon),
    rule("terminate", &["Terminating job"], Action::Terminate, JobRef::JobNumber),
    rule("copy_back", &["Output Files remaining:"], Action::CopyBack, JobRef::Colon),
    rule(
        "task_registration",
        &["Registering Task token", "Registering task id"],
        Action::Ignore,
        JobRef::None,
    ),
    rule("child_process", &["Child Process"], Action::Ignore, JobRef::None),
    rule("assigned", &["assigned"], Action::Assigned, JobRef::Colon),
    rule(
        "input_transfer",
        &[
            "Requesting input file",
            "Preparing to wait for transfer of input file",
            "Transfer complete for outgoing input file",
            "Transfer complete for all input files",
            "File requested by remote queue",
            "Transfer complete for input file",
        ],
        Action::Ignore,
        JobRef::None,
    ),
    rule(
        "output_transfer",
        &[
            "Transfer complete for output file",
            "Preparing to wait for transfer of output file",
            "Requesting output file",
        ],
        Action::Ignore,
        JobRef::None,
    ),
    rule("ping", &["Responded to ping from", "has disconnected"], Action::Ignore, JobRef::None),
    rule("scheduler_start", &["Starting Job Scheduler"], Action::SchedulerStart, JobRef::None),
    rule("files_remaining", &["Output Files remaining"], Action::FilesRemaining, JobRef::Colon),
];

/// First rule matching `line`, if any.
pub fn classify(line: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.matches(line))
}
