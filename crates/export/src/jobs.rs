// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flat job table, one row per job.

use std::io::Write;

use sl_core::time_fmt::{float_str, interval_to_string_m};
use sl_core::{Job, Zone};
use tracing::debug;

use crate::ExportError;

pub const JOB_COLUMNS: [&str; 22] = [
    "submitted_date",
    "submitted_time",
    "submitted_day",
    "start_date",
    "start_time",
    "start_day",
    "duration_m",
    "wait_m",
    "user",
    "simulator",
    "host",
    "working_set",
    "priority",
    "min_proc",
    "threads",
    "max_proc",
    "req_perf",
    "req_mem",
    "exit_code",
    "results_copy_m",
    "uuid",
    "version",
];

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Cells for one job in [`JOB_COLUMNS`] order.
///
/// Unknown text fields are empty; unknown minute fields are `NA`.
pub fn job_row(job: &Job, zone: Zone) -> [String; 22] {
    let (submitted_date, submitted_time, submitted_day) = zone.date_hour_day(job.submitted);
    let (start_date, start_time, start_day) = zone.date_hour_day(job.start);
    let request = &job.request;
    [
        submitted_date,
        submitted_time,
        submitted_day,
        start_date,
        start_time,
        start_day,
        interval_to_string_m(job.duration),
        interval_to_string_m(job.wait),
        text(&job.user),
        job.simulator().unwrap_or_default().to_string(),
        text(&job.host),
        job.working_set_mb.map(float_str).unwrap_or_default(),
        text(&job.priority),
        text(&request.min_processors),
        text(&request.threads_per_processor),
        text(&request.max_processors),
        text(&request.preferred_perf),
        text(&request.preferred_mem_cap),
        job.disposition.as_ref().map(|d| d.export_label().to_string()).unwrap_or_default(),
        interval_to_string_m(job.results_copy),
        text(&job.unique_id),
        job.major_version().map(|v| v.to_string()).unwrap_or_default(),
    ]
}

/// Write the header and one row per job.
pub fn write_jobs_csv<W: Write>(jobs: &[Job], zone: Zone, writer: W) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(JOB_COLUMNS)?;
    for job in jobs {
        out.write_record(job_row(job, zone))?;
    }
    out.flush()?;
    debug!(jobs = jobs.len(), "wrote job table");
    Ok(())
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
