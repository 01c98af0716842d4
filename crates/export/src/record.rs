// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed per-job record for statistics and JSON consumers.

use serde::{Deserialize, Serialize};
use std::io::Write;

use sl_core::time_fmt::interval_to_float_m;
use sl_core::units::{round_to_int, to_int_or_na};
use sl_core::{Job, Zone};

use crate::ExportError;

/// Derived view of a [`Job`].
///
/// Integer fields are `None` where the source was missing or not numeric;
/// minute fields are `NaN` when unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub submitted_date: String,
    pub submitted_time: String,
    pub submitted_day: String,
    pub start_date: String,
    pub start_time: String,
    pub start_day: String,
    pub duration_m: f64,
    pub wait_m: f64,
    pub user: String,
    pub major_version: Option<i64>,
    pub minor_version: String,
    pub simulator: String,
    pub host: String,
    pub priority: Option<i64>,
    pub min_proc: Option<i64>,
    pub threads: Option<i64>,
    pub max_proc: Option<i64>,
    pub req_perf: String,
    pub req_mem: String,
    pub exit: String,
    pub files_remaining: Option<i64>,
    pub working_set: Option<i64>,
    pub results_copy_m: f64,
}

fn int(value: &Option<String>) -> Option<i64> {
    value.as_deref().and_then(to_int_or_na)
}

impl JobRecord {
    pub fn from_job(job: &Job, zone: Zone) -> Self {
        let (submitted_date, submitted_time, submitted_day) = zone.date_hour_day(job.submitted);
        let (start_date, start_time, start_day) = zone.date_hour_day(job.start);
        Self {
            submitted_date,
            submitted_time,
            submitted_day,
            start_date,
            start_time,
            start_day,
            duration_m: interval_to_float_m(job.duration),
            wait_m: interval_to_float_m(job.wait),
            user: job.user.clone().unwrap_or_default(),
            major_version: job.major_version(),
            minor_version: job.version.clone().unwrap_or_default(),
            simulator: job.simulator().unwrap_or_default().to_string(),
            host: job.host.clone().unwrap_or_default(),
            priority: int(&job.priority),
            min_proc: int(&job.request.min_processors),
            threads: int(&job.request.threads_per_processor),
            max_proc: int(&job.request.max_processors),
            req_perf: job.request.preferred_perf.clone().unwrap_or_default(),
            req_mem: job.request.preferred_mem_cap.clone().unwrap_or_default(),
            exit: job.disposition.as_ref().map(|d| d.export_label().to_string()).unwrap_or_default(),
            files_remaining: job.files_remaining.map(i64::from),
            working_set: job.working_set_mb.and_then(round_to_int),
            results_copy_m: interval_to_float_m(job.results_copy),
        }
    }
}

/// Pretty JSON array of [`JobRecord`]s; unknown minutes become `null`.
pub fn write_jobs_json<W: Write>(jobs: &[Job], zone: Zone, mut writer: W) -> Result<(), ExportError> {
    let records: Vec<JobRecord> = jobs.iter().map(|j| JobRecord::from_job(j, zone)).collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
