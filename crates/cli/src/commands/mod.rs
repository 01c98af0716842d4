// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod events;
pub mod jobs;
pub mod log_type;
pub mod stats;

use std::path::PathBuf;

use anyhow::Result;
use sl_core::{JobRegistry, ReconstructConfig, Zone};
use tracing::info;

use crate::discover::expand_file_list;
use crate::exit_error::ExitError;

/// Read every log under `inputs` into one registry, oldest file first.
pub fn reconstruct(inputs: &[PathBuf], zone: Zone) -> Result<JobRegistry> {
    let files = expand_file_list(inputs)?;
    let mut registry = JobRegistry::with_config(ReconstructConfig { zone });
    for file in &files {
        registry.read_log_file(file)?;
    }
    info!(files = files.len(), jobs = registry.number_of_jobs(), "reconstructed");
    Ok(registry)
}

/// Submit dates of the first and last job, or the "no jobs" exit.
pub fn job_span(registry: &JobRegistry) -> Result<(String, String), ExitError> {
    if registry.number_of_jobs() == 0 {
        return Err(ExitError::new(1, "No jobs found in log."));
    }
    let zone = registry.zone();
    let date = |t: Option<f64>| {
        t.and_then(|t| zone.format(t, "%Y-%m-%d")).unwrap_or_else(|| "NA".to_string())
    };
    Ok((date(registry.first_job_at()), date(registry.last_job_at())))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
