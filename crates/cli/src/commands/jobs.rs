// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `schedlog jobs`: reconstruct jobs and export one row per job.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use sl_core::Zone;

use crate::output::{self, JobsFormat};

#[derive(Args)]
pub struct JobsArgs {
    /// Log files, or directories to search for AWR_JobScheduler*.txt logs
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
    /// Write the job table here (default: print only the summary)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Table format
    #[arg(long, value_enum, default_value_t = JobsFormat::Csv)]
    pub format: JobsFormat,
}

pub fn handle(args: JobsArgs, zone: Zone) -> Result<()> {
    let registry = super::reconstruct(&args.inputs, zone)?;
    let (start, end) = super::job_span(&registry)?;
    let count = registry.number_of_jobs();

    let Some(path) = args.output else {
        println!("found {count} jobs from {start} to {end}.");
        return Ok(());
    };
    let mut out = output::create(Some(&path))?;
    let zone = registry.zone();
    match args.format {
        JobsFormat::Csv => sl_export::write_jobs_csv(registry.jobs(), zone, &mut out)?,
        JobsFormat::Xml => sl_export::write_jobs_xml(registry.jobs(), zone, &mut out)?,
        JobsFormat::Json => sl_export::write_jobs_json(registry.jobs(), zone, &mut out)?,
    }
    out.flush()?;
    println!("produced {} containing {count} jobs from {start} to {end}.", path.display());
    Ok(())
}
