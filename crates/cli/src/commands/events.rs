// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `schedlog events`: export the queue/run timeline.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use sl_core::Zone;

use crate::output::{self, EventsFormat};

#[derive(Args)]
pub struct EventsArgs {
    /// Log files, or directories to search for AWR_JobScheduler*.txt logs
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
    /// Write the timeline here (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Timeline format
    #[arg(long, value_enum, default_value_t = EventsFormat::Csv)]
    pub format: EventsFormat,
}

pub fn handle(args: EventsArgs, zone: Zone) -> Result<()> {
    let registry = super::reconstruct(&args.inputs, zone)?;
    super::job_span(&registry)?;

    let mut out = output::create(args.output.as_deref())?;
    match args.format {
        EventsFormat::Csv => sl_export::write_timeline_csv(registry.timeline(), registry.zone(), &mut out)?,
        EventsFormat::QueueInput => sl_export::write_queue_input(registry.timeline(), registry.jobs(), &mut out)?,
    }
    out.flush()?;
    drop(out);

    if let Some(path) = args.output {
        println!("produced {}.", path.display());
    }
    Ok(())
}
