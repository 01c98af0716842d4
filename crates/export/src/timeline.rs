// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timeline exports: the event table and the queue replay script.

use std::io::Write;

use sl_core::time_fmt::float_str;
use sl_core::{EventKind, Job, Timeline, Zone};
use tracing::warn;

use crate::ExportError;

pub const TIMELINE_COLUMNS: [&str; 6] = ["date", "time", "type", "running", "queued", "id"];

/// `date,time,type,running,queued,id`, one row per event.
///
/// `date` is `20yymmdd HH:MM:SS`, `time` the raw epoch float, `id` `JOBn` or `NA`.
pub fn write_timeline_csv<W: Write>(
    timeline: &Timeline,
    zone: Zone,
    writer: W,
) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(TIMELINE_COLUMNS)?;
    for event in timeline {
        out.write_record([
            format!("20{}", zone.short_stamp(Some(event.time))),
            float_str(event.time),
            event.kind.to_string(),
            event.running.to_string(),
            event.queued.to_string(),
            event.job.map_or_else(|| "NA".to_string(), |id| id.to_string()),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Replay script: every submission as an offset from the first one, with
/// what the job went on to need.
pub fn write_queue_input<W: Write>(
    timeline: &Timeline,
    jobs: &[Job],
    mut writer: W,
) -> Result<(), ExportError> {
    let mut origin: Option<f64> = None;
    for event in timeline.iter().filter(|e| e.kind == EventKind::Queued) {
        let Some(job) = event.job.and_then(|id| jobs.get(id.index())) else {
            warn!(seq = event.seq, "queued event without a known job");
            continue;
        };
        let submitted = job.submitted.unwrap_or(event.time);
        let origin = *origin.get_or_insert(submitted);
        let sim = job.name.as_deref().and_then(|n| n.split(':').next()).unwrap_or_default();

        writeln!(
            writer,
            "At {:10.2} sec. started {sim} job with these attributes:",
            submitted - origin
        )?;
        match job.duration {
            Some(duration) => {
                writeln!(writer, "    A duration of {duration:.0} sec.")?;
                if let Some(mb) = job.working_set_mb {
                    writeln!(writer, "    Requiring {mb:.0} Mb of memory")?;
                }
            }
            None => writeln!(writer, "    Job did not finish")?,
        }
        writeln!(
            writer,
            "    Requesting {}-{} processors",
            job.request.min_processors.as_deref().unwrap_or_default(),
            job.request.max_processors.as_deref().unwrap_or_default()
        )?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
