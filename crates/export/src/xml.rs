// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spreadsheet-friendly XML job list.

use std::io::Write;

use sl_core::{Job, Zone};

use crate::jobs::{job_row, JOB_COLUMNS};
use crate::ExportError;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// `<Jobs>` root with one `<Job id="JOBn">` per job and one child per table column.
pub fn write_jobs_xml<W: Write>(jobs: &[Job], zone: Zone, mut writer: W) -> Result<(), ExportError> {
    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(writer, "<Jobs>")?;
    for job in jobs {
        writeln!(writer, r#"  <Job id="{}">"#, job.id)?;
        for (column, value) in JOB_COLUMNS.iter().zip(job_row(job, zone)) {
            if value.is_empty() {
                writeln!(writer, "    <{column}/>")?;
            } else {
                writeln!(writer, "    <{column}>{}</{column}>", escape(&value))?;
            }
        }
        writeln!(writer, "  </Job>")?;
    }
    writeln!(writer, "</Jobs>")?;
    writer.flush()?;
    Ok(())
}
