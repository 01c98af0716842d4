// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exporters for reconstructed jobs and timelines, plus statistics over
//! an exported job table.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod error;
mod jobs;
mod record;
pub mod stats;
mod timeline;
mod xml;

pub use error::ExportError;
pub use jobs::{job_row, write_jobs_csv, JOB_COLUMNS};
pub use record::{write_jobs_json, JobRecord};
pub use timeline::{write_queue_input, write_timeline_csv, TIMELINE_COLUMNS};
pub use xml::write_jobs_xml;
