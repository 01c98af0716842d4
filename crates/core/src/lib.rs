// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sl-core: job and timeline reconstruction from job scheduler logs

pub mod macros;

pub mod dispatch;
pub mod error;
pub mod hosts;
pub mod job;
pub mod registry;
pub mod time_fmt;
pub mod timeline;
pub mod units;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use dispatch::{classify, Action, Dispatcher, Rule, RULES};
pub use error::{LineError, LookupError, ReconstructError, UnknownEventKind};
pub use hosts::HostMap;
#[cfg(any(test, feature = "test-support"))]
pub use job::JobBuilder;
pub use job::{Disposition, Job, JobId, ResourceRequest};
pub use registry::{IngestSummary, JobRegistry, ReconstructConfig, SchedulerStart};
pub use time_fmt::{
    format_elapsed, interval_to_float_m, interval_to_string_m, parse_timestamp, Zone,
};
pub use timeline::{Event, EventKind, Timeline};
pub use units::memory_to_mb;
