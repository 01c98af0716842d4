// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for log reconstruction.
//!
//! Only [`ReconstructError`] aborts ingestion. [`LineError`] and
//! [`LookupError`] describe a single log line that could not be applied;
//! the dispatcher logs them and moves on to the next line.

use std::path::PathBuf;
use thiserror::Error;

/// A log line that does not have the shape its marker promised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("unparseable timestamp {0:?}")]
    Timestamp(String),

    #[error("missing {separator:?} separator")]
    MissingSeparator { separator: &'static str },

    #[error("no job number in message")]
    MissingJobNumber,

    #[error("missing {0} in message")]
    MissingField(&'static str),
}

/// A message that references a job the registry does not know about.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("could not find job with number {0}")]
    NoSuchNumber(u32),

    #[error("could not find job matching uuid {0}")]
    NoSuchUuid(String),

    #[error("{count} jobs matched uuid {uuid}, should only be 1")]
    AmbiguousUuid { uuid: String, count: usize },
}

/// Failures that stop a reconstruction outright.
#[derive(Debug, Error)]
pub enum ReconstructError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two live jobs share a scheduler number; restart renumbering is broken.
    #[error("{count} live jobs share number {number} (line {line})")]
    DuplicateNumber { number: u32, count: usize, line: usize },
}

/// A timeline event kind outside the known transition vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown event type {0:?}")]
pub struct UnknownEventKind(pub String);
