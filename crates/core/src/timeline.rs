// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered lifecycle events with running/queued snapshots.

use serde::{Deserialize, Serialize};

use crate::error::UnknownEventKind;
use crate::job::JobId;

/// Lifecycle transition recorded on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Queued,
    Started,
    Ended,
    Cancelled,
    Terminated,
    Vanished,
    Shutdown,
}

crate::word_enum! {
    EventKind / UnknownEventKind {
        Queued => "queued",
        Started => "started",
        Ended => "ended",
        Cancelled => "cancelled",
        Terminated => "terminated",
        Vanished => "vanished",
        Shutdown => "shutdown",
    }
}

/// One transition plus the counters after applying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub seq: u64,
    pub time: f64,
    pub kind: EventKind,
    /// Absent only for `shutdown`
    pub job: Option<JobId>,
    pub queued: i64,
    pub running: i64,
}

/// Event log owning the live queued/running counters.
#[derive(Debug, Default, Clone)]
pub struct Timeline {
    events: Vec<Event>,
    queued: i64,
    running: i64,
    next_seq: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a job transition.
    pub fn record(&mut self, time: f64, kind: EventKind, job: JobId) -> &Event {
        self.push(time, kind, Some(job))
    }

    /// Scheduler stopped or restarted; both counters drop to zero.
    pub fn shutdown(&mut self, time: f64) -> &Event {
        self.push(time, EventKind::Shutdown, None)
    }

    fn push(&mut self, time: f64, kind: EventKind, job: Option<JobId>) -> &Event {
        match kind {
            EventKind::Queued => self.queued += 1,
            EventKind::Started => {
                self.queued -= 1;
                self.running += 1;
            }
            EventKind::Ended | EventKind::Terminated | EventKind::Vanished => self.running -= 1,
            EventKind::Cancelled => self.queued -= 1,
            EventKind::Shutdown => {
                self.queued = 0;
                self.running = 0;
            }
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.push(Event {
            seq,
            time,
            kind,
            job,
            queued: self.queued,
            running: self.running,
        });
        &self.events[self.events.len() - 1]
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn queued(&self) -> i64 {
        self.queued
    }

    pub fn running(&self) -> i64 {
        self.running
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
