// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host occupancy, used to detect jobs that finished without an exit message.

use std::collections::HashMap;

use crate::job::JobId;

/// Compute host → job believed to be running there.
#[derive(Debug, Default, Clone)]
pub struct HostMap {
    occupants: HashMap<String, JobId>,
}

impl HostMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `job` as the host's occupant, returning whoever was there before.
    pub fn occupy(&mut self, host: &str, job: JobId) -> Option<JobId> {
        self.occupants.insert(host.to_string(), job)
    }

    pub fn occupant(&self, host: &str) -> Option<JobId> {
        self.occupants.get(host).copied()
    }

    /// Drop the host entry if `job` is still its occupant.
    ///
    /// Unknown hosts and hosts already claimed by another job are left alone.
    pub fn release(&mut self, host: &str, job: JobId) -> bool {
        if self.occupant(host) == Some(job) {
            self.occupants.remove(host);
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, host: &str) -> Option<JobId> {
        self.occupants.remove(host)
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupy_returns_previous() {
        let mut hosts = HostMap::new();
        assert_eq!(hosts.occupy("sim01", JobId(1)), None);
        assert_eq!(hosts.occupy("sim01", JobId(2)), Some(JobId(1)));
        assert_eq!(hosts.occupant("sim01"), Some(JobId(2)));
    }

    #[test]
    fn release_only_by_current_occupant() {
        let mut hosts = HostMap::new();
        hosts.occupy("sim01", JobId(2));
        assert!(!hosts.release("sim01", JobId(1)));
        assert_eq!(hosts.occupant("sim01"), Some(JobId(2)));
        assert!(hosts.release("sim01", JobId(2)));
        assert!(hosts.is_empty());
    }

    #[test]
    fn unknown_host_is_a_no_op() {
        let mut hosts = HostMap::new();
        assert!(!hosts.release("nowhere", JobId(0)));
        assert_eq!(hosts.remove("nowhere"), None);
        assert_eq!(hosts.len(), 0);
    }
}
