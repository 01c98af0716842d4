// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `schedlog events`: timeline exports.

use crate::prelude::*;
use crate::prelude::assert_eq;

const TIMELINE: &str = "\
date,time,type,running,queued,id
20141105 12:45:43,1415191543.0,queued,0,1,JOB0
20141105 12:46:43,1415191603.0,started,1,0,JOB0
20141105 12:56:43,1415192203.0,ended,0,0,JOB0
20141106 09:00:00,1415264400.0,queued,0,1,JOB1
20141106 09:05:00,1415264700.0,cancelled,0,0,JOB1
20141106 09:05:00,1415264700.0,shutdown,0,0,NA
";

#[test]
fn timeline_written_to_file() {
    let project = Project::empty();
    project.file("AWR_JobScheduler.txt", TWO_JOBS);

    project
        .schedlog()
        .args(&["events", "AWR_JobScheduler.txt", "-o", "events.csv"])
        .passes()
        .stdout_eq("produced events.csv.\n");
    assert_eq!(project.read("events.csv"), TIMELINE);
}

#[test]
fn timeline_to_stdout_without_output() {
    let project = Project::empty();
    project.file("AWR_JobScheduler.txt", TWO_JOBS);

    project.schedlog().args(&["events", "AWR_JobScheduler.txt"]).passes().stdout_eq(TIMELINE);
}

#[test]
fn queue_input_replay() {
    let project = Project::empty();
    project.file("AWR_JobScheduler.txt", TWO_JOBS);

    let expected = "\
At       0.00 sec. started AXIEM job with these attributes:
    A duration of 600 sec.
    Requesting - processors

At   72857.00 sec. started mpiexec job with these attributes:
    Job did not finish
    Requesting - processors

";
    project
        .schedlog()
        .args(&["events", "AWR_JobScheduler.txt", "--format", "queue-input"])
        .passes()
        .stdout_eq(expected);
}

#[test]
fn empty_log_exits_one() {
    let project = Project::empty();
    project.file("AWR_JobScheduler.txt", "");

    project
        .schedlog()
        .args(&["events", "AWR_JobScheduler.txt"])
        .code(1)
        .stderr_has("No jobs found in log.");
}
