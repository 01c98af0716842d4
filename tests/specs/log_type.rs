// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `schedlog log-type`: classify logs by the role of the machine that wrote them.

use crate::prelude::*;

const COMPUTE: &str = "\
2014-11-05T12:45:43.0000 - Starting Job Scheduler 12.0.6310
2014-11-05T12:45:44.0000 - Job 1: Submitted.
";

#[test]
fn single_file_short_form() {
    let project = Project::empty();
    project.file("AWR_JobScheduler.txt", TWO_JOBS);

    project
        .schedlog()
        .args(&["log-type", "AWR_JobScheduler.txt"])
        .passes()
        .stdout_eq("type = compute, 9 lines from 2014-11-05 to 2014-11-06\n");
}

#[test]
fn several_files_use_long_form() {
    let project = Project::empty();
    project.file("a.txt", COMPUTE);
    project.file("b.txt", "2014-12-01T00:00:00.0000 - Remote Queue 'q' Type=Compute\n");

    project.schedlog().args(&["log-type", "a.txt", "b.txt"]).passes().stdout_eq(
        "a.txt : type = compute, 2 lines from 2014-11-05 to 2014-11-05\n\
         b.txt : type = scheduler, 1 lines from 2014-12-01 to 2014-12-01\n",
    );
}

#[test]
fn debug_explains_the_default() {
    let project = Project::empty();
    project.file("a.txt", COMPUTE);

    project
        .schedlog()
        .args(&["log-type", "--debug", "a.txt"])
        .passes()
        .stdout_has("a.txt\n  Default to compute\n");
}

#[test]
fn missing_file_fails() {
    let project = Project::empty();
    project.schedlog().args(&["log-type", "gone.txt"]).fails().stderr_has("could not open 'gone.txt'");
}
