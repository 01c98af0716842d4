// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `schedlog stats`: reports over an exported job table.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn reports_on_exported_table() {
    let project = Project::empty();
    project.file("AWR_JobScheduler.txt", TWO_JOBS);
    project.schedlog().args(&["jobs", "AWR_JobScheduler.txt", "-o", "jobs.csv"]).passes();

    let run = project.schedlog().args(&["stats", "jobs.csv"]).passes();
    let stdout = run.stdout();
    assert!(stdout.starts_with("Jobs by Type\n"));
    assert!(stdout.contains("Queue Wait (min.)"));
    assert!(stdout.contains("Median Duration by User (min.)"));

    let header = stdout.lines().nth(1).unwrap();
    assert_eq!(header.split_whitespace().collect::<Vec<_>>(), vec!["Total", "AXIEM", "Analyst"]);
    let submitted = stdout.lines().find(|l| l.starts_with("Jobs Submitted")).unwrap();
    assert_eq!(submitted.split_whitespace().skip(2).collect::<Vec<_>>(), vec!["2", "1", "1"]);
    let longest = stdout.lines().find(|l| l.starts_with("Longest Job")).unwrap();
    assert!(longest.contains("10.00"));
}

#[test]
fn overall_only() {
    let project = Project::empty();
    project.file(
        "jobs.csv",
        "user,simulator,exit_code,duration_m,wait_m\nann,AXIEM,0,4.0,1.0\nann,AXIEM,0,6.0,3.0\n",
    );

    let expected = "\
Job Duration (min.)
                      Overall
Longest Job              6.00
Average Job Duration     5.00
Median Job Duration      5.00
";
    let run = project.schedlog().args(&["stats", "jobs.csv", "--no-sim-breakdown"]).passes();
    assert!(run.stdout().contains(expected), "{}", run.stdout());
}

#[test]
fn missing_column_is_reported() {
    let project = Project::empty();
    project.file("jobs.csv", "user,exit_code,duration_m\nann,0,1.0\n");

    project
        .schedlog()
        .args(&["stats", "jobs.csv"])
        .fails()
        .stderr_has("required column named simulator is missing");
}
