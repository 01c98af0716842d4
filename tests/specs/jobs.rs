// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `schedlog jobs`: reconstruction and job-table export.

use crate::prelude::*;
use crate::prelude::assert_eq;

const FIRST_ROW: &str =
    "2014-11-05,12,Wednesday,2014-11-05,12,Wednesday,10.0,1.0,ann,AXIEM,sim01,,1,,,,,,0,NA,,12";

#[test]
fn exports_csv_and_reports_span() {
    let project = Project::empty();
    project.file("AWR_JobScheduler.txt", TWO_JOBS);

    project
        .schedlog()
        .args(&["jobs", "AWR_JobScheduler.txt", "-o", "jobs.csv"])
        .passes()
        .stdout_eq("produced jobs.csv containing 2 jobs from 2014-11-05 to 2014-11-06.\n");

    let csv = project.read("jobs.csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("submitted_date,submitted_time,submitted_day,"));
    assert_eq!(lines[1], FIRST_ROW);
    assert!(lines[2].contains("bob,Analyst"));
    assert!(lines[2].contains(",cancelled,"));
}

#[test]
fn without_output_prints_only_the_summary() {
    let project = Project::empty();
    project.file("AWR_JobScheduler.txt", TWO_JOBS);

    project
        .schedlog()
        .args(&["jobs", "AWR_JobScheduler.txt"])
        .passes()
        .stdout_eq("found 2 jobs from 2014-11-05 to 2014-11-06.\n");
}

#[test]
fn directory_inputs_are_searched() {
    let project = Project::empty();
    project.file("logs/AWR_JobScheduler_1.txt", TWO_JOBS);
    project.file("logs/notes.txt", "not a log\n");

    project.schedlog().args(&["jobs", "logs"]).passes().stdout_has("found 2 jobs");
}

#[test]
fn json_records_use_null_for_unknown_minutes() {
    let project = Project::empty();
    project.file("AWR_JobScheduler.txt", TWO_JOBS);

    project
        .schedlog()
        .args(&["jobs", "AWR_JobScheduler.txt", "-o", "jobs.json", "--format", "json"])
        .passes();

    let value: serde_json::Value = serde_json::from_str(&project.read("jobs.json")).unwrap();
    assert_eq!(value[0]["user"], "ann");
    assert_eq!(value[0]["duration_m"], 10.0);
    assert!(value[1]["duration_m"].is_null());
    assert_eq!(value[1]["exit"], "cancelled");
}

#[test]
fn xml_has_one_element_per_job() {
    let project = Project::empty();
    project.file("AWR_JobScheduler.txt", TWO_JOBS);

    project
        .schedlog()
        .args(&["jobs", "AWR_JobScheduler.txt", "-o", "jobs.xml", "--format", "xml"])
        .passes();

    let xml = project.read("jobs.xml");
    assert!(xml.contains(r#"<Job id="JOB0">"#));
    assert!(xml.contains(r#"<Job id="JOB1">"#));
    assert!(xml.contains("<user>ann</user>"));
}

#[test]
fn utc_offset_shifts_dates() {
    let project = Project::empty();
    project.file("AWR_JobScheduler.txt", TWO_JOBS);

    // Reading the same wall-clock stamps as UTC-8 and writing them back in
    // the same zone leaves the calendar dates unchanged.
    project
        .schedlog()
        .args(&["--utc-offset=-8", "jobs", "AWR_JobScheduler.txt"])
        .passes()
        .stdout_eq("found 2 jobs from 2014-11-05 to 2014-11-06.\n");
}

#[test]
fn empty_log_exits_one() {
    let project = Project::empty();
    project.file("AWR_JobScheduler.txt", "2014-11-05T12:45:43.0000 - Processing Command Line\n");

    project
        .schedlog()
        .args(&["jobs", "AWR_JobScheduler.txt"])
        .code(1)
        .stderr_has("No jobs found in log.");
}

#[test]
fn missing_input_fails() {
    let project = Project::empty();
    project.schedlog().args(&["jobs", "nope.txt"]).fails().stderr_has("could not open 'nope.txt'");
}

#[test]
fn verbose_logs_unmatched_lines() {
    let project = Project::empty();
    let mut log = TWO_JOBS.to_string();
    log.push_str("2014-11-06T09:06:00.0000 - Something nobody parses\n");
    project.file("AWR_JobScheduler.txt", &log);

    project
        .schedlog()
        .args(&["-v", "jobs", "AWR_JobScheduler.txt"])
        .passes()
        .stderr_has("unmatched");
}
