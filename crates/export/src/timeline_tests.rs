// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sl_core::test_support::LogBuilder;
use sl_core::{JobRegistry, ReconstructConfig};

fn reconstruct(log: &LogBuilder) -> JobRegistry {
    let mut reg = JobRegistry::with_config(ReconstructConfig { zone: Zone::utc() });
    reg.read_log_str("log", &log.build()).unwrap();
    reg
}

#[test]
fn event_table() {
    let log = LogBuilder::starting_at("2014-11-05T12:45:43")
        .found(1, "AXIEM")
        .submitted(1, "AXIEM:1.0", "ann")
        .wait(17)
        .started(1, "AXIEM:1.0", "sim01")
        .wait(60)
        .exit_status(1, "AXIEM:1.0", "0");
    let reg = reconstruct(&log);

    let mut out = Vec::new();
    write_timeline_csv(reg.timeline(), Zone::utc(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let expected = "\
date,time,type,running,queued,id
20141105 12:45:43,1415191543.0,queued,0,1,JOB0
20141105 12:46:00,1415191560.0,started,1,0,JOB0
20141105 12:47:00,1415191620.0,ended,0,0,JOB0
20141105 12:47:00,1415191620.0,shutdown,0,0,NA
";
    assert_eq!(text, expected);
}

#[test]
fn queue_input_offsets_from_first_submission() {
    let log = LogBuilder::new()
        .found(1, "AXIEM")
        .submitted(1, "AXIEM:1.0", "ann")
        .request(1, 4)
        .started(1, "AXIEM:1.0", "sim01")
        .working_set(1, "512MB")
        .wait(90)
        .releasing(1)
        .exit_status(1, "AXIEM:1.0", "0")
        .wait(30)
        .found(2, "mpiexec")
        .submitted(2, "mpiexec:2.0", "bob");
    let reg = reconstruct(&log);

    let mut out = Vec::new();
    write_queue_input(reg.timeline(), reg.jobs(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let expected = "\
At       0.00 sec. started AXIEM job with these attributes:
    A duration of 90 sec.
    Requiring 512 Mb of memory
    Requesting 1-4 processors

At     120.00 sec. started mpiexec job with these attributes:
    Job did not finish
    Requesting - processors

";
    assert_eq!(text, expected);
}

#[test]
fn empty_timeline_writes_header() {
    let mut out = Vec::new();
    write_timeline_csv(&Timeline::new(), Zone::utc(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "date,time,type,running,queued,id\n");
}
