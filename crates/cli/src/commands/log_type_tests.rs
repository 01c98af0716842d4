// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

const SCHEDULER_LOG: &str = "\
2014-11-05T12:45:43.0000 - Starting Job Scheduler 12.0.6310
2014-11-05T12:45:44.0000 - Remote Queue 'sim01' Type=Compute
2014-11-07T08:00:00.0000 - Job 1: Submitted.
";

#[yare::parameterized(
    scheduler = { SCHEDULER_LOG, "scheduler" },
    local     = { "2014-11-05T12:45:43.0000 - Job 1: Started By ann\n", "local" },
    compute   = { "2014-11-05T12:45:43.0000 - Job 1: Submitted.\n", "compute" },
    override_ = { "2014-11-05T12:45:43.0000 - Queue Type Override set to: \"Compute\"\n", "Compute (via override)" },
    automatic = { "2014-11-05T12:45:43.0000 - Queue Type Override set to: \"Automatic\"\n", "compute" },
    both      = { "x - Started By ann\nx - Remote Queue q Type=Compute\n", "unknown" },
)]
fn classifies(text: &str, expected: &str) {
    assert_eq!(Classification::scan(text).log_type(), expected);
}

#[test]
fn counts_lines_and_date_range() {
    let scan = Classification::scan(SCHEDULER_LOG);
    assert_eq!(scan.lines, 3);
    assert_eq!(scan.first_date.as_deref(), Some("2014-11-05"));
    assert_eq!(scan.last_date.as_deref(), Some("2014-11-07"));
    assert!(scan.conflicts().is_empty());
}

#[test]
fn short_report() {
    let report = Classification::scan(SCHEDULER_LOG).report("a.txt", false, false);
    assert_eq!(report, "type = scheduler, 3 lines from 2014-11-05 to 2014-11-07\n");
}

#[test]
fn long_report_prefixes_file() {
    let report = Classification::scan("hello\n").report("a.txt", false, true);
    assert_eq!(report, "a.txt : type = compute, 1 lines from NA to NA\n");
}

#[test]
fn large_line_counts_use_separators() {
    let text = "x\n".repeat(1234);
    let report = Classification::scan(&text).report("a.txt", false, false);
    assert!(report.contains(", 1,234 lines"));
}

#[test]
fn debug_report_shows_defining_lines() {
    let report = Classification::scan(SCHEDULER_LOG).report("a.txt", true, false);
    let expected = "\
a.txt
  Defined as job scheduler: 2014-11-05T12:45:44.0000 - Remote Queue 'sim01' Type=Compute
type = scheduler, 3 lines from 2014-11-05 to 2014-11-07
";
    assert_eq!(report, expected);
}

#[test]
fn debug_report_defaults_to_compute() {
    let report = Classification::scan("x\n").report("a.txt", true, false);
    assert!(report.contains("  Default to compute\n"));
}

#[test]
fn override_disagreeing_with_marker_is_reported() {
    let text = "x - Remote Queue q Type=Compute\nx - Queue Type Override set to: \"Local\"\n";
    let scan = Classification::scan(text);
    assert_eq!(scan.log_type(), "scheduler");
    let report = scan.report("a.txt", false, true);
    let expected = "\
a.txt : 
ERROR: Found definition for scheduler but override says Local
   x - Remote Queue q Type=Compute
   Local (via override)
type = scheduler, 2 lines from NA to NA
";
    assert_eq!(report, expected);
}

#[test]
fn override_changes_are_reported() {
    let text = "\
x - Queue Type Override set to: \"Compute\"
x - Queue Type Override set to: \"Automatic\"
x - Queue Type Override set to: \"Scheduler\"
";
    let scan = Classification::scan(text);
    assert_eq!(scan.override_changes, vec![("Compute".to_string(), "Scheduler".to_string())]);
    assert_eq!(scan.log_type(), "Scheduler (via override)");
    assert!(scan.report("a.txt", false, false).starts_with(
        "File: a.txt\nERROR: Log changed type override from Compute to Scheduler\n"
    ));
}

#[test]
fn conflicting_markers_are_reported() {
    let scan = Classification::scan("x - Started By ann\nx - Remote Queue q Type=Compute\n");
    let conflicts = scan.conflicts();
    assert_eq!(conflicts.len(), 1);
    assert!(conflicts[0].starts_with("ERROR: Found definition for both scheduler and local types"));
}

#[test]
fn only_error_lines_are_painted() {
    let scan = Classification::scan("x - Started By ann\nx - Remote Queue q Type=Compute\n");
    let report = scan.report("a.txt", false, false);
    assert_eq!(paint_errors(&report, Painter::plain()), report);

    let painted = paint_errors(&report, Painter::forced());
    assert!(painted.contains("\x1b[38;5;167mERROR: Found definition for both"));
    assert!(painted.ends_with("type = unknown, 2 lines from NA to NA\n"));
}
