// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate reports over an exported job table.
//!
//! Input is the CSV written by [`crate::write_jobs_csv`] (or anything with
//! at least the `simulator`, `exit_code`, `duration_m` and `user` columns).
//! Each report is a [`StatTable`] with an overall column and, optionally,
//! one column per simulator.

use std::collections::BTreeSet;
use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::ExportError;

const REQUIRED: [&str; 4] = ["simulator", "exit_code", "duration_m", "user"];

/// The columns of one exported job that statistics look at.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRow {
    pub simulator: String,
    pub exit_code: String,
    pub duration_m: Option<f64>,
    pub wait_m: Option<f64>,
    pub user: String,
}

impl JobRow {
    fn succeeded(&self) -> bool {
        self.exit_code == "0" && self.duration_m.is_some_and(|d| d > 0.0)
    }
}

/// Parsed job table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobTable {
    pub rows: Vec<JobRow>,
}

/// Read a job table from disk, failing if a required column is absent.
pub fn read_and_validate(path: impl AsRef<Path>) -> Result<JobTable, ExportError> {
    let file = std::fs::File::open(path)?;
    read_table(file)
}

/// Like [`read_and_validate`] for any reader.
pub fn read_table<R: Read>(reader: R) -> Result<JobTable, ExportError> {
    let mut input = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = input.headers()?.clone();
    let index = |name: &'static str| headers.iter().position(|h| h.trim() == name);
    let [simulator, exit_code, duration_m, user] = {
        let mut found = [0usize; 4];
        for (slot, name) in found.iter_mut().zip(REQUIRED) {
            *slot = index(name).ok_or(ExportError::MissingColumn(name))?;
        }
        found
    };
    let wait_m = index("wait_m");

    let mut rows = Vec::new();
    for record in input.records() {
        let record = record?;
        let text = |i: usize| record.get(i).unwrap_or_default().trim().to_string();
        let minutes = |i: usize| record.get(i).and_then(|v| v.trim().parse::<f64>().ok()).filter(|v| v.is_finite());
        rows.push(JobRow {
            simulator: text(simulator),
            exit_code: text(exit_code),
            duration_m: minutes(duration_m),
            wait_m: wait_m.and_then(minutes),
            user: text(user),
        });
    }
    Ok(JobTable { rows })
}

/// A report cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Count(usize),
    /// Minutes; `None` when there was nothing to aggregate
    Minutes(Option<f64>),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Count(n) => write!(f, "{n}"),
            Cell::Minutes(Some(m)) => write!(f, "{m:.2}"),
            Cell::Minutes(None) => f.write_str("NaN"),
        }
    }
}

/// Labelled rows under named columns, printable as an aligned text table.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<(String, Vec<Cell>)>,
}

impl StatTable {
    fn new(title: &str, first: &str, simulators: &[String]) -> Self {
        let mut columns = vec![first.to_string()];
        columns.extend(simulators.iter().cloned());
        Self { title: title.to_string(), columns, rows: Vec::new() }
    }

    pub fn row(&self, label: &str) -> Option<&[Cell]> {
        self.rows.iter().find(|(l, _)| l == label).map(|(_, cells)| cells.as_slice())
    }

    pub fn cell(&self, label: &str, column: &str) -> Option<Cell> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.row(label)?.get(index).copied()
    }
}

impl fmt::Display for StatTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> =
            self.rows.iter().map(|(_, r)| r.iter().map(ToString::to_string).collect()).collect();
        let label_width = self.rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| cells.iter().filter_map(|r| r.get(i)).map(String::len).fold(c.len(), usize::max))
            .collect();

        writeln!(f, "{}", self.title)?;
        write!(f, "{:label_width$}", "")?;
        for (column, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {column:>width$}")?;
        }
        writeln!(f)?;
        for ((label, _), row) in self.rows.iter().zip(&cells) {
            write!(f, "{label:<label_width$}")?;
            for (value, width) in row.iter().zip(&widths) {
                write!(f, "  {value:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Sorted distinct non-empty simulator names.
pub fn sim_list(table: &JobTable) -> Vec<String> {
    let set: BTreeSet<&str> =
        table.rows.iter().map(|r| r.simulator.as_str()).filter(|s| !s.is_empty()).collect();
    set.into_iter().map(str::to_string).collect()
}

fn simulators(table: &JobTable, sim_breakdown: bool) -> Vec<String> {
    if sim_breakdown {
        sim_list(table)
    } else {
        Vec::new()
    }
}

fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

fn mean(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 0 { (sorted[mid - 1] + sorted[mid]) / 2.0 } else { sorted[mid] })
}

/// One row per aggregate, computed over all rows and then per simulator.
fn minute_rows<'a>(
    table: &mut StatTable,
    rows: &[&'a JobRow],
    simulators: &[String],
    value: impl Fn(&'a JobRow) -> Option<f64>,
    stats: &[(&str, fn(&[f64]) -> Option<f64>)],
) {
    let collect = |sim: Option<&str>| -> Vec<f64> {
        rows.iter()
            .filter(|r| sim.is_none_or(|s| r.simulator == s))
            .filter_map(|r| value(*r))
            .collect()
    };
    let overall = collect(None);
    let per_sim: Vec<Vec<f64>> = simulators.iter().map(|s| collect(Some(s))).collect();
    for (label, stat) in stats {
        let mut cells = vec![Cell::Minutes(stat(&overall))];
        cells.extend(per_sim.iter().map(|v| Cell::Minutes(stat(v))));
        table.rows.push((label.to_string(), cells));
    }
}

/// Job counts by how they ended.
pub fn jobs_by_type(table: &JobTable, sim_breakdown: bool) -> StatTable {
    const KNOWN: [&str; 4] = ["0", "cancelled", "shutdown", "host_reassigned"];
    let simulators = simulators(table, sim_breakdown);
    let mut out = StatTable::new("Jobs by Type", "Total", &simulators);

    let groups: [(&str, fn(&JobRow) -> bool); 6] = [
        ("Jobs Submitted", |_| true),
        ("Completed Successfully", |r| r.exit_code == "0"),
        ("Cancelled by User", |r| r.exit_code == "cancelled"),
        ("Host Reassigned", |r| r.exit_code == "host_reassigned"),
        ("Scheduler Shutdown", |r| r.exit_code == "shutdown"),
        ("Other Disposition", |r| !KNOWN.contains(&r.exit_code.as_str())),
    ];
    for (label, keep) in groups {
        let rows: Vec<&JobRow> = table.rows.iter().filter(|r| keep(*r)).collect();
        let mut cells = vec![Cell::Count(rows.len())];
        cells.extend(
            simulators.iter().map(|s| Cell::Count(rows.iter().filter(|r| &r.simulator == s).count())),
        );
        out.rows.push((label.to_string(), cells));
    }
    out
}

/// Longest, mean and median duration over jobs that have one.
pub fn duration_stats(table: &JobTable, sim_breakdown: bool) -> StatTable {
    let simulators = simulators(table, sim_breakdown);
    let mut out = StatTable::new("Job Duration (min.)", "Overall", &simulators);
    let rows: Vec<&JobRow> = table.rows.iter().filter(|r| r.duration_m.is_some()).collect();
    minute_rows(
        &mut out,
        &rows,
        &simulators,
        |r| r.duration_m,
        &[("Longest Job", max), ("Average Job Duration", mean), ("Median Job Duration", median)],
    );
    out
}

/// Longest, mean and median queue wait over jobs that were not cancelled.
pub fn wait_stats(table: &JobTable, sim_breakdown: bool) -> StatTable {
    let simulators = simulators(table, sim_breakdown);
    let mut out = StatTable::new("Queue Wait (min.)", "Overall", &simulators);
    let rows: Vec<&JobRow> = table.rows.iter().filter(|r| r.exit_code != "cancelled").collect();
    minute_rows(
        &mut out,
        &rows,
        &simulators,
        |r| r.wait_m,
        &[("Longest Wait", max), ("Average Wait", mean), ("Median Wait", median)],
    );
    out
}

/// Median duration of successful jobs, one row per user.
pub fn median_by_user(table: &JobTable, sim_breakdown: bool) -> StatTable {
    let simulators = simulators(table, sim_breakdown);
    let mut out = StatTable::new("Median Duration by User (min.)", "Overall", &simulators);
    let succeeded: Vec<&JobRow> = table.rows.iter().filter(|r| r.succeeded()).collect();
    let users: BTreeSet<&str> = succeeded.iter().map(|r| r.user.as_str()).collect();
    for user in users {
        let rows: Vec<&JobRow> = succeeded.iter().copied().filter(|r| r.user == user).collect();
        minute_rows(&mut out, &rows, &simulators, |r| r.duration_m, &[(user, median)]);
    }
    out
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
