// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `schedlog log-type`: decide which role the machine that wrote a log had.
//!
//! A scheduler log mentions a compute-type remote queue, a local log names
//! who started each job, and an explicit queue-type override wins when
//! neither appears. Anything else is a compute node.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use clap::Args;
use regex::Regex;

use crate::color::Painter;
use crate::output::thousands;

#[allow(clippy::expect_used)]
static SCHEDULER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Remote Queue.*Type=Compute").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static LOCAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Started By").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static OVERRIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"Queue Type Override set to: "(.*)""#).expect("constant regex pattern is valid")
});

const AUTOMATIC: &str = "Automatic";

#[derive(Args)]
pub struct LogTypeArgs {
    /// Log files to classify
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Print the lines that set each file's type
    #[arg(short, long)]
    pub debug: bool,
    /// Prefix the result with the file name even for a single file
    #[arg(short, long)]
    pub long: bool,
}

pub fn handle(args: LogTypeArgs) -> Result<()> {
    let long = args.long || args.files.len() > 1;
    let painter = Painter::detect();
    for file in &args.files {
        let bytes = std::fs::read(file).with_context(|| format!("could not open '{}'", file.display()))?;
        let scan = Classification::scan(&String::from_utf8_lossy(&bytes));
        print!("{}", paint_errors(&scan.report(&file.display().to_string(), args.debug, long), painter));
    }
    Ok(())
}

/// Highlight the `ERROR:` lines of a report.
pub fn paint_errors(report: &str, painter: Painter) -> String {
    report
        .split_inclusive('\n')
        .map(|line| match line.strip_suffix('\n') {
            Some(text) if text.starts_with("ERROR:") => format!("{}\n", painter.error(text)),
            _ => line.to_string(),
        })
        .collect()
}

/// What one pass over a log found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub lines: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    /// First line marking a scheduler log
    pub scheduler: Option<String>,
    /// First line marking a local log
    pub local: Option<String>,
    /// Latest non-automatic override
    pub override_type: Option<String>,
    /// `(from, to)` for every override that changed an earlier one
    pub override_changes: Vec<(String, String)>,
}

impl Classification {
    pub fn scan(text: &str) -> Self {
        let mut scan = Self::default();
        for line in text.lines() {
            scan.lines += 1;
            let line = line.trim();

            if line.len() > 10 && line.as_bytes().get(4) == Some(&b'-') {
                if let Some(date) = line.get(..10) {
                    if scan.first_date.as_deref().is_none_or(|d| date < d) {
                        scan.first_date = Some(date.to_string());
                    }
                    if scan.last_date.as_deref().is_none_or(|d| date > d) {
                        scan.last_date = Some(date.to_string());
                    }
                }
            }
            if scan.scheduler.is_none() && SCHEDULER.is_match(line) {
                scan.scheduler = Some(line.to_string());
            }
            if scan.local.is_none() && LOCAL.is_match(line) {
                scan.local = Some(line.to_string());
            }
            if let Some(caps) = OVERRIDE.captures(line) {
                let value = caps.get(1).map_or("", |m| m.as_str());
                if value == AUTOMATIC {
                    continue;
                }
                if let Some(previous) = scan.override_type.as_deref().filter(|p| !p.is_empty()) {
                    if !value.is_empty() && previous != value {
                        scan.override_changes.push((previous.to_string(), value.to_string()));
                    }
                }
                scan.override_type = Some(value.to_string());
            }
        }
        scan
    }

    fn override_label(&self) -> Option<String> {
        self.override_type.as_ref().map(|t| format!("{t} (via override)"))
    }

    /// `scheduler`, `local`, `<override> (via override)`, `compute`, or
    /// `unknown` when both scheduler and local markers are present.
    pub fn log_type(&self) -> String {
        match (&self.scheduler, &self.local) {
            (Some(_), Some(_)) => "unknown".to_string(),
            (Some(_), None) => "scheduler".to_string(),
            (None, Some(_)) => "local".to_string(),
            (None, None) => self.override_label().unwrap_or_else(|| "compute".to_string()),
        }
    }

    /// Disagreements between the markers, one block per conflict.
    pub fn conflicts(&self) -> Vec<String> {
        let mut out = Vec::new();
        let typ = self.override_type.as_deref();
        let label = self.override_label().unwrap_or_default();
        match (&self.scheduler, &self.local) {
            (Some(scheduler), Some(local)) => out.push(format!(
                "ERROR: Found definition for both scheduler and local types\n   {scheduler}\n   {local}"
            )),
            (Some(scheduler), None) => {
                if let Some(typ) = typ.filter(|t| *t != "Scheduler") {
                    out.push(format!(
                        "ERROR: Found definition for scheduler but override says {typ}\n   {scheduler}\n   {label}"
                    ));
                }
            }
            (None, Some(local)) => {
                if let Some(typ) = typ.filter(|t| *t != "Local") {
                    out.push(format!(
                        "ERROR: Found definition for local but override says {typ}\n   {local}\n   {label}"
                    ));
                }
            }
            (None, None) => {}
        }
        out
    }

    /// Text printed for one file.
    pub fn report(&self, file: &str, debug: bool, long: bool) -> String {
        let mut out = String::new();
        for (from, to) in &self.override_changes {
            let _ = writeln!(out, "File: {file}");
            let _ = writeln!(out, "ERROR: Log changed type override from {from} to {to}");
        }
        if debug {
            let _ = writeln!(out, "{file}");
            if let Some(line) = &self.scheduler {
                let _ = writeln!(out, "  Defined as job scheduler: {line}");
            }
            if let Some(line) = &self.local {
                let _ = writeln!(out, "  Defined as local: {line}");
            }
            if let Some(label) = self.override_label() {
                let _ = writeln!(out, "  Override set: {label}");
            }
            if self.scheduler.is_none() && self.local.is_none() && self.override_type.is_none() {
                let _ = writeln!(out, "  Default to compute");
            }
        }
        if long {
            let _ = write!(out, "{file} : ");
        }
        for conflict in self.conflicts() {
            let _ = writeln!(out, "\n{conflict}");
        }
        let _ = writeln!(
            out,
            "type = {}, {} lines from {} to {}",
            self.log_type(),
            thousands(self.lines),
            self.first_date.as_deref().unwrap_or("NA"),
            self.last_date.as_deref().unwrap_or("NA"),
        );
        out
    }
}

#[cfg(test)]
#[path = "log_type_tests.rs"]
mod tests;
