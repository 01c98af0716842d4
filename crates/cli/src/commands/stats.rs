// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `schedlog stats`: summary tables over an exported job table.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sl_export::stats;

use crate::color::Painter;

#[derive(Args)]
pub struct StatsArgs {
    /// Job table written by `schedlog jobs --format csv`
    pub input: PathBuf,
    /// Only the overall column, no per-simulator breakdown
    #[arg(long)]
    pub no_sim_breakdown: bool,
}

pub fn handle(args: StatsArgs) -> Result<()> {
    let table = stats::read_and_validate(&args.input)
        .with_context(|| format!("reading job table '{}'", args.input.display()))?;
    print!("{}", render(&table, !args.no_sim_breakdown, Painter::detect()));
    Ok(())
}

/// The four report tables separated by blank lines, titles painted.
pub fn render(table: &stats::JobTable, sim_breakdown: bool, painter: Painter) -> String {
    [
        stats::jobs_by_type(table, sim_breakdown),
        stats::duration_stats(table, sim_breakdown),
        stats::wait_stats(table, sim_breakdown),
        stats::median_by_user(table, sim_breakdown),
    ]
    .iter()
    .map(|report| {
        let text = report.to_string();
        match text.split_once('\n') {
            Some((title, body)) => format!("{}\n{body}", painter.title(title)),
            None => text,
        }
    })
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
