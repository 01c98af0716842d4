// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! schedlog: reconstruct jobs and a queue timeline from AWR job scheduler logs.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod color;
mod commands;
mod discover;
mod env;
mod exit_error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{events, jobs, log_type, stats};
use crate::exit_error::ExitError;

#[derive(Parser)]
#[command(
    name = "schedlog",
    version = env::VERSION,
    about = "Reconstruct jobs and a queue timeline from AWR job scheduler logs",
    styles = color::styles(),
)]
struct Cli {
    /// Log unmatched lines, restarts and per-file summaries to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Hours east of UTC the logs were written in (default: local time)
    #[arg(long, global = true, value_name = "HOURS", allow_negative_numbers = true)]
    utc_offset: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct jobs and export one row per job
    Jobs(jobs::JobsArgs),
    /// Export the queued/running timeline
    Events(events::EventsArgs),
    /// Summary tables over an exported job table
    Stats(stats::StatsArgs),
    /// Classify logs as scheduler, local or compute
    LogType(log_type::LogTypeArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = env::log_filter().map_or_else(|| EnvFilter::new(default), EnvFilter::new);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Jobs(args) => jobs::handle(args, env::zone(cli.utc_offset)?),
        Commands::Events(args) => events::handle(args, env::zone(cli.utc_offset)?),
        Commands::Stats(args) => stats::handle(args),
        Commands::LogType(args) => log_type::handle(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        if let Some(exit) = err.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
