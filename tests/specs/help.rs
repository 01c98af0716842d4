// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and usage output.

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("jobs")
        .stdout_has("events")
        .stdout_has("stats")
        .stdout_has("log-type");
}

#[test]
fn no_args_is_a_usage_error() {
    cli().code(2).stderr_has("Usage:");
}

#[test]
fn jobs_requires_an_input() {
    cli().args(&["jobs"]).code(2).stderr_has("<INPUTS>...");
}

#[test]
fn version_shows_package_version() {
    cli().args(&["--version"]).passes().stdout_has(env!("CARGO_PKG_VERSION"));
}
