// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turn command-line paths into the ordered list of logs to read.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Scheduler log names look like `AWR_JobScheduler_Log_2014-11-05.txt`.
pub fn is_log_file(name: &str) -> bool {
    let name = name.to_lowercase();
    name.starts_with("awr_jobscheduler") && name.ends_with(".txt")
}

/// Expand files and directories into log files, oldest first.
///
/// Files named explicitly are kept whatever their name; directories
/// contribute every scheduler log beneath them. Ties in modification time
/// keep argument order.
pub fn expand_file_list(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            let found = walk(input)?;
            debug!(dir = %input.display(), logs = found.len(), "expanded directory");
            files.extend(found);
        } else {
            bail!("could not open '{}'", input.display());
        }
    }

    let mut stamped = Vec::with_capacity(files.len());
    for file in files {
        let modified = std::fs::metadata(&file)
            .and_then(|m| m.modified())
            .with_context(|| format!("reading modification time of '{}'", file.display()))?;
        stamped.push((modified, file));
    }
    stamped.sort_by_key(|(modified, _)| *modified);
    Ok(stamped.into_iter().map(|(_, file)| file).collect())
}

fn walk(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/**/*", glob::Pattern::escape(&dir.to_string_lossy()));
    let mut found = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("bad directory path '{}'", dir.display()))? {
        let path = entry?;
        let named = path.file_name().and_then(|n| n.to_str()).is_some_and(is_log_file);
        if named && path.is_file() {
            found.push(path);
        }
    }
    Ok(found)
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
