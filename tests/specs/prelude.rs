// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: a scratch project directory and a fluent wrapper
//! around `assert_cmd` for running `schedlog`.

use std::path::{Path, PathBuf};
use std::process::Output;

pub use similar_asserts::assert_eq;

/// Two jobs a day apart: one runs to completion, one is cancelled in the queue.
pub const TWO_JOBS: &str = r#"2014-11-05T12:45:43.0000 - Starting Job Scheduler 12.0.6310
2014-11-05T12:45:43.0000 - Job 1: Found version 12.0.6310 for task id "AXIEM"
2014-11-05T12:45:43.0000 - Job 1: Submitted. Name="AXIEM:1.0", User="ann", Priority=1
2014-11-05T12:46:43.0000 - Job 1: started AXIEM:1.0, procId:0 on controller "sim01"
2014-11-05T12:56:43.0000 - Job 1: releasing 1 processors
2014-11-05T12:56:43.0000 - Job 1: (AXIEM:1.0) Ended. Exit status: 0
2014-11-06T09:00:00.0000 - Job 2: Found version 12.0.6310 for task id "mpiexec"
2014-11-06T09:00:00.0000 - Job 2: Submitted. Name="mpiexec:2.0", User="bob", Priority=1
2014-11-06T09:05:00.0000 - Job 2: Setting job to CANCELING state
"#;

pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` at `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    /// `schedlog` running inside the project directory.
    pub fn schedlog(&self) -> CliBuilder {
        let mut builder = cli();
        builder.cmd.current_dir(self.dir.path());
        builder
    }
}

/// `schedlog` with deterministic zone and logging.
pub fn cli() -> CliBuilder {
    let mut cmd = assert_cmd::Command::cargo_bin("schedlog").unwrap();
    cmd.env("TZ", "UTC")
        .env("NO_COLOR", "1")
        .env_remove("SCHEDLOG_LOG")
        .env_remove("SCHEDLOG_UTC_OFFSET");
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    fn run(mut self) -> RunAssert {
        RunAssert { output: self.cmd.output().unwrap() }
    }

    pub fn passes(self) -> RunAssert {
        let run = self.run();
        assert!(
            run.output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            run.output.status,
            run.stdout(),
            run.stderr()
        );
        run
    }

    pub fn fails(self) -> RunAssert {
        let run = self.run();
        assert!(!run.output.status.success(), "expected failure\nstdout:\n{}", run.stdout());
        run
    }

    pub fn code(self, code: i32) -> RunAssert {
        let run = self.run();
        assert_eq!(run.output.status.code(), Some(code), "stderr:\n{}", run.stderr());
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout lacks {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr lacks {needle:?}:\n{stderr}");
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout(), expected);
        self
    }
}
