//! Test-only helpers for building package files and invoking the CLI.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Temporary working directory for CLI tests.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Run the `tracker` binary at `bin` with `args` from this directory.
    pub fn run(&self, bin: &str, args: &[&str]) -> Result<Output> {
        Command::new(bin)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .context("spawn tracker")
    }
}

/// Stdout of a finished command, split into lines.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
