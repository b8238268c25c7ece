//! Tracker configuration stored in `tracker.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::report::OutputFormat;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "tracker.toml";

/// Tracker configuration (TOML).
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Report line format when `--format` is not given.
    pub format: OutputFormat,

    /// What a batch does when a package carries an unknown workout code.
    pub on_unknown: UnknownPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPolicy {
    /// Stop the batch with an error.
    #[default]
    Fail,
    /// Print a diagnostic and continue with the next package.
    Skip,
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `TrackerConfig::default()`.
pub fn load_config(path: &Path) -> Result<TrackerConfig> {
    if !path.exists() {
        return Ok(TrackerConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &TrackerConfig) -> Result<()> {
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
