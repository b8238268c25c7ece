//! Load sensor packages from TOML or JSON files.
//!
//! TOML files list packages as `[[package]]` tables. JSON files hold a bare
//! array of packages and are checked against the v1 packages schema before
//! deserialization.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::validator_for;
use serde::Deserialize;
use serde_json::Value;

use crate::dispatch::Package;

const V1_SCHEMA: &str = include_str!("../../../schemas/packages/v1.schema.json");

#[derive(Debug, Deserialize)]
struct PackageFile {
    #[serde(default, rename = "package")]
    packages: Vec<Package>,
}

/// Load packages from `path`, picking the parser from the file extension.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read packages {}", path.display()))?;
    let packages = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_toml(&contents),
        Some("json") => parse_json(&contents),
        _ => bail!(
            "unsupported package file {} (expected .toml or .json)",
            path.display()
        ),
    }
    .with_context(|| format!("parse packages {}", path.display()))?;
    if packages.is_empty() {
        bail!("package file {} contains no packages", path.display());
    }
    Ok(packages)
}

/// Parse `[[package]]` tables.
pub fn parse_toml(contents: &str) -> Result<Vec<Package>> {
    let file: PackageFile = toml::from_str(contents).context("parse toml")?;
    Ok(file.packages)
}

/// Parse a JSON array of packages after schema validation.
pub fn parse_json(contents: &str) -> Result<Vec<Package>> {
    let value: Value = serde_json::from_str(contents).context("parse json")?;
    validate_schema(&value)?;
    serde_json::from_value(value).context("deserialize packages")
}

fn validate_schema(instance: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(V1_SCHEMA).context("parse packages schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        bail!("schema validation failed:\n- {}", messages.join("\n- "));
    }
    Ok(())
}
