use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a file and parse it as JSON. Used for the schema document and for
/// every sample; either failure is fatal to the run.
pub fn read_json(path: &Path) -> Result<Value> {
    let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let v: Value = serde_json::from_str(&s).with_context(|| format!("parsing {}", path.display()))?;
    Ok(v)
}
