use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::expect::{expected_outcome, Expectation};
use crate::schema::compile::{CompiledSchema, ErrorDetail};
use crate::schema::load::read_json;

/// Only files with this extension count as samples.
pub const SAMPLE_EXTENSION: &str = ".json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleResult {
    pub file_name: String,
    pub expected: Expectation,
    pub valid: bool,
    /// All validation errors for the sample; empty when it was valid.
    pub errors: Vec<ErrorDetail>,
}

impl SampleResult {
    /// The check passes when expectation and actual validity agree.
    pub fn check_passed(&self) -> bool {
        match self.expected {
            Expectation::Valid => self.valid,
            Expectation::Invalid => !self.valid,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub results: Vec<SampleResult>,
}

impl RunReport {
    pub fn mismatches(&self) -> usize {
        self.results.iter().filter(|r| !r.check_passed()).count()
    }

    pub fn success(&self) -> bool {
        self.mismatches() == 0
    }
}

/// Enumerate sample files in directory listing order. No sort: the order
/// only needs to be stable for a given filesystem state.
pub fn list_samples(samples_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(samples_dir)
        .with_context(|| format!("reading samples dir {}", samples_dir.display()))?;
    let mut samples = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let named_like_sample = path
            .file_name()
            .and_then(|f| f.to_str())
            .is_some_and(|n| n.ends_with(SAMPLE_EXTENSION));
        if named_like_sample && path.is_file() {
            samples.push(path);
        }
    }
    Ok(samples)
}

/// Validate every sample in `samples_dir` against the schema at
/// `schema_path` and compare each outcome with its filename-derived
/// expectation. A missing/malformed schema or a malformed sample aborts
/// the whole run; expectation mismatches do not.
pub fn run_samples(schema_path: &Path, samples_dir: &Path) -> Result<RunReport> {
    let schema = read_json(schema_path)?;
    let compiled = CompiledSchema::compile(&schema)
        .with_context(|| format!("compiling schema {}", schema_path.display()))?;

    let samples = list_samples(samples_dir)?;
    debug!(
        "checking {} samples against {}",
        samples.len(),
        schema_path.display()
    );

    let mut report = RunReport::default();
    for path in samples {
        let doc = read_json(&path)?;
        let errors = compiled.check(&doc);
        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        report.results.push(SampleResult {
            expected: expected_outcome(&file_name),
            valid: errors.is_empty(),
            errors,
            file_name,
        });
    }
    Ok(report)
}
