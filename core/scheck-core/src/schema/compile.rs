use anyhow::{anyhow, Result};
use jsonschema::Validator;
use serde_json::Value;
use std::fmt;

/// One structured validation error: where in the document, which schema
/// keyword, and what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub instance_path: String,
    pub schema_path: String,
    pub message: String,
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path '{}': {} (schema: {})",
            self.instance_path, self.message, self.schema_path
        )
    }
}

/// A schema compiled once and reused read-only for every sample.
///
/// Unknown schema keywords are ignored rather than rejected; `format`
/// assertions (date, email, uri, ...) are enforced.
pub struct CompiledSchema {
    validator: Validator,
}

impl CompiledSchema {
    pub fn compile(schema: &Value) -> Result<Self> {
        let validator = jsonschema::options()
            .should_validate_formats(true)
            .build(schema)
            .map_err(|e| anyhow!("schema compile error: {e}"))?;
        Ok(Self { validator })
    }

    /// Collect every applicable error for a document, not just the first.
    /// An empty list means the document is schema-valid.
    pub fn check(&self, doc: &Value) -> Vec<ErrorDetail> {
        self.validator
            .iter_errors(doc)
            .map(|e| ErrorDetail {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }

    pub fn is_valid(&self, doc: &Value) -> bool {
        self.validator.is_valid(doc)
    }
}
