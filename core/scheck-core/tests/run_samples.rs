use std::fs;
use std::path::PathBuf;

use scheck_core::run::run_samples;
use tempfile::TempDir;

const CONFIG_SCHEMA: &str = r#"{
    "$schema": "https://json-schema.org/draft/2020-12/schema",
    "type": "object",
    "properties": {
        "name": { "type": "string" },
        "contact": { "type": "string", "format": "email" },
        "homepage": { "type": "string", "format": "uri" }
    },
    "required": ["name"],
    "additionalProperties": false
}"#;

fn write_tree(samples: &[(&str, &str)]) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let schema_path = dir.path().join("config.schema.json");
    fs::write(&schema_path, CONFIG_SCHEMA).unwrap();
    let samples_dir = dir.path().join("samples");
    fs::create_dir(&samples_dir).unwrap();
    for (name, body) in samples {
        fs::write(samples_dir.join(name), body).unwrap();
    }
    (dir, schema_path, samples_dir)
}

#[test]
fn mixed_sample_set_end_to_end() {
    let (_dir, schema, samples) = write_tree(&[
        ("valid_minimal.json", r#"{"name": "svc"}"#),
        (
            "valid_full.json",
            r#"{"name": "svc", "contact": "ops@example.com", "homepage": "https://example.com"}"#,
        ),
        ("invalid_missing_name.json", r#"{"contact": "ops@example.com"}"#),
        ("invalid_bad_email.json", r#"{"name": "svc", "contact": "nope"}"#),
        ("invalid_extra_field.json", r#"{"name": "svc", "admin": true}"#),
    ]);

    let report = run_samples(&schema, &samples).unwrap();
    assert_eq!(report.results.len(), 5);
    assert_eq!(report.mismatches(), 0);
    assert!(report.success());
    assert!(report.results.iter().all(|r| r.check_passed()));
}

#[test]
fn mismatches_are_counted_and_fail_the_run() {
    let (_dir, schema, samples) = write_tree(&[
        ("valid_ok.json", r#"{"name": "svc"}"#),
        // Named invalid but actually conforms.
        ("invalid_actually_fine.json", r#"{"name": "svc"}"#),
        // Named valid but missing the required property.
        ("valid_actually_broken.json", r#"{}"#),
    ]);

    let report = run_samples(&schema, &samples).unwrap();
    assert_eq!(report.mismatches(), 2);
    assert!(!report.success());

    let broken = report
        .results
        .iter()
        .find(|r| r.file_name == "valid_actually_broken.json")
        .unwrap();
    assert!(!broken.errors.is_empty());

    let fine = report
        .results
        .iter()
        .find(|r| r.file_name == "invalid_actually_fine.json")
        .unwrap();
    assert!(fine.errors.is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let (_dir, schema, samples) = write_tree(&[
        ("valid_minimal.json", r#"{"name": "svc"}"#),
        ("invalid_missing_name.json", "{}"),
        ("invalid_actually_fine.json", r#"{"name": "svc"}"#),
    ]);

    let first = run_samples(&schema, &samples).unwrap();
    let second = run_samples(&schema, &samples).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.success(), second.success());
}
