use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use scheck_core::run::run_samples;

#[derive(Parser)]
#[command(name="scheck", version, about="Validate sample JSON documents against a JSON Schema")]
struct Cli {
    /// Path to the JSON Schema document
    #[arg(long, default_value = "schema/config.schema.json")]
    schema: PathBuf,
    /// Directory of sample documents; names starting with `invalid_` are expected to fail
    #[arg(long, default_value = "schema/samples")]
    samples: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("schema={} samples={}", cli.schema.display(), cli.samples.display());

    let report = run_samples(&cli.schema, &cli.samples)?;

    for r in &report.results {
        if r.check_passed() {
            println!("OK:   {}", r.file_name);
        } else {
            eprintln!("FAIL: {}", r.file_name);
            for e in &r.errors {
                eprintln!("- {e}");
            }
        }
    }

    if !report.success() {
        std::process::exit(1);
    }
    Ok(())
}
