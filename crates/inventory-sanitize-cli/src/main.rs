use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use inventory_sanitize::ModelPaths;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "sanitize-inventory",
    about = "Coerce cost, price and hours fields in inventory.json to numbers and write vans.json",
    version
)]
struct Args {
    /// Directory holding inventory.json and vans.json
    /// (defaults to ../../Models relative to this executable)
    #[arg(long)]
    models_dir: Option<PathBuf>,

    /// Read the inventory from this file instead
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the sanitized document to this file instead
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn model_paths(&self) -> Result<ModelPaths> {
        let mut paths = match (&self.models_dir, &self.input, &self.output) {
            (Some(dir), _, _) => ModelPaths::in_dir(dir),
            (None, Some(input), Some(output)) => ModelPaths {
                input: input.clone(),
                output: output.clone(),
            },
            (None, _, _) => ModelPaths::from_current_exe()
                .context("failed to locate the Models directory")?,
        };
        if let Some(input) = &self.input {
            paths.input = input.clone();
        }
        if let Some(output) = &self.output {
            paths.output = output.clone();
        }
        Ok(paths)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let paths = args.model_paths()?;
    info!(input = %paths.input.display(), output = %paths.output.display(), "sanitizing inventory");

    inventory_sanitize::sanitize_file(&paths)
        .with_context(|| format!("failed to sanitize {}", paths.input.display()))?;

    println!("Wrote sanitized file to: {}", paths.output.display());
    Ok(())
}
