#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for comparing model outputs against a reference.
//!
//! Reads a reference document and up to six model output documents,
//! extracts their part records, and prints per-model part-number and name
//! recall. Documents are named on the command line, in a TOML manifest, or
//! through interactive prompts.

mod error;
mod interactive;
mod load;
mod manifest;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use part_compare_scoring::{CompareError, compare_documents};

use crate::error::CliError;
use crate::manifest::{ComparisonPlan, Manifest};
use crate::render::OutputFormat;

#[derive(Parser)]
#[command(
    name = "part_compare",
    about = "Score model part-list outputs against a reference"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Reference document (overrides the manifest's reference)
    #[arg(long, short)]
    reference: Option<PathBuf>,

    /// Model output document; repeat for each model (up to six)
    #[arg(long = "model", short)]
    models: Vec<PathBuf>,

    /// TOML manifest listing the reference and model outputs
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose the reference and model files through prompts
    Interactive,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Err(e) => match comparison_message(&e) {
            Some(message) => {
                println!("{message}");
                std::process::exit(2);
            }
            None => Err(e.into()),
        },
        Ok(()) => Ok(()),
    }
}

/// Plain message for comparison failures that stop the run before any
/// model is scored.
fn comparison_message(err: &CliError) -> Option<String> {
    match err {
        CliError::Compare(CompareError::MissingReference) => {
            Some("Please select a reference file first.".to_string())
        }
        CliError::Compare(CompareError::ReferenceUnavailable { reason, .. }) => {
            Some(reason.clone())
        }
        _ => None,
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let (plan, format) = match cli.command {
        Some(Commands::Interactive) => interactive::prompt_plan()?,
        None => {
            let base = match &cli.manifest {
                Some(path) => Manifest::load(path).await?,
                None => ComparisonPlan::default(),
            };
            (base.with_overrides(cli.reference, cli.models), cli.format)
        }
    };
    plan.validate()?;

    log::info!(
        "Comparing {} model output(s) ({format} output)",
        plan.models.len()
    );

    let (reference, candidates) = load::load_plan(&plan).await;
    let report = compare_documents(reference.as_ref(), &candidates)?;

    println!("{}", render::render(&report, format)?);

    Ok(())
}
