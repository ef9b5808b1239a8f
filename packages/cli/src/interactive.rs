//! Interactive prompts for choosing the documents to compare.
//!
//! Walks the user through the reference file and up to six model output
//! files, one prompt per slot, without memorizing CLI flags.

use std::path::PathBuf;

use dialoguer::{Input, Select};

use crate::error::CliError;
use crate::manifest::{ComparisonPlan, MAX_MODEL_SLOTS};
use crate::render::OutputFormat;

/// Prompts for a reference path, model paths and an output format.
///
/// An empty reference leaves the plan without one. An empty model path ends
/// the model list early.
///
/// # Errors
///
/// Returns an error if the terminal prompt fails.
pub fn prompt_plan() -> Result<(ComparisonPlan, OutputFormat), CliError> {
    let mut plan = ComparisonPlan {
        reference: prompt_optional_path("Reference file (empty to skip)")?,
        models: Vec::new(),
    };

    for slot in 1..=MAX_MODEL_SLOTS {
        let Some(path) = prompt_optional_path(&format!("Model {slot} output (empty to finish)"))?
        else {
            break;
        };
        plan.push_model(path);
    }

    let formats = [OutputFormat::Text, OutputFormat::Json];
    let labels: Vec<String> = formats.iter().map(ToString::to_string).collect();
    let idx = Select::new()
        .with_prompt("Output format")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok((plan, formats[idx]))
}

fn prompt_optional_path(prompt: &str) -> Result<Option<PathBuf>, CliError> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(trimmed)))
    }
}
