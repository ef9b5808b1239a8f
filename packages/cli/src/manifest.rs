//! TOML comparison manifests.
//!
//! A manifest names the reference document and the model outputs to score
//! against it, so a recurring evaluation does not need a long command line:
//!
//! ```toml
//! reference = "reference.json"
//!
//! [[models]]
//! path = "runs/gpt.json"
//! label = "GPT"
//!
//! [[models]]
//! path = "runs/local.json"
//! ```
//!
//! Relative paths are resolved against the manifest's own directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CliError;

/// Maximum number of candidate documents in one comparison.
pub const MAX_MODEL_SLOTS: usize = 6;

/// Raw manifest contents.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Reference document path.
    #[serde(default)]
    pub reference: Option<PathBuf>,
    /// Model output entries, in slot order.
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

/// One `[[models]]` entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelEntry {
    /// Model output path.
    pub path: PathBuf,
    /// Display label. Defaults to `Model N`.
    #[serde(default)]
    pub label: Option<String>,
}

/// A labelled candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSlot {
    /// Display label.
    pub label: String,
    /// Path to the model output.
    pub path: PathBuf,
}

/// Fully resolved set of documents to compare.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonPlan {
    /// Reference document path, if any was given.
    pub reference: Option<PathBuf>,
    /// Candidate documents in slot order.
    pub models: Vec<ModelSlot>,
}

impl Manifest {
    /// Reads and parses a manifest file, resolving its paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// manifest.
    pub async fn load(path: &Path) -> Result<ComparisonPlan, CliError> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CliError::ManifestIo {
                    path: path.to_path_buf(),
                    source,
                })?;

        let manifest = Self::parse(&content).map_err(|source| CliError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(manifest.resolve(base_dir))
    }

    /// Parses manifest TOML without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not a valid manifest.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolves relative paths against `base_dir` and fills default labels.
    #[must_use]
    pub fn resolve(self, base_dir: &Path) -> ComparisonPlan {
        let mut plan = ComparisonPlan {
            reference: self.reference.map(|p| base_dir.join(p)),
            models: Vec::with_capacity(self.models.len()),
        };

        for entry in self.models {
            let path = base_dir.join(entry.path);
            match entry.label {
                Some(label) => plan.models.push(ModelSlot { label, path }),
                None => plan.push_model(path),
            }
        }

        plan
    }
}

impl ComparisonPlan {
    /// Appends a candidate labelled by its slot number.
    pub fn push_model(&mut self, path: PathBuf) {
        let label = format!("Model {}", self.models.len() + 1);
        self.models.push(ModelSlot { label, path });
    }

    /// Applies command-line overrides: a reference replaces the manifest's,
    /// models are appended after the manifest's.
    #[must_use]
    pub fn with_overrides(mut self, reference: Option<PathBuf>, models: Vec<PathBuf>) -> Self {
        if reference.is_some() {
            self.reference = reference;
        }
        for path in models {
            self.push_model(path);
        }
        self
    }

    /// Checks that the plan fits in the available model slots.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::TooManyModels`] if more than
    /// [`MAX_MODEL_SLOTS`] candidates were requested.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.models.len() > MAX_MODEL_SLOTS {
            return Err(CliError::TooManyModels {
                count: self.models.len(),
                max: MAX_MODEL_SLOTS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_paths_against_manifest_directory() {
        let manifest = Manifest::parse(
            r#"
reference = "reference.json"

[[models]]
path = "runs/gpt.json"
label = "GPT"

[[models]]
path = "/abs/local.json"
"#,
        )
        .unwrap();

        let plan = manifest.resolve(Path::new("evals"));
        assert_eq!(plan.reference, Some(PathBuf::from("evals/reference.json")));
        assert_eq!(
            plan.models,
            vec![
                ModelSlot {
                    label: "GPT".to_string(),
                    path: PathBuf::from("evals/runs/gpt.json"),
                },
                ModelSlot {
                    label: "Model 2".to_string(),
                    path: PathBuf::from("/abs/local.json"),
                },
            ]
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Manifest::parse("referense = \"typo.json\"").is_err());
    }

    #[test]
    fn empty_manifest_has_no_reference() {
        let plan = Manifest::parse("").unwrap().resolve(Path::new("."));
        assert!(plan.reference.is_none());
        assert!(plan.models.is_empty());
    }

    #[test]
    fn command_line_overrides_reference_and_appends_models() {
        let plan = Manifest::parse("reference = \"old.json\"\n[[models]]\npath = \"a.json\"")
            .unwrap()
            .resolve(Path::new(""))
            .with_overrides(Some(PathBuf::from("new.json")), vec![PathBuf::from("b.json")]);

        assert_eq!(plan.reference, Some(PathBuf::from("new.json")));
        let labels: Vec<&str> = plan.models.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Model 1", "Model 2"]);
    }

    #[test]
    fn more_than_six_models_is_rejected() {
        let paths = (0..=MAX_MODEL_SLOTS)
            .map(|i| PathBuf::from(format!("model_{i}.json")))
            .collect();
        let plan = ComparisonPlan::default().with_overrides(None, paths);

        assert!(matches!(
            plan.validate(),
            Err(CliError::TooManyModels { count: 7, max: 6 })
        ));
    }

    #[test]
    fn six_models_fit() {
        let paths = (0..MAX_MODEL_SLOTS)
            .map(|i| PathBuf::from(format!("model_{i}.json")))
            .collect();
        let plan = ComparisonPlan::default().with_overrides(None, paths);
        assert!(plan.validate().is_ok());
    }
}
