use std::path::PathBuf;

use part_compare_scoring::CompareError;

/// Errors from the comparison CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A manifest file could not be read.
    #[error("Failed to read manifest {path}: {source}")]
    ManifestIo {
        /// Manifest path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A manifest file is not valid TOML or has unexpected keys.
    #[error("Invalid manifest {path}: {source}")]
    ManifestParse {
        /// Manifest path.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// More candidate documents than there are model slots.
    #[error("Too many model outputs: {count} given, at most {max} supported")]
    TooManyModels {
        /// Number of models requested.
        count: usize,
        /// Number of model slots.
        max: usize,
    },

    /// The comparison could not run.
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive prompt failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
