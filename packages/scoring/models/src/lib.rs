#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Score and comparison report types.
//!
//! Plain data shared between the scoring crate and its callers. Every
//! report type serializes with `serde` so a shell can render it as text or
//! hand it off as JSON.

use part_compare_parts_models::WordSet;
use serde::{Deserialize, Serialize};

/// Placeholder `details` text for a comparison with nothing to compare.
pub const NOT_APPLICABLE: &str = "N/A";

/// A matched part number whose names failed the similarity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameMismatch {
    /// Part number present in both documents.
    pub part_number: String,
    /// Significant words of the reference name.
    pub reference_words: WordSet,
    /// Significant words of the candidate name.
    pub candidate_words: WordSet,
}

/// Result of scoring one candidate index against a reference index.
///
/// All accuracies are percentages in `0.0..=100.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Share of reference part numbers found in the candidate.
    pub part_number_accuracy: f64,
    /// Share of reference part numbers found with a matching name.
    pub name_accuracy: f64,
    /// Mean of the two accuracies.
    pub overall_score: f64,
    /// Human-readable summary, or [`NOT_APPLICABLE`].
    pub details: String,
    /// Number of reference part numbers in the candidate.
    pub matched_numbers: usize,
    /// Number of matched part numbers whose names also match.
    pub correct_names: usize,
    /// Number of unique reference part numbers.
    pub reference_parts: usize,
    /// Up to three name mismatches, in part-number order.
    pub mismatches: Vec<NameMismatch>,
}

impl ScoreResult {
    /// The all-zero result used when either side has no parts.
    #[must_use]
    pub fn not_applicable() -> Self {
        Self {
            part_number_accuracy: 0.0,
            name_accuracy: 0.0,
            overall_score: 0.0,
            details: NOT_APPLICABLE.to_string(),
            matched_numbers: 0,
            correct_names: 0,
            reference_parts: 0,
            mismatches: Vec::new(),
        }
    }

    /// Returns `true` if this is the placeholder result.
    #[must_use]
    pub fn is_not_applicable(&self) -> bool {
        self.details == NOT_APPLICABLE
    }
}

/// Text of a document, or the reason it could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentText {
    /// Document contents.
    Loaded(String),
    /// The document could not be obtained.
    Unavailable {
        /// Message describing the load failure.
        reason: String,
    },
}

/// A labelled document handed to the comparison layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Display label (e.g., `"Model 1"`).
    pub label: String,
    /// Contents or load failure.
    pub text: DocumentText,
}

impl Document {
    /// A document whose text was read successfully.
    #[must_use]
    pub fn loaded(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: DocumentText::Loaded(text.into()),
        }
    }

    /// A document that failed to load.
    #[must_use]
    pub fn unavailable(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: DocumentText::Unavailable {
                reason: reason.into(),
            },
        }
    }
}

/// Score of one candidate document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateReport {
    /// Candidate label.
    pub label: String,
    /// Number of unique part numbers extracted from the candidate.
    pub parts_found: usize,
    /// Score against the reference.
    pub score: ScoreResult,
}

/// What happened to one candidate in a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CandidateOutcome {
    /// The candidate was extracted and scored.
    Scored(CandidateReport),
    /// The candidate could not be loaded and was not scored.
    #[serde(rename_all = "camelCase")]
    LoadFailed {
        /// Candidate label.
        label: String,
        /// Load failure message.
        reason: String,
    },
}

impl CandidateOutcome {
    /// Candidate label regardless of outcome.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Scored(report) => &report.label,
            Self::LoadFailed { label, .. } => label,
        }
    }
}

/// Results of comparing every candidate against one reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    /// Reference label.
    pub reference_label: String,
    /// Number of unique part numbers extracted from the reference.
    pub reference_parts: usize,
    /// One outcome per candidate, in the order presented.
    pub candidates: Vec<CandidateOutcome>,
}
