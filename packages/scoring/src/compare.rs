//! Reference-versus-candidates comparison runs.
//!
//! Builds the reference index once, then extracts and scores each candidate
//! independently. A candidate that failed to load is recorded and skipped so
//! the rest of the batch still runs.

use part_compare_parts::extract_index;
use part_compare_scoring_models::{
    CandidateOutcome, CandidateReport, ComparisonReport, Document, DocumentText,
};

use crate::score::score;

/// Errors that stop a comparison run before any candidate is scored.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// No reference document was supplied.
    #[error("No reference document supplied")]
    MissingReference,

    /// The reference document could not be loaded.
    #[error("Reference {label} could not be loaded: {reason}")]
    ReferenceUnavailable {
        /// Reference label.
        label: String,
        /// Load failure message.
        reason: String,
    },
}

/// Compares every candidate against `reference`.
///
/// Documents with no extractable parts are not errors: their part counts are
/// zero and their scores are the `"N/A"` placeholder.
///
/// # Errors
///
/// * [`CompareError::MissingReference`] if `reference` is `None`
/// * [`CompareError::ReferenceUnavailable`] if the reference failed to load
pub fn compare_documents(
    reference: Option<&Document>,
    candidates: &[Document],
) -> Result<ComparisonReport, CompareError> {
    let reference = reference.ok_or(CompareError::MissingReference)?;

    let reference_index = match &reference.text {
        DocumentText::Loaded(text) => extract_index(text),
        DocumentText::Unavailable { reason } => {
            return Err(CompareError::ReferenceUnavailable {
                label: reference.label.clone(),
                reason: reason.clone(),
            });
        }
    };

    log::info!(
        "{} contains {} unique part(s)",
        reference.label,
        reference_index.len()
    );

    let outcomes = candidates
        .iter()
        .map(|candidate| match &candidate.text {
            DocumentText::Loaded(text) => {
                let index = extract_index(text);
                let result = score(&reference_index, &index);
                log::info!(
                    "{}: {} part(s), overall score {:.1}%",
                    candidate.label,
                    index.len(),
                    result.overall_score
                );
                CandidateOutcome::Scored(CandidateReport {
                    label: candidate.label.clone(),
                    parts_found: index.len(),
                    score: result,
                })
            }
            DocumentText::Unavailable { reason } => {
                log::warn!("Skipping {}: {reason}", candidate.label);
                CandidateOutcome::LoadFailed {
                    label: candidate.label.clone(),
                    reason: reason.clone(),
                }
            }
        })
        .collect();

    Ok(ComparisonReport {
        reference_label: reference.label.clone(),
        reference_parts: reference_index.len(),
        candidates: outcomes,
    })
}
