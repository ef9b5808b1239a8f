//! Two-factor recall scoring.
//!
//! A candidate is judged on how many reference part numbers it found and on
//! how many of those it also named correctly. Both ratios use the reference
//! part count as the denominator, so a candidate that misses numbers loses
//! on both axes.

use part_compare_parts_models::{NormalizedIndex, WordSet};
use part_compare_scoring_models::{NameMismatch, ScoreResult};

use crate::report;

/// Minimum share of reference words the candidate name must contain.
pub const NAME_MATCH_THRESHOLD: f64 = 0.5;

/// Number of name mismatches kept for the details report.
pub const MAX_SAMPLE_MISMATCHES: usize = 3;

/// Returns `true` if at least half of the reference words appear in the
/// candidate words.
///
/// Extra candidate words are ignored. An empty set on either side never
/// matches.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn names_match(reference_words: &WordSet, candidate_words: &WordSet) -> bool {
    if reference_words.is_empty() || candidate_words.is_empty() {
        return false;
    }

    let common = reference_words.intersection(candidate_words).count();
    common as f64 / reference_words.len() as f64 >= NAME_MATCH_THRESHOLD
}

/// Scores `candidate` against `reference`.
///
/// Returns [`ScoreResult::not_applicable`] when either index is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(reference: &NormalizedIndex, candidate: &NormalizedIndex) -> ScoreResult {
    if reference.is_empty() || candidate.is_empty() {
        return ScoreResult::not_applicable();
    }

    let reference_parts = reference.len();
    let mut matched_numbers = 0_usize;
    let mut correct_names = 0_usize;
    let mut mismatches = Vec::new();

    for (number, reference_words) in reference.iter() {
        let Some(candidate_words) = candidate.get(number) else {
            continue;
        };
        matched_numbers += 1;

        if names_match(reference_words, candidate_words) {
            correct_names += 1;
        } else if mismatches.len() < MAX_SAMPLE_MISMATCHES {
            mismatches.push(NameMismatch {
                part_number: number.to_string(),
                reference_words: reference_words.clone(),
                candidate_words: candidate_words.clone(),
            });
        }
    }

    let part_number_accuracy = matched_numbers as f64 / reference_parts as f64 * 100.0;
    let name_accuracy = correct_names as f64 / reference_parts as f64 * 100.0;
    let overall_score = (part_number_accuracy + name_accuracy) / 2.0;

    let mut result = ScoreResult {
        part_number_accuracy,
        name_accuracy,
        overall_score,
        details: String::new(),
        matched_numbers,
        correct_names,
        reference_parts,
        mismatches,
    };
    result.details = report::details(&result);
    result
}
