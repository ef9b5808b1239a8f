//! Human-readable score summaries.

use std::fmt::Write as _;

use part_compare_parts_models::WordSet;
use part_compare_scoring_models::ScoreResult;

/// Formats the multi-line details block for a computed score.
///
/// ```text
/// Part Numbers: 3/4 (75.0%)
/// Correct Names: 2/4 (50.0%)
///
/// Sample Mismatches (first 3):
/// Part 1234567: Ref={'assembly', 'widget'} vs Model={'widget'}
/// ```
#[must_use]
pub fn details(result: &ScoreResult) -> String {
    let mut out = format!(
        "Part Numbers: {}/{} ({:.1}%)\nCorrect Names: {}/{} ({:.1}%)\n\nSample Mismatches (first 3):\n",
        result.matched_numbers,
        result.reference_parts,
        result.part_number_accuracy,
        result.correct_names,
        result.reference_parts,
        result.name_accuracy,
    );

    let lines: Vec<String> = result
        .mismatches
        .iter()
        .map(|m| {
            format!(
                "Part {}: Ref={} vs Model={}",
                m.part_number,
                format_word_set(&m.reference_words),
                format_word_set(&m.candidate_words),
            )
        })
        .collect();
    out.push_str(&lines.join("\n"));

    out
}

/// Renders a word set as `{'a', 'b'}`, or `set()` when empty.
#[must_use]
pub fn format_word_set(words: &WordSet) -> String {
    if words.is_empty() {
        return "set()".to_string();
    }

    let mut out = String::from("{");
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "'{word}'");
    }
    out.push('}');
    out
}
