//! Part name normalization.
//!
//! Turns raw part names into order-independent sets of significant words so
//! that "Widget Assembly, Complete" and "assembly - widget" compare equal on
//! the words they share. Applied identically to reference and candidate
//! documents.

use part_compare_parts_models::{NormalizedIndex, RawRecord, WordSet};

/// Tokens must be longer than this many characters to be significant.
const MIN_WORD_CHARS: usize = 2;

/// Builds a [`NormalizedIndex`] from extracted records.
///
/// Records with an empty part number or name (after trimming) are skipped.
/// When a part number occurs more than once, the last record wins; word
/// sets are never merged.
#[must_use]
pub fn normalize(records: &[RawRecord]) -> NormalizedIndex {
    let mut index = NormalizedIndex::new();

    for record in records {
        let number = record.part_number.trim();
        let name = record.part_name.trim();
        if number.is_empty() || name.is_empty() {
            continue;
        }

        if index.insert(number, significant_words(name)).is_some() {
            log::trace!("Part {number} seen again, keeping the later name");
        }
    }

    index
}

/// Splits a part name into its significant words.
///
/// The pipeline:
/// 1. Lowercase
/// 2. Replace everything that is not alphanumeric or whitespace with a space
/// 3. Split on whitespace
/// 4. Keep tokens longer than two characters that are not purely numeric
#[must_use]
pub fn significant_words(name: &str) -> WordSet {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| is_significant(token))
        .map(str::to_string)
        .collect()
}

fn is_significant(token: &str) -> bool {
    token.chars().count() > MIN_WORD_CHARS && !token.chars().all(char::is_numeric)
}
