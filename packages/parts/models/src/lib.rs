#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared types for part record extraction and normalization.
//!
//! This crate contains only data types and simple accessors. It has no
//! regex or I/O dependencies, so the scoring layer and the CLI can depend
//! on it without pulling in the extractor.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A set of significant words taken from a part name.
///
/// Ordered so that reports render the same way on every run.
pub type WordSet = BTreeSet<String>;

/// A part number paired with the raw name text found before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Seven or eight ASCII digits.
    pub part_number: String,
    /// Name text as it appeared in the document, trimmed of whitespace and
    /// surrounding quotes but otherwise untouched.
    pub part_name: String,
}

impl RawRecord {
    /// Creates a record from anything string-like.
    #[must_use]
    pub fn new(part_number: impl Into<String>, part_name: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            part_name: part_name.into(),
        }
    }
}

/// Mapping from part number to the significant words of its name.
///
/// Holds at most one word set per part number. Iteration is in ascending
/// part-number order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedIndex {
    parts: BTreeMap<String, WordSet>,
}

impl NormalizedIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parts: BTreeMap::new(),
        }
    }

    /// Stores `words` for `part_number`, returning the word set it
    /// replaced, if any.
    pub fn insert(&mut self, part_number: impl Into<String>, words: WordSet) -> Option<WordSet> {
        self.parts.insert(part_number.into(), words)
    }

    /// Returns the word set for `part_number`.
    #[must_use]
    pub fn get(&self, part_number: &str) -> Option<&WordSet> {
        self.parts.get(part_number)
    }

    /// Returns `true` if `part_number` has an entry.
    #[must_use]
    pub fn contains(&self, part_number: &str) -> bool {
        self.parts.contains_key(part_number)
    }

    /// Number of unique part numbers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if no part numbers were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Part numbers in ascending order.
    pub fn part_numbers(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    /// `(part_number, words)` pairs in ascending part-number order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordSet)> {
        self.parts.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, WordSet)> for NormalizedIndex {
    fn from_iter<I: IntoIterator<Item = (K, WordSet)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (number, words) in iter {
            index.insert(number, words);
        }
        index
    }
}
