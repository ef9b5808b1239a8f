#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Part record extraction and name normalization.
//!
//! # Architecture
//!
//! - **Extraction** ([`extract`]): scrapes `(part_number, part_name)` pairs
//!   out of loosely formatted model output. Never fails; malformed input
//!   just yields fewer records.
//! - **Normalization** ([`normalize`]): reduces each name to a set of
//!   significant words and keys it by part number, last record winning.
//!
//! # Usage
//!
//! ```rust
//! let index = part_compare_parts::extract_index(
//!     r#"{"part_name": "Widget Assembly", "part_number": "1234567"}"#,
//! );
//! let words = index.get("1234567").unwrap();
//! assert!(words.contains("widget") && words.contains("assembly"));
//! ```

pub mod extract;
pub mod normalize;

pub use extract::extract;
pub use normalize::{normalize, significant_words};
pub use part_compare_parts_models::{NormalizedIndex, RawRecord, WordSet};

/// Extracts and normalizes a document in one step.
#[must_use]
pub fn extract_index(content: &str) -> NormalizedIndex {
    normalize(&extract(content))
}
