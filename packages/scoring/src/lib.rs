#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Scoring of model outputs against a reference document.
//!
//! Each candidate gets two recall figures:
//!
//! - **Part-number accuracy**: reference part numbers present in the
//!   candidate, over all reference part numbers.
//! - **Name accuracy**: reference part numbers present *and* named with at
//!   least half of the reference's significant words, over all reference
//!   part numbers.
//!
//! The overall score is their mean. Scoring is a pure function of two
//! [`NormalizedIndex`] values, so candidates can be scored in any order or
//! in parallel.

pub mod compare;
pub mod report;
pub mod score;

pub use compare::{CompareError, compare_documents};
pub use part_compare_parts_models::NormalizedIndex;
pub use part_compare_scoring_models::{
    CandidateOutcome, CandidateReport, ComparisonReport, Document, DocumentText, NameMismatch,
    ScoreResult,
};
pub use score::{names_match, score};
