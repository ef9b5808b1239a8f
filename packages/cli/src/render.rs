//! Text and JSON rendering of comparison reports.

use std::fmt::Write as _;

use part_compare_scoring::{CandidateOutcome, ComparisonReport};

/// Width of the separator line printed after each model's results.
const SEPARATOR_WIDTH: usize = 40;

/// Output formats for comparison results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Results pane text.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

/// Renders `report` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(report: &ComparisonReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

/// Renders `report` as the plain-text results listing.
#[must_use]
pub fn render_text(report: &ComparisonReport) -> String {
    let mut out = format!(
        "Reference file contains {} unique parts\n",
        report.reference_parts
    );

    for outcome in &report.candidates {
        match outcome {
            CandidateOutcome::Scored(scored) => {
                let _ = write!(
                    out,
                    "\n{} Results:\nTotal parts found: {}\nOverall Score: {:.1}%\n{}\n{}\n",
                    scored.label,
                    scored.parts_found,
                    scored.score.overall_score,
                    scored.score.details,
                    "-".repeat(SEPARATOR_WIDTH),
                );
            }
            CandidateOutcome::LoadFailed { reason, .. } => {
                let _ = writeln!(out, "\n{reason}");
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use part_compare_scoring::{CandidateReport, ScoreResult};

    use super::*;

    fn report() -> ComparisonReport {
        ComparisonReport {
            reference_label: "Reference".to_string(),
            reference_parts: 2,
            candidates: vec![
                CandidateOutcome::Scored(CandidateReport {
                    label: "Model 1".to_string(),
                    parts_found: 0,
                    score: ScoreResult::not_applicable(),
                }),
                CandidateOutcome::LoadFailed {
                    label: "Model 2".to_string(),
                    reason: "Error loading b.json: denied".to_string(),
                },
            ],
        }
    }

    #[test]
    fn text_lists_each_candidate_in_order() {
        let text = render_text(&report());
        assert_eq!(
            text,
            format!(
                "Reference file contains 2 unique parts\n\
                 \n\
                 Model 1 Results:\n\
                 Total parts found: 0\n\
                 Overall Score: 0.0%\n\
                 N/A\n\
                 {}\n\
                 \n\
                 Error loading b.json: denied\n",
                "-".repeat(40)
            )
        );
    }

    #[test]
    fn json_tags_candidate_status() {
        let json = render(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["referenceParts"], 2);
        assert_eq!(value["candidates"][0]["status"], "scored");
        assert_eq!(value["candidates"][0]["partsFound"], 0);
        assert_eq!(value["candidates"][0]["score"]["details"], "N/A");
        assert_eq!(value["candidates"][1]["status"], "loadFailed");
        assert_eq!(value["candidates"][1]["label"], "Model 2");
    }

    #[test]
    fn format_names_are_lowercase() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
