//! Reads comparison documents from disk.
//!
//! Read failures never abort the run. They become
//! [`DocumentText::Unavailable`](part_compare_scoring::DocumentText::Unavailable)
//! documents so the comparison layer can report them per document.

use std::path::Path;

use futures::stream::{self, StreamExt as _};
use part_compare_scoring::Document;

use crate::manifest::ComparisonPlan;

/// Label used for the reference document.
pub const REFERENCE_LABEL: &str = "Reference";

/// Number of documents read concurrently.
const CONCURRENT_READS: usize = 4;

/// Reads one document, converting any failure into an unavailable document.
pub async fn load_document(label: &str, path: &Path) -> Document {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => {
            log::debug!("Loaded {label} from {} ({} bytes)", path.display(), text.len());
            Document::loaded(label, text)
        }
        Err(e) => {
            log::warn!("Failed to read {}: {e}", path.display());
            Document::unavailable(label, format!("Error loading {}: {e}", path.display()))
        }
    }
}

/// Reads the reference and every candidate in `plan`.
///
/// Candidates are returned in slot order.
pub async fn load_plan(plan: &ComparisonPlan) -> (Option<Document>, Vec<Document>) {
    let reference = match &plan.reference {
        Some(path) => Some(load_document(REFERENCE_LABEL, path).await),
        None => None,
    };

    let candidates: Vec<Document> = stream::iter(plan.models.iter().map(|slot| {
        let label = slot.label.clone();
        let path = slot.path.clone();
        async move { load_document(&label, &path).await }
    }))
    .buffered(CONCURRENT_READS)
    .collect()
    .await;

    (reference, candidates)
}

#[cfg(test)]
mod tests {
    use part_compare_scoring::DocumentText;

    use std::path::PathBuf;

    use super::*;
    use crate::manifest::ModelSlot;

    #[tokio::test]
    async fn missing_file_becomes_unavailable_document() {
        let path = Path::new("definitely/not/here/model.json");
        let doc = load_document("Model 1", path).await;

        assert_eq!(doc.label, "Model 1");
        match doc.text {
            DocumentText::Unavailable { reason } => {
                assert!(reason.starts_with("Error loading definitely/not/here/model.json: "));
            }
            DocumentText::Loaded(_) => panic!("missing file should not load"),
        }
    }

    #[tokio::test]
    async fn loads_manifest_file_from_disk() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let doc = load_document(REFERENCE_LABEL, &manifest).await;
        assert!(matches!(doc.text, DocumentText::Loaded(ref text) if text.contains("part_compare")));
    }

    #[tokio::test]
    async fn keeps_slot_order_and_missing_reference() {
        let plan = ComparisonPlan {
            reference: None,
            models: vec![
                ModelSlot {
                    label: "Model 1".to_string(),
                    path: PathBuf::from("missing_a.json"),
                },
                ModelSlot {
                    label: "Model 2".to_string(),
                    path: PathBuf::from("missing_b.json"),
                },
            ],
        };

        let (reference, candidates) = load_plan(&plan).await;
        assert!(reference.is_none());
        let labels: Vec<&str> = candidates.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Model 1", "Model 2"]);
    }
}
