//! Part record extraction from loosely formatted text.
//!
//! Model outputs are usually JSON-ish but frequently broken: code fences,
//! trailing commas, truncated arrays, prose around the payload. Instead of
//! parsing, the extractor scrapes the text:
//!
//! 1. Every 7 or 8 digit numeral delimited by quotes or whitespace is a
//!    candidate part number.
//! 2. For each candidate, the text *before* it is searched for name phrases
//!    that precede a `part_number` key.
//! 3. The closest (last) name phrase is paired with the candidate.
//!
//! The closest-preceding association is a heuristic. Documents that place
//! several `part_number` keys close together can pair a number with a
//! neighbour's name.

use std::sync::LazyLock;

use part_compare_parts_models::RawRecord;
use regex::Regex;

/// A 7 or 8 digit numeral with a quote or whitespace on each side.
static PART_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["\s]([0-9]{7}|[0-9]{8})["\s]"#).expect("valid regex")
});

/// A quoted or bare name phrase followed by a `part_number` key and an
/// optional numeral value.
static PART_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)["\s]([^"]*?)"?\s*,?\s*(?:part_number|"part_number")\s*:\s*(?:"?[0-9]{7,8}"?)?"#,
    )
    .expect("valid regex")
});

/// Extracts `(part_number, part_name)` records from `content`.
///
/// Records are returned in the order their part numbers appear. A part
/// number that occurs several times yields several records. Candidates with
/// no name phrase before them are dropped.
#[must_use]
pub fn extract(content: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    let mut dropped = 0_usize;

    for caps in PART_NUMBER_RE.captures_iter(content) {
        let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let content_before = &content[..whole.start()];
        match closest_name(content_before) {
            Some(name) => records.push(RawRecord::new(number.as_str(), name)),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!(
            "Extracted {} part record(s), dropped {dropped} candidate(s) without a name",
            records.len()
        );
    }

    records
}

/// Returns the last name phrase in `content_before`, trimmed of whitespace
/// and surrounding quotes.
fn closest_name(content_before: &str) -> Option<&str> {
    PART_NAME_RE
        .captures_iter(content_before)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|name| clean_name(name.as_str()))
}

fn clean_name(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_json_fragment() {
        let records = extract(r#"{"part_name": "Widget Assembly", "part_number": "1234567"}"#);
        assert_eq!(records, vec![RawRecord::new("1234567", "Widget Assembly")]);
    }

    #[test]
    fn extracts_fragment_embedded_in_prose() {
        let text = r#"Here are the parts I found:
```json
[{"part_name": "Widget Assembly", "part_number": "1234567"}]
```
Let me know if you need anything else."#;
        let records = extract(text);
        assert_eq!(records, vec![RawRecord::new("1234567", "Widget Assembly")]);
    }

    #[test]
    fn pairs_each_number_with_its_own_name() {
        let text = r#"[
  {"part_name": "Hex Bolt", "part_number": "1111111"},
  {"part_name": "Lock Washer", "part_number": "22222222"}
]"#;
        let records = extract(text);
        assert_eq!(
            records,
            vec![
                RawRecord::new("1111111", "Hex Bolt"),
                RawRecord::new("22222222", "Lock Washer"),
            ]
        );
    }

    #[test]
    fn key_match_is_case_insensitive() {
        let records = extract(r#"{"Part Name": "Drive Shaft", "PART_NUMBER": "7654321"}"#);
        assert_eq!(records, vec![RawRecord::new("7654321", "Drive Shaft")]);
    }

    #[test]
    fn accepts_bare_key_marker() {
        let records = extract("name: Gear Housing, part_number: \"3456789\" ");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].part_number, "3456789");
        assert_eq!(records[0].part_name, "Gear Housing");
    }

    #[test]
    fn drops_number_without_preceding_name() {
        let records = extract(r#"Order reference "1234567" was shipped."#);
        assert!(records.is_empty());
    }

    #[test]
    fn ignores_numbers_of_other_lengths() {
        let text = r#"{"part_name": "Spacer", "part_number": "123456"} {"part_name": "Clip", "part_number": "123456789"}"#;
        assert!(extract(text).is_empty());
    }

    #[test]
    fn ignores_unquoted_number_followed_by_comma() {
        let records = extract(r#"{"part_name": "Spacer", "part_number": 1234567, "qty": 2}"#);
        assert!(records.is_empty());
    }

    #[test]
    fn keeps_duplicate_part_numbers_in_order() {
        let text = r#"{"part_name": "Old Name", "part_number": "1234567"}
{"part_name": "New Name", "part_number": "1234567"}"#;
        let records = extract(text);
        assert_eq!(
            records,
            vec![
                RawRecord::new("1234567", "Old Name"),
                RawRecord::new("1234567", "New Name"),
            ]
        );
    }

    #[test]
    fn number_mentioned_later_reuses_closest_name() {
        let text = r#"{"part_name": "Pump Seal", "part_number": "1234567"} see also "7654321" "#;
        let records = extract(text);
        assert_eq!(
            records,
            vec![
                RawRecord::new("1234567", "Pump Seal"),
                RawRecord::new("7654321", "Pump Seal"),
            ]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(extract("").is_empty());
    }
}
