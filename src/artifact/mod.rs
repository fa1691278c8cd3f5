//! Broken-link artifact parsing.
//!
//! The external scanning task persists its findings as a JSON list of
//! two-element `[block_id, link]` string pairs. This module turns that blob
//! into [`BrokenLinkEntry`] values, failing fast with a per-entry diagnostic
//! on anything malformed rather than truncating or padding.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tokio::fs;

use crate::error_handling::ArtifactError;
use crate::report::BrokenLinkEntry;

/// Parses a broken-link artifact body into entries, preserving input order.
///
/// # Errors
///
/// Returns [`ArtifactError`] when the body is not JSON, not a list, or when
/// any entry is not a two-element pair of strings. The error names the index
/// of the first offending entry.
pub fn parse_entries(content: &str) -> Result<Vec<BrokenLinkEntry>, ArtifactError> {
    let value: Value = serde_json::from_str(content)?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(ArtifactError::NotAList(json_type_name(&other).to_string())),
    };

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        entries.push(parse_entry(index, item)?);
    }
    Ok(entries)
}

/// Loads and parses a broken-link artifact from a file.
pub async fn load_entries(path: &Path) -> Result<Vec<BrokenLinkEntry>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read artifact {}", path.display()))?;
    let entries = parse_entries(&content)
        .with_context(|| format!("Failed to parse artifact {}", path.display()))?;
    Ok(entries)
}

fn parse_entry(index: usize, item: Value) -> Result<BrokenLinkEntry, ArtifactError> {
    let mut pair = match item {
        Value::Array(pair) => pair,
        other => {
            return Err(ArtifactError::MalformedEntry {
                index,
                reason: format!("expected a [block_id, link] pair, got {}", json_type_name(&other)),
            })
        }
    };

    if pair.len() != 2 {
        return Err(ArtifactError::MalformedEntry {
            index,
            reason: format!("expected 2 elements, got {}", pair.len()),
        });
    }

    // Length is checked above, so pop() order is [link, block_id]
    let link = string_member(index, "link", pair.pop().unwrap_or(Value::Null))?;
    let block_id = string_member(index, "block_id", pair.pop().unwrap_or(Value::Null))?;
    Ok(BrokenLinkEntry { block_id, link })
}

fn string_member(index: usize, field: &str, value: Value) -> Result<String, ArtifactError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(ArtifactError::MalformedEntry {
            index,
            reason: format!("{field} must be a string, got {}", json_type_name(&other)),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_entries_preserves_order_and_duplicates() {
        let content = r#"[
            ["blk-1", "http://dead.example"],
            ["blk-2", "http://dead2.example"],
            ["blk-1", "http://dead.example"]
        ]"#;
        let entries = parse_entries(content).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], BrokenLinkEntry::new("blk-1", "http://dead.example"));
        assert_eq!(entries[1], BrokenLinkEntry::new("blk-2", "http://dead2.example"));
        assert_eq!(entries[2], entries[0]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_entries("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_entries("not json").unwrap_err();
        assert!(matches!(err, ArtifactError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_rejects_non_list_top_level() {
        let err = parse_entries(r#"{"blk-1": "http://dead.example"}"#).unwrap_err();
        assert!(matches!(err, ArtifactError::NotAList(ref t) if t == "an object"));
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        let err = parse_entries(r#"[["blk-1"]]"#).unwrap_err();
        match err {
            ArtifactError::MalformedEntry { index, reason } => {
                assert_eq!(index, 0);
                assert!(reason.contains("expected 2 elements, got 1"));
            }
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_three_element_entry() {
        // Extra elements are an error, not silently dropped
        let err = parse_entries(r#"[["blk-1", "http://dead.example", "extra"]]"#).unwrap_err();
        assert!(matches!(err, ArtifactError::MalformedEntry { index: 0, .. }));
    }

    #[test]
    fn test_parse_rejects_non_string_members() {
        let err = parse_entries(r#"[["blk-1", 42]]"#).unwrap_err();
        match err {
            ArtifactError::MalformedEntry { index, reason } => {
                assert_eq!(index, 0);
                assert!(reason.contains("link must be a string"));
            }
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_names_the_failing_index() {
        let content = r#"[["blk-1", "http://ok.example"], "oops"]"#;
        let err = parse_entries(content).unwrap_err();
        assert!(matches!(err, ArtifactError::MalformedEntry { index: 1, .. }));
    }

    #[tokio::test]
    async fn test_load_entries_missing_file() {
        let result = load_entries(Path::new("nonexistent_artifact.json")).await;
        assert!(result.is_err());
        let error_msg = format!("{:#}", result.unwrap_err());
        assert!(
            error_msg.contains("Failed to read artifact"),
            "Expected read failure context, got: {}",
            error_msg
        );
    }

    #[tokio::test]
    async fn test_load_entries_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("BrokenLinks.json");
        tokio::fs::write(&path, r#"[["blk-1", "http://dead.example"]]"#)
            .await
            .unwrap();

        let entries = load_entries(&path).await.unwrap();
        assert_eq!(entries, [BrokenLinkEntry::new("blk-1", "http://dead.example")]);
    }
}
