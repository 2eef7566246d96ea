use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::SkippedRecord;
use crate::models::{LeaderboardPeriod, RawContributorStats};

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot must be a JSON array of contributor records, found {0}")]
    NotAnArray(&'static str),
}

/// Records decoded from one snapshot plus the ones that could not be read
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSnapshot {
    pub records: Vec<RawContributorStats>,
    pub skipped: Vec<SkippedRecord>,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode a snapshot document.
///
/// The document itself must be a JSON array. Each element is decoded on its
/// own so one bad record does not sink the batch.
pub fn parse_snapshot(json: &str) -> Result<ParsedSnapshot, SnapshotError> {
    let document: Value = serde_json::from_str(json)?;
    let items = match document {
        Value::Array(items) => items,
        other => return Err(SnapshotError::NotAnArray(json_kind(&other))),
    };

    let mut parsed = ParsedSnapshot::default();
    for (index, item) in items.into_iter().enumerate() {
        let username = item
            .get("username")
            .and_then(Value::as_str)
            .map(str::to_string);

        match serde_json::from_value::<RawContributorStats>(item) {
            Ok(record) => parsed.records.push(record),
            Err(e) => {
                warn!(index, username = ?username, error = %e, "Skipping undecodable snapshot record");
                parsed.skipped.push(SkippedRecord {
                    index,
                    username,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(parsed)
}

/// `<dir>/<period>.json`, used for both snapshot input and leaderboard output
pub fn snapshot_path(dir: &Path, period: LeaderboardPeriod) -> PathBuf {
    dir.join(format!("{}.json", period.as_str()))
}

#[tracing::instrument]
pub async fn load_snapshot(path: &Path) -> Result<ParsedSnapshot, SnapshotError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let parsed = parse_snapshot(&contents)?;
    info!(
        records = parsed.records.len(),
        skipped = parsed.skipped.len(),
        "Loaded snapshot"
    );
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_snapshot_records() {
        let json = r#"[
            {
                "username": "alice",
                "roleTags": [{"tagName": "maintainer", "rawScore": 40}],
                "skillTags": [{"tagName": "rust", "rawScore": 120.5}],
                "focusAreaTags": [],
                "stats": {"total_prs": 3, "merged_prs": 2},
                "avatarUrl": "https://avatars.example/alice"
            },
            {"username": "bob"}
        ]"#;

        let parsed = parse_snapshot(json).unwrap();
        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.records.len(), 2);

        let alice = &parsed.records[0];
        assert_eq!(alice.skill_tags[0].raw_score, 120.5);
        assert_eq!(alice.stats.merged_prs, 2);
        assert_eq!(alice.stats.total_files, 0);
        assert_eq!(alice.avatar_url.as_deref(), Some("https://avatars.example/alice"));

        let bob = &parsed.records[1];
        assert!(bob.skill_tags.is_empty());
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let json = r#"[
            {"username": "alice", "skillTags": [{"tagName": "rust", "rawScore": "lots"}]},
            {"skillTags": []},
            42,
            {"username": "carol", "skillTags": [{"tagName": "go", "rawScore": 7}]}
        ]"#;

        let parsed = parse_snapshot(json).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].username, "carol");

        let indexes: Vec<usize> = parsed.skipped.iter().map(|s| s.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
        assert_eq!(parsed.skipped[0].username.as_deref(), Some("alice"));
        assert_eq!(parsed.skipped[1].username, None);
    }

    #[test]
    fn test_document_must_be_an_array() {
        match parse_snapshot(r#"{"username": "alice"}"#) {
            Err(SnapshotError::NotAnArray(kind)) => assert_eq!(kind, "an object"),
            other => panic!("expected NotAnArray, got {:?}", other),
        }
        assert!(matches!(parse_snapshot("not json"), Err(SnapshotError::Json(_))));
    }

    #[test]
    fn test_snapshot_path() {
        let path = snapshot_path(Path::new("data"), LeaderboardPeriod::Weekly);
        assert_eq!(path, PathBuf::from("data/weekly.json"));
    }

    #[tokio::test]
    async fn test_load_snapshot_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "contributor-reputation-snapshot-{}.json",
            std::process::id()
        ));
        tokio::fs::write(&path, r#"[{"username": "dana"}]"#).await.unwrap();

        let parsed = load_snapshot(&path).await.unwrap();
        assert_eq!(parsed.records[0].username, "dana");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_snapshot() {
        let err = load_snapshot(Path::new("/definitely/not/here.json")).await.unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }
}
