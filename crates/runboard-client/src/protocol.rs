//! JSON wire format for the test-run service
//!
//! The list endpoint returns a JSON array of run objects. Decoding is lenient
//! per entry and strict per payload:
//! - a body that is not a JSON array is a protocol error
//! - an entry that cannot be decoded is skipped with a warning

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use runboard_core::prelude::*;
use runboard_core::{RunRecord, RunStatus};

/// Run identifier as sent by the backend (string or integer)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum WireId {
    Text(String),
    Number(i64),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Text(s) => s,
            WireId::Number(n) => n.to_string(),
        }
    }
}

/// One run as it appears on the wire.
///
/// Accepts both `snake_case` and the portal's `camelCase` spellings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireRunRecord {
    id: WireId,
    #[serde(default)]
    mode: Option<String>,
    #[serde(alias = "algorithmGID", alias = "algorithmGid")]
    algorithm_gid: String,
    #[serde(default, alias = "algorithmCID", alias = "algorithmCid")]
    algorithm_cid: Option<String>,
    #[serde(default, alias = "algorithmArgs")]
    algorithm_args: Option<Value>,
    #[serde(default, alias = "testDataset")]
    test_dataset: Option<String>,
    #[serde(default, alias = "modelFile")]
    model_file: Option<String>,
    status: String,
    #[serde(default)]
    progress: Option<f64>,
    #[serde(default, alias = "errorMessages")]
    error_messages: Option<String>,
    #[serde(alias = "createdAt", alias = "created")]
    created_at: String,
}

impl WireRunRecord {
    /// Validate and convert into the domain type
    pub(crate) fn into_record(self) -> Result<RunRecord> {
        let status = RunStatus::parse(&self.status)
            .ok_or_else(|| Error::protocol(format!("unknown status '{}'", self.status)))?;
        let created_at = parse_timestamp(&self.created_at)?;

        Ok(RunRecord {
            id: self.id.into_string(),
            mode: self.mode.unwrap_or_default(),
            algorithm_gid: self.algorithm_gid,
            algorithm_cid: self.algorithm_cid.unwrap_or_default(),
            algorithm_args: args_to_map(self.algorithm_args),
            test_dataset: self.test_dataset.unwrap_or_default(),
            model_file: self.model_file.unwrap_or_default(),
            status,
            progress: self.progress.map(|p| p.round() as i64).unwrap_or(0),
            error_messages: self.error_messages.filter(|m| !m.is_empty()),
            created_at,
        })
    }
}

/// Algorithm arguments may arrive as an object, a JSON-encoded string, or null
fn args_to_map(args: Option<Value>) -> Map<String, Value> {
    match args {
        Some(Value::Object(map)) => map,
        Some(Value::String(s)) => match serde_json::from_str::<Value>(&s) {
            Ok(Value::Object(map)) => map,
            _ => {
                debug!("Ignoring non-object algorithm args: {}", s);
                Map::new()
            }
        },
        _ => Map::new(),
    }
}

/// Parse RFC 3339 timestamps, or naive ISO timestamps assumed to be UTC
pub(crate) fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| Error::protocol(format!("invalid timestamp '{}': {}", s, e)))
}

/// Decode the body of the list endpoint.
pub fn decode_run_list(body: &str) -> Result<Vec<RunRecord>> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(entries) = value else {
        return Err(Error::protocol("expected a JSON array of test runs"));
    };

    let total = entries.len();
    let runs: Vec<RunRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            match serde_json::from_value::<WireRunRecord>(entry)
                .map_err(Error::from)
                .and_then(WireRunRecord::into_record)
            {
                Ok(run) => Some(run),
                Err(e) => {
                    warn!("Skipping malformed test run at index {}: {}", index, e);
                    None
                }
            }
        })
        .collect();

    if runs.len() < total {
        debug!("Decoded {} of {} test runs", runs.len(), total);
    }
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAKE: &str = r#"[
        {
            "id": 12,
            "mode": "upload",
            "algorithm_gid": "aiverify.fairness.statistical_parity",
            "algorithm_cid": "statistical_parity",
            "algorithm_args": {"sensitive_feature": ["gender"]},
            "test_dataset": "credit.csv",
            "model_file": "credit.sav",
            "status": "pending",
            "progress": 42,
            "error_messages": null,
            "created_at": "2024-05-01T09:30:00"
        }
    ]"#;

    #[test]
    fn test_decode_snake_case() {
        let runs = decode_run_list(SNAKE).unwrap();
        assert_eq!(runs.len(), 1);
        let run = &runs[0];
        assert_eq!(run.id, "12");
        assert_eq!(run.status, RunStatus::Pending);
        assert_eq!(run.progress, 42);
        assert_eq!(run.algorithm_cid, "statistical_parity");
        assert!(run.algorithm_args.contains_key("sensitive_feature"));
        assert_eq!(run.error_messages, None);
    }

    #[test]
    fn test_decode_camel_case() {
        let body = r#"[{
            "id": "abc",
            "algorithmGID": "aiverify.explain.shap",
            "algorithmCID": "shap",
            "algorithmArgs": "{\"k\": 1}",
            "testDataset": "d.csv",
            "modelFile": "m.pkl",
            "status": "ERROR",
            "progress": 12.6,
            "errorMessages": "boom",
            "createdAt": "2024-05-01T09:30:00Z"
        }]"#;
        let runs = decode_run_list(body).unwrap();
        let run = &runs[0];
        assert_eq!(run.id, "abc");
        assert_eq!(run.status, RunStatus::Error);
        assert_eq!(run.progress, 13);
        assert_eq!(run.error_messages.as_deref(), Some("boom"));
        assert_eq!(run.algorithm_args.get("k"), Some(&Value::from(1)));
    }

    #[test]
    fn test_decode_skips_malformed_entries() {
        let body = r#"[
            {"id": "ok", "algorithm_gid": "a.b", "status": "success", "created_at": "2024-01-01T00:00:00Z"},
            {"algorithm_gid": "a.b", "status": "success", "created_at": "2024-01-01T00:00:00Z"},
            {"id": "bad-status", "algorithm_gid": "a.b", "status": "exploded", "created_at": "2024-01-01T00:00:00Z"},
            {"id": "bad-time", "algorithm_gid": "a.b", "status": "error", "created_at": "yesterday"}
        ]"#;
        let runs = decode_run_list(body).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].id, "ok");
    }

    #[test]
    fn test_decode_keeps_out_of_range_progress() {
        let body = r#"[{"id": "x", "algorithm_gid": "a", "status": "pending", "progress": 140,
            "created_at": "2024-01-01T00:00:00Z"}]"#;
        let runs = decode_run_list(body).unwrap();
        assert_eq!(runs[0].progress, 140);
    }

    #[test]
    fn test_decode_missing_progress_defaults_to_zero() {
        let body = r#"[{"id": "x", "algorithm_gid": "a", "status": "pending",
            "created_at": "2024-01-01T00:00:00Z"}]"#;
        assert_eq!(decode_run_list(body).unwrap()[0].progress, 0);
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_run_list(r#"{"detail": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = decode_run_list("<html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_decode_preserves_order() {
        let body = r#"[
            {"id": "3", "algorithm_gid": "a", "status": "success", "created_at": "2024-01-01T00:00:00Z"},
            {"id": "1", "algorithm_gid": "a", "status": "success", "created_at": "2024-01-01T00:00:00Z"},
            {"id": "2", "algorithm_gid": "a", "status": "success", "created_at": "2024-01-01T00:00:00Z"}
        ]"#;
        let ids: Vec<_> = decode_run_list(body)
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let dt = parse_timestamp("2024-05-01T10:30:00+01:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-05-01T09:30:00+00:00");
    }
}
