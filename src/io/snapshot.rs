use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Event, Project};

/// Snapshot codec errors. Any decode failure is an `InvalidPayload`; a
/// corrupt payload is never partially applied.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("invalid snapshot payload: {0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Portable serialized form of the full projects+events state. Datetimes
/// serialize as ISO-8601 strings via chrono's serde support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub projects: Vec<Project>,
    pub events: Vec<Event>,
}

/// Share-link payload: the snapshot plus the viewer presentation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    #[serde(flatten)]
    pub snapshot: Snapshot,
    /// Background gradient theme name.
    pub theme: String,
    pub show_holidays: bool,
}

/// Pretty JSON for the downloadable `.json` snapshot.
pub fn to_json(snapshot: &Snapshot) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(snapshot)
        .map_err(|e| SnapshotError::InvalidPayload(e.to_string()))
}

pub fn from_json(json: &str) -> Result<Snapshot, SnapshotError> {
    serde_json::from_str(json).map_err(|e| SnapshotError::InvalidPayload(e.to_string()))
}

/// Encode the extended payload for embedding in a `?data=` query
/// parameter. URL-safe base64, no padding.
pub fn encode_share(payload: &SharePayload) -> Result<String, SnapshotError> {
    let json =
        serde_json::to_vec(payload).map_err(|e| SnapshotError::InvalidPayload(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode_share(data: &str) -> Result<SharePayload, SnapshotError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(data.trim())
        .map_err(|e| SnapshotError::InvalidPayload(format!("bad base64: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| SnapshotError::InvalidPayload(e.to_string()))
}

/// Pull the `data=` value out of a pasted share link, or pass raw base64
/// through unchanged.
pub fn extract_share_data(input: &str) -> &str {
    let input = input.trim();
    match input.find("data=") {
        Some(pos) => {
            let rest = &input[pos + "data=".len()..];
            rest.split('&').next().unwrap_or(rest)
        }
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, 0, ms)
            .unwrap()
    }

    fn sample() -> Snapshot {
        let project = Project {
            id: "a".to_string(),
            name: "Studio A".to_string(),
            color: "#3b82f6".to_string(),
            visible: true,
        };
        let parent = Event {
            id: "kickoff".to_string(),
            title: "Kickoff".to_string(),
            description: Some("Opening meeting".to_string()),
            start: dt(2025, 3, 10, 9, 0, 250),
            end: dt(2025, 3, 10, 10, 0, 0),
            color: "#3b82f6".to_string(),
            all_day: false,
            project_id: "a".to_string(),
            parent_event_id: None,
            is_sub_event: false,
        };
        let sub = Event {
            id: "kickoff-notes".to_string(),
            title: "Notes".to_string(),
            description: None,
            start: dt(2025, 3, 10, 9, 15, 0),
            end: dt(2025, 3, 10, 9, 45, 0),
            color: "#3b82f6".to_string(),
            all_day: false,
            project_id: "a".to_string(),
            parent_event_id: Some("kickoff".to_string()),
            is_sub_event: true,
        };
        Snapshot {
            projects: vec![project],
            events: vec![parent, sub],
        }
    }

    #[test]
    fn json_round_trip_is_exact() {
        let snapshot = sample();
        let json = to_json(&snapshot).unwrap();
        assert_eq!(from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn empty_snapshot_round_trips() {
        let snapshot = Snapshot {
            projects: vec![],
            events: vec![],
        };
        let json = to_json(&snapshot).unwrap();
        assert_eq!(from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn json_uses_camel_case_iso_payload() {
        let json = to_json(&sample()).unwrap();
        assert!(json.contains("\"projectId\": \"a\""));
        assert!(json.contains("\"isSubEvent\": true"));
        assert!(json.contains("\"parentEventId\": \"kickoff\""));
        // Millisecond-precision ISO-8601 instant.
        assert!(json.contains("2025-03-10T09:00:00.250"));
        // Absent optional fields are omitted, not null.
        assert!(!json.contains("\"description\": null"));
    }

    #[test]
    fn share_round_trip_keeps_presentation_state() {
        let payload = SharePayload {
            snapshot: sample(),
            theme: "Aurora".to_string(),
            show_holidays: true,
        };
        let encoded = encode_share(&payload).unwrap();
        assert_eq!(decode_share(&encoded).unwrap(), payload);
    }

    #[test]
    fn corrupted_base64_is_invalid_payload() {
        let err = decode_share("%%%not-base64%%%").unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidPayload(_)));
    }

    #[test]
    fn valid_base64_of_garbage_json_is_invalid_payload() {
        let data = URL_SAFE_NO_PAD.encode(b"{\"projects\": 42}");
        let err = decode_share(&data).unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidPayload(_)));
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let err = from_json("{\"projects\": []}").unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidPayload(_)));
    }

    #[test]
    fn extract_share_data_handles_full_urls() {
        assert_eq!(
            extract_share_data("https://studio.example/view?data=AbC123&utm=x"),
            "AbC123"
        );
        assert_eq!(extract_share_data("  AbC123  "), "AbC123");
    }
}
