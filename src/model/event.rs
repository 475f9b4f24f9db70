use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A time-boxed calendar entry belonging to a project.
///
/// Times are local wall-clock values (no time-zone handling). Serialized
/// field names are camelCase so snapshots stay portable and human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Hex color string; normally mirrors the owning project's color.
    pub color: String,
    #[serde(default)]
    pub all_day: bool,
    pub project_id: String,
    /// Advisory parent link for sub-events; not referentially enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_event_id: Option<String>,
    #[serde(default)]
    pub is_sub_event: bool,
}

impl Event {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Does `[start, end)` intersect the half-open query window?
    pub fn intersects(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && self.end > start
    }

    /// Does the event touch the given calendar day?
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        let day_start = date.and_hms_opt(0, 0, 0).expect("midnight is valid");
        self.intersects(day_start, day_start + Duration::days(1))
    }
}

/// Input for creating an event. Id, color, and project default are filled
/// in by the store.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    /// `None` attaches the event to the fallback project.
    pub project_id: Option<String>,
    pub parent_event_id: Option<String>,
    pub is_sub_event: bool,
    /// `None` inherits the owning project's color.
    pub color: Option<String>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            description: None,
            start,
            end,
            all_day: false,
            project_id: None,
            parent_event_id: None,
            is_sub_event: false,
            color: None,
        }
    }
}

/// Partial update for [`Event`]. `None` fields are left untouched;
/// `description` uses a nested option so it can be cleared.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub all_day: Option<bool>,
    pub project_id: Option<String>,
    pub color: Option<String>,
}

impl EventPatch {
    /// Patch that moves an event to a new start while preserving duration.
    pub fn reschedule(new_start: NaiveDateTime, duration: Duration) -> Self {
        Self {
            start: Some(new_start),
            end: Some(new_start + duration),
            ..Default::default()
        }
    }
}
