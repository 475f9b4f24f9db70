use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::model::Event;

/// A drop target: an hour slot in day/week views, a whole day in month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub date: NaiveDate,
    pub hour: Option<u32>,
}

impl Slot {
    pub fn day(date: NaiveDate) -> Self {
        Self { date, hour: None }
    }

    pub fn hour(date: NaiveDate, hour: u32) -> Self {
        Self {
            date,
            hour: Some(hour),
        }
    }
}

/// Committed outcome of a completed drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragCommit {
    pub event_id: String,
    pub new_start: NaiveDateTime,
    pub new_end: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    Dragging {
        event_id: String,
        origin_start: NaiveDateTime,
        /// Captured once at drag start; immutable for the drag's lifetime.
        duration: Duration,
        hover: Option<Slot>,
    },
}

/// Pointer-driven reschedule state machine: `Idle -> Dragging ->
/// {Dropped | Cancelled}`. The store is never touched while dragging;
/// the hover slot exists only for rendering.
#[derive(Debug, Clone)]
pub struct DragController {
    state: State,
}

impl Default for DragController {
    fn default() -> Self {
        Self { state: State::Idle }
    }
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }

    pub fn dragging_event(&self) -> Option<&str> {
        match &self.state {
            State::Dragging { event_id, .. } => Some(event_id),
            State::Idle => None,
        }
    }

    pub fn hover_slot(&self) -> Option<Slot> {
        match &self.state {
            State::Dragging { hover, .. } => *hover,
            State::Idle => None,
        }
    }

    /// Begin dragging `event`. A drag already in flight is replaced.
    pub fn begin(&mut self, event: &Event) {
        self.state = State::Dragging {
            event_id: event.id.clone(),
            origin_start: event.start,
            duration: event.duration(),
            hover: None,
        };
    }

    /// Update the advisory hover slot while the pointer moves.
    pub fn hover(&mut self, slot: Option<Slot>) {
        if let State::Dragging { hover, .. } = &mut self.state {
            *hover = slot;
        }
    }

    /// Release the pointer. Over a valid slot this yields the commit;
    /// anywhere else the drag is cancelled and nothing is returned.
    ///
    /// Hour slots replace the time-of-day entirely (hour-grid slot
    /// semantics); month cells carry no hour, so the original
    /// time-of-day is kept.
    pub fn release(&mut self) -> Option<DragCommit> {
        let state = std::mem::replace(&mut self.state, State::Idle);
        let State::Dragging {
            event_id,
            origin_start,
            duration,
            hover,
        } = state
        else {
            return None;
        };
        let slot = hover?;
        let new_start = match slot.hour {
            Some(hour) => slot.date.and_hms_opt(hour, 0, 0)?,
            None => slot.date.and_time(origin_start.time()),
        };
        Some(DragCommit {
            event_id,
            new_start,
            new_end: new_start + duration,
        })
    }

    /// Abandon the gesture (pointer-cancel, focus loss, zero-distance
    /// click). Always safe; no store side effects.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn kickoff() -> Event {
        Event {
            id: "kickoff".to_string(),
            title: "Kickoff".to_string(),
            description: None,
            start: dt(2025, 3, 10, 9, 0),
            end: dt(2025, 3, 10, 10, 0),
            color: "#3b82f6".to_string(),
            all_day: false,
            project_id: "default".to_string(),
            parent_event_id: None,
            is_sub_event: false,
        }
    }

    #[test]
    fn hour_slot_drop_replaces_time_of_day_and_preserves_duration() {
        let mut drag = DragController::new();
        drag.begin(&kickoff());
        drag.hover(Some(Slot::hour(
            NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
            14,
        )));
        let commit = drag.release().unwrap();
        assert_eq!(commit.new_start, dt(2025, 3, 12, 14, 0));
        assert_eq!(commit.new_end, dt(2025, 3, 12, 15, 0));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn hour_slot_drop_discards_original_minute_offset() {
        let mut event = kickoff();
        event.start = dt(2025, 3, 10, 9, 30);
        event.end = dt(2025, 3, 10, 10, 45);
        let mut drag = DragController::new();
        drag.begin(&event);
        drag.hover(Some(Slot::hour(
            NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(),
            8,
        )));
        let commit = drag.release().unwrap();
        // Snapped to the top of the slot, duration 75 min preserved.
        assert_eq!(commit.new_start, dt(2025, 3, 11, 8, 0));
        assert_eq!(commit.new_end, dt(2025, 3, 11, 9, 15));
    }

    #[test]
    fn month_cell_drop_keeps_original_time_of_day() {
        let mut event = kickoff();
        event.start = dt(2025, 3, 10, 9, 30);
        event.end = dt(2025, 3, 10, 11, 0);
        let mut drag = DragController::new();
        drag.begin(&event);
        drag.hover(Some(Slot::day(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())));
        let commit = drag.release().unwrap();
        assert_eq!(commit.new_start, dt(2025, 3, 20, 9, 30));
        assert_eq!(commit.new_end, dt(2025, 3, 20, 11, 0));
    }

    #[test]
    fn release_without_target_is_cancelled() {
        let mut drag = DragController::new();
        drag.begin(&kickoff());
        assert_eq!(drag.release(), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn cancel_discards_hover_state() {
        let mut drag = DragController::new();
        drag.begin(&kickoff());
        drag.hover(Some(Slot::day(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())));
        drag.cancel();
        assert!(!drag.is_dragging());
        assert_eq!(drag.release(), None);
    }
}
