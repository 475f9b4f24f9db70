use chrono::{Duration, NaiveDateTime};

use crate::model::Event;

/// Vertical pixels that correspond to one hour in the day/week grids.
/// The time grid uses the same constant for its row height so pointer
/// displacement and rendered geometry agree.
pub const PIXELS_PER_HOUR: f32 = 48.0;

/// Committed outcome of a completed resize; only the end moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeCommit {
    pub event_id: String,
    pub new_end: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    Resizing {
        event_id: String,
        origin_start: NaiveDateTime,
        origin_end: NaiveDateTime,
        preview_end: NaiveDateTime,
    },
}

/// Pointer-driven duration-change state machine: `Idle -> Resizing ->
/// Committed`. Only available where slots have hour granularity.
#[derive(Debug, Clone)]
pub struct ResizeController {
    state: State,
}

impl Default for ResizeController {
    fn default() -> Self {
        Self { state: State::Idle }
    }
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.state, State::Resizing { .. })
    }

    pub fn resizing_event(&self) -> Option<&str> {
        match &self.state {
            State::Resizing { event_id, .. } => Some(event_id),
            State::Idle => None,
        }
    }

    /// The live preview end time while a resize is in flight.
    pub fn preview_end(&self) -> Option<NaiveDateTime> {
        match &self.state {
            State::Resizing { preview_end, .. } => Some(*preview_end),
            State::Idle => None,
        }
    }

    pub fn begin(&mut self, event: &Event) {
        self.state = State::Resizing {
            event_id: event.id.clone(),
            origin_start: event.start,
            origin_end: event.end,
            preview_end: event.end,
        };
    }

    /// Convert accumulated vertical displacement (pixels, from the grab
    /// point) into a whole-hour delta on the original end time. Duration
    /// clamps to exactly one hour, never less.
    pub fn update(&mut self, delta_y_px: f32) {
        if let State::Resizing {
            origin_start,
            origin_end,
            preview_end,
            ..
        } = &mut self.state
        {
            let hours = (delta_y_px / PIXELS_PER_HOUR).round() as i64;
            let floor = *origin_start + Duration::hours(1);
            *preview_end = (*origin_end + Duration::hours(hours)).max(floor);
        }
    }

    /// Release the pointer. Commits only if the end actually changed;
    /// an unchanged end is treated as a cancelled gesture.
    pub fn release(&mut self) -> Option<ResizeCommit> {
        let state = std::mem::replace(&mut self.state, State::Idle);
        let State::Resizing {
            event_id,
            origin_end,
            preview_end,
            ..
        } = state
        else {
            return None;
        };
        if preview_end == origin_end {
            return None;
        }
        Some(ResizeCommit {
            event_id,
            new_end: preview_end,
        })
    }

    /// Abandon the gesture without committing.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }
}
