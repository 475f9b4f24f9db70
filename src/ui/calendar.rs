use chrono::NaiveDate;
use egui::Ui;

use crate::interact::{DragCommit, DragController, ResizeCommit, ResizeController, Slot};
use crate::model::{Store, ViewMode, ViewState};

use super::{month_view, time_grid};

/// Everything the calendar views can ask of the app for one frame.
/// Mirrors the interaction-struct pattern of the chart panel.
#[derive(Debug, Clone, Default)]
pub struct CalendarInteraction {
    /// A drag gesture finished over a valid slot.
    pub drag_commit: Option<DragCommit>,
    /// A resize gesture finished with a changed end time.
    pub resize_commit: Option<ResizeCommit>,
    /// An event chip was clicked (open the editor).
    pub open_event: Option<String>,
    /// An empty slot was clicked (create an event there).
    pub create_at: Option<Slot>,
    /// An outside-month cell was clicked (navigate the grid there).
    pub navigate_to: Option<NaiveDate>,
}

/// Render the active calendar view and collect its interactions.
#[allow(clippy::too_many_arguments)]
pub fn show_calendar(
    store: &Store,
    view: &ViewState,
    drag: &mut DragController,
    resize: &mut ResizeController,
    show_holidays: bool,
    read_only: bool,
    ui: &mut Ui,
) -> CalendarInteraction {
    match view.view_mode {
        ViewMode::Month => {
            month_view::show_month_view(store, view, drag, show_holidays, read_only, ui)
        }
        ViewMode::Day | ViewMode::Week => {
            time_grid::show_time_grid(store, view, drag, resize, show_holidays, read_only, ui)
        }
    }
}
