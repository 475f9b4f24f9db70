use std::collections::HashSet;

use chrono::{Duration, Months, NaiveDate};

use super::project::Project;

/// Which grid the calendar is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Day,
    Week,
    Month,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Day => "Day",
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

/// Owns "what is currently displayed": the anchor date, the active view
/// mode, and the project visibility filter.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub anchor_date: NaiveDate,
    pub view_mode: ViewMode,
    /// `None` means "defer to each project's own visible flag".
    pub visible_project_ids: Option<HashSet<String>>,
    /// Single-project focus; when set it overrides the visible set.
    pub selected_project_id: Option<String>,
}

impl ViewState {
    pub fn new(anchor_date: NaiveDate) -> Self {
        Self {
            anchor_date,
            view_mode: ViewMode::Month,
            visible_project_ids: None,
            selected_project_id: None,
        }
    }

    /// Shift the anchor by one unit of the current view mode. Month
    /// navigation clamps to the last valid day of the target month.
    pub fn navigate(&mut self, direction: NavDirection) {
        let forward = direction == NavDirection::Next;
        self.anchor_date = match self.view_mode {
            ViewMode::Day => {
                self.anchor_date + Duration::days(if forward { 1 } else { -1 })
            }
            ViewMode::Week => {
                self.anchor_date + Duration::days(if forward { 7 } else { -7 })
            }
            ViewMode::Month => {
                let shifted = if forward {
                    self.anchor_date.checked_add_months(Months::new(1))
                } else {
                    self.anchor_date.checked_sub_months(Months::new(1))
                };
                shifted.unwrap_or(self.anchor_date)
            }
        };
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_anchor_date(&mut self, date: NaiveDate) {
        self.anchor_date = date;
    }

    pub fn go_to_today(&mut self) {
        self.anchor_date = chrono::Local::now().date_naive();
    }

    /// Human label for the visible range, e.g. "March 2025" or
    /// "Mar 9 – Mar 15, 2025".
    pub fn range_label(&self) -> String {
        match self.view_mode {
            ViewMode::Day => self.anchor_date.format("%A, %B %-d, %Y").to_string(),
            ViewMode::Week => {
                let start = super::grid::week_start(self.anchor_date);
                let end = start + Duration::days(6);
                format!(
                    "{} – {}",
                    start.format("%b %-d"),
                    end.format("%b %-d, %Y")
                )
            }
            ViewMode::Month => self.anchor_date.format("%B %Y").to_string(),
        }
    }

    /// Toggle one project in the session filter. Starting from "all
    /// visible", the first toggle materializes the set from `all_ids`
    /// minus the toggled project.
    pub fn toggle_project_visibility<'a>(
        &mut self,
        id: &str,
        all_ids: impl Iterator<Item = &'a str>,
    ) {
        let set = self.visible_project_ids.get_or_insert_with(|| {
            all_ids.map(str::to_string).collect()
        });
        if !set.remove(id) {
            set.insert(id.to_string());
        }
    }

    /// Drop the session filter and go back to per-project flags.
    pub fn clear_visibility_filter(&mut self) {
        self.visible_project_ids = None;
    }

    /// Toggle single-project focus on or off.
    pub fn focus_project(&mut self, id: &str) {
        if self.selected_project_id.as_deref() == Some(id) {
            self.selected_project_id = None;
        } else {
            self.selected_project_id = Some(id.to_string());
        }
    }

    /// The effective visibility of one project, after focus override and
    /// session filter are applied.
    pub fn is_project_visible(&self, project: &Project) -> bool {
        if let Some(focus) = &self.selected_project_id {
            return *focus == project.id;
        }
        match &self.visible_project_ids {
            Some(set) => set.contains(&project.id),
            None => project.visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_and_week_navigation_shift_by_unit() {
        let mut view = ViewState::new(date(2025, 3, 10));
        view.set_view_mode(ViewMode::Day);
        view.navigate(NavDirection::Next);
        assert_eq!(view.anchor_date, date(2025, 3, 11));

        view.set_view_mode(ViewMode::Week);
        view.navigate(NavDirection::Prev);
        assert_eq!(view.anchor_date, date(2025, 3, 4));
    }

    #[test]
    fn month_navigation_clamps_day_of_month() {
        let mut view = ViewState::new(date(2025, 1, 31));
        view.set_view_mode(ViewMode::Month);
        view.navigate(NavDirection::Next);
        assert_eq!(view.anchor_date, date(2025, 2, 28));
        view.navigate(NavDirection::Next);
        // The clamp sticks; the day-of-month is not restored.
        assert_eq!(view.anchor_date, date(2025, 3, 28));
    }

    #[test]
    fn range_label_matches_view_mode() {
        let mut view = ViewState::new(date(2025, 3, 10));
        assert_eq!(view.range_label(), "March 2025");
        view.set_view_mode(ViewMode::Week);
        assert_eq!(view.range_label(), "Mar 9 – Mar 15, 2025");
        view.set_view_mode(ViewMode::Day);
        assert_eq!(view.range_label(), "Monday, March 10, 2025");
    }

    #[test]
    fn focus_overrides_visibility_filter() {
        let mut view = ViewState::new(date(2025, 3, 10));
        let a = Project::new("A", "#111111");
        let b = Project::new("B", "#222222");
        view.toggle_project_visibility(&a.id, [a.id.as_str(), b.id.as_str()].into_iter());
        assert!(!view.is_project_visible(&a));
        assert!(view.is_project_visible(&b));

        view.focus_project(&a.id);
        assert!(view.is_project_visible(&a));
        assert!(!view.is_project_visible(&b));

        view.focus_project(&a.id);
        assert!(!view.is_project_visible(&a));
    }

    #[test]
    fn hidden_project_flag_applies_without_filter() {
        let view = ViewState::new(date(2025, 3, 10));
        let mut a = Project::new("A", "#111111");
        assert!(view.is_project_visible(&a));
        a.visible = false;
        assert!(!view.is_project_visible(&a));
    }
}
