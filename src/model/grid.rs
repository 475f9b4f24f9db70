use chrono::{Datelike, Duration, NaiveDate};

/// One addressable slot in the calendar grid: an hour in day/week views,
/// a day in the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// `Some(0..=23)` for hour slots, `None` for month cells.
    pub hour: Option<u32>,
    /// Cell belongs to the previous/next month in the month grid.
    pub outside: bool,
}

/// The month grid is always rectangular: 6 rows of 7 days.
pub const MONTH_GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;
pub const HOURS_PER_DAY: usize = 24;

/// Sunday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// The seven days of the week containing `anchor`, Sunday first.
pub fn week_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(anchor);
    (0..DAYS_PER_WEEK as i64)
        .map(|d| start + Duration::days(d))
        .collect()
}

/// 24 hourly cells for a single day.
pub fn day_cells(anchor: NaiveDate) -> Vec<GridCell> {
    (0..HOURS_PER_DAY as u32)
        .map(|hour| GridCell {
            date: anchor,
            hour: Some(hour),
            outside: false,
        })
        .collect()
}

/// 7 columns x 24 hourly rows, day-major, Sunday first.
pub fn week_cells(anchor: NaiveDate) -> Vec<GridCell> {
    week_days(anchor)
        .into_iter()
        .flat_map(|date| {
            (0..HOURS_PER_DAY as u32).map(move |hour| GridCell {
                date,
                hour: Some(hour),
                outside: false,
            })
        })
        .collect()
}

/// Exactly 42 day cells covering the month of `anchor`: leading cells walk
/// back to the Sunday on or before the 1st, trailing cells run into the
/// next month until the quota is filled. Cells outside the target month
/// are flagged but stay interactive.
pub fn month_cells(anchor: NaiveDate) -> Vec<GridCell> {
    let first = anchor.with_day(1).expect("day 1 exists in every month");
    let grid_start = week_start(first);
    (0..MONTH_GRID_CELLS as i64)
        .map(|i| {
            let date = grid_start + Duration::days(i);
            GridCell {
                date,
                hour: None,
                outside: date.month() != anchor.month() || date.year() != anchor.year(),
            }
        })
        .collect()
}

/// Date equality ignoring time-of-day. `today` is captured once per
/// render so a midnight rollover cannot split one frame.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_view_is_24_hourly_cells() {
        let cells = day_cells(date(2025, 3, 10));
        assert_eq!(cells.len(), 24);
        assert_eq!(cells[0].hour, Some(0));
        assert_eq!(cells[23].hour, Some(23));
        assert!(cells.iter().all(|c| c.date == date(2025, 3, 10)));
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2025-03-12 is a Wednesday.
        assert_eq!(week_start(date(2025, 3, 12)), date(2025, 3, 9));
        // A Sunday maps to itself.
        assert_eq!(week_start(date(2025, 3, 9)), date(2025, 3, 9));
    }

    #[test]
    fn week_view_is_seven_days_of_hour_cells() {
        let cells = week_cells(date(2025, 3, 12));
        assert_eq!(cells.len(), 7 * 24);
        assert_eq!(cells[0].date, date(2025, 3, 9));
        assert_eq!(cells[0].hour, Some(0));
        assert_eq!(cells[24].date, date(2025, 3, 10));
        assert_eq!(cells[7 * 24 - 1].date, date(2025, 3, 15));
        assert_eq!(cells[7 * 24 - 1].hour, Some(23));
    }

    // One month for each possible weekday of the 1st.
    #[test_case(2025, 6, 0 ; "june 2025 starts sunday")]
    #[test_case(2025, 9, 1 ; "september 2025 starts monday")]
    #[test_case(2025, 7, 2 ; "july 2025 starts tuesday")]
    #[test_case(2025, 10, 3 ; "october 2025 starts wednesday")]
    #[test_case(2025, 5, 4 ; "may 2025 starts thursday")]
    #[test_case(2025, 8, 5 ; "august 2025 starts friday")]
    #[test_case(2025, 3, 6 ; "march 2025 starts saturday")]
    fn month_grid_is_always_42_cells(year: i32, month: u32, leading: usize) {
        let anchor = date(year, month, 15);
        let cells = month_cells(anchor);
        assert_eq!(cells.len(), MONTH_GRID_CELLS);

        let in_month = cells.iter().filter(|c| !c.outside).count();
        let days_in_month = {
            let first = date(year, month, 1);
            let next = first.checked_add_months(chrono::Months::new(1)).unwrap();
            (next - first).num_days() as usize
        };
        assert_eq!(in_month, days_in_month);

        let lead = cells.iter().take_while(|c| c.outside).count();
        assert_eq!(lead, leading);
        let trail = cells.iter().rev().take_while(|c| c.outside).count();
        assert_eq!(lead + in_month + trail, MONTH_GRID_CELLS);

        // Grid runs contiguously day by day.
        for pair in cells.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn february_leap_year_still_fills_42() {
        let cells = month_cells(date(2024, 2, 15));
        assert_eq!(cells.len(), MONTH_GRID_CELLS);
        assert_eq!(cells.iter().filter(|c| !c.outside).count(), 29);
    }

    #[test]
    fn is_today_ignores_nothing_but_date() {
        let today = date(2025, 3, 10);
        assert!(is_today(date(2025, 3, 10), today));
        assert!(!is_today(date(2025, 3, 11), today));
    }
}
