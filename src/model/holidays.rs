use chrono::NaiveDate;

/// Static holiday table keyed by ISO date, covering 2024 through 2028.
/// Compiled in; the overlay toggle only controls rendering.
const HOLIDAYS: &[(&str, &str)] = &[
    ("2024-01-01", "New Year's Day"),
    ("2024-01-15", "Martin Luther King Jr. Day"),
    ("2024-02-19", "Presidents' Day"),
    ("2024-05-27", "Memorial Day"),
    ("2024-06-19", "Juneteenth"),
    ("2024-07-04", "Independence Day"),
    ("2024-09-02", "Labor Day"),
    ("2024-11-11", "Veterans Day"),
    ("2024-11-28", "Thanksgiving"),
    ("2024-12-25", "Christmas Day"),
    ("2025-01-01", "New Year's Day"),
    ("2025-01-20", "Martin Luther King Jr. Day"),
    ("2025-02-17", "Presidents' Day"),
    ("2025-05-26", "Memorial Day"),
    ("2025-06-19", "Juneteenth"),
    ("2025-07-04", "Independence Day"),
    ("2025-09-01", "Labor Day"),
    ("2025-11-11", "Veterans Day"),
    ("2025-11-27", "Thanksgiving"),
    ("2025-12-25", "Christmas Day"),
    ("2026-01-01", "New Year's Day"),
    ("2026-01-19", "Martin Luther King Jr. Day"),
    ("2026-02-16", "Presidents' Day"),
    ("2026-05-25", "Memorial Day"),
    ("2026-06-19", "Juneteenth"),
    ("2026-07-04", "Independence Day"),
    ("2026-09-07", "Labor Day"),
    ("2026-11-11", "Veterans Day"),
    ("2026-11-26", "Thanksgiving"),
    ("2026-12-25", "Christmas Day"),
    ("2027-01-01", "New Year's Day"),
    ("2027-01-18", "Martin Luther King Jr. Day"),
    ("2027-02-15", "Presidents' Day"),
    ("2027-05-31", "Memorial Day"),
    ("2027-06-19", "Juneteenth"),
    ("2027-07-04", "Independence Day"),
    ("2027-09-06", "Labor Day"),
    ("2027-11-11", "Veterans Day"),
    ("2027-11-25", "Thanksgiving"),
    ("2027-12-25", "Christmas Day"),
    ("2028-01-01", "New Year's Day"),
    ("2028-01-17", "Martin Luther King Jr. Day"),
    ("2028-02-21", "Presidents' Day"),
    ("2028-05-29", "Memorial Day"),
    ("2028-06-19", "Juneteenth"),
    ("2028-07-04", "Independence Day"),
    ("2028-09-04", "Labor Day"),
    ("2028-11-11", "Veterans Day"),
    ("2028-11-23", "Thanksgiving"),
    ("2028-12-25", "Christmas Day"),
];

/// The named holiday on `date`, if any.
pub fn holiday_on(date: NaiveDate) -> Option<&'static str> {
    let key = date.format("%Y-%m-%d").to_string();
    HOLIDAYS
        .iter()
        .find(|(day, _)| *day == key)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn known_holidays_resolve() {
        assert_eq!(holiday_on(date(2025, 7, 4)), Some("Independence Day"));
        assert_eq!(holiday_on(date(2025, 11, 27)), Some("Thanksgiving"));
    }

    #[test]
    fn ordinary_days_and_out_of_span_dates_are_none() {
        assert_eq!(holiday_on(date(2025, 3, 10)), None);
        assert_eq!(holiday_on(date(2031, 12, 25)), None);
    }

    #[test]
    fn table_entries_are_valid_iso_dates() {
        for (day, _) in HOLIDAYS {
            assert!(
                NaiveDate::parse_from_str(day, "%Y-%m-%d").is_ok(),
                "bad table entry: {day}"
            );
        }
    }
}
