//! Activity calendar: a fixed window of days ending today, each flagged by
//! whether any note was created on it.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::Serialize;

pub const CALENDAR_DAYS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub active: bool,
}

/// Cells for `[today - 99, today]`, oldest first.
pub fn build_calendar(today: NaiveDate, activity: &BTreeSet<NaiveDate>) -> Vec<CalendarCell> {
    (0..CALENDAR_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| CalendarCell {
            date,
            active: activity.contains(&date),
        })
        .collect()
}

/// Reduce backend date strings to whole days. Accepts plain dates and
/// date-times with or without fractional seconds; anything else is skipped.
pub fn parse_activity_dates<I, S>(raw: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|s| parse_day(s.as_ref()))
        .collect()
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date_time) = raw.parse::<NaiveDateTime>() {
        return Some(date_time.date());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_has_exactly_100_ascending_cells() {
        let today = day(2024, 3, 10);
        let cells = build_calendar(today, &BTreeSet::new());
        assert_eq!(cells.len(), 100);
        assert_eq!(cells.last().unwrap().date, today);
        assert!(cells.windows(2).all(|w| w[0].date < w[1].date));
        assert!(cells.iter().all(|c| !c.active));
    }

    #[test]
    fn test_window_edges() {
        let today = day(2024, 3, 10);
        let first = today - Days::new(99);
        let outside = today - Days::new(100);
        let activity: BTreeSet<_> = [first, outside, today].into_iter().collect();

        let cells = build_calendar(today, &activity);
        assert_eq!(cells[0], CalendarCell { date: first, active: true });
        assert!(cells.iter().all(|c| c.date != outside));
        assert_eq!(cells.iter().filter(|c| c.active).count(), 2);
    }

    #[test]
    fn test_rerun_with_different_today() {
        let activity: BTreeSet<_> = [day(2024, 1, 1)].into_iter().collect();
        let near = build_calendar(day(2024, 1, 5), &activity);
        let far = build_calendar(day(2024, 6, 1), &activity);
        assert!(near.iter().any(|c| c.active));
        assert!(far.iter().all(|c| !c.active));
    }

    #[test]
    fn test_parse_activity_dates() {
        let parsed = parse_activity_dates([
            "2024-05-01T10:20:30.123456",
            "2024-05-01T23:59:59",
            "2024-05-03",
            "not a date",
        ]);
        let expected: BTreeSet<_> = [day(2024, 5, 1), day(2024, 5, 3)].into_iter().collect();
        assert_eq!(parsed, expected);
    }
}
