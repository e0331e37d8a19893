// ============================================================
// CALENDAR BUCKETING
// ============================================================
// Turn a reference date + view mode into the ordered cells the
// scheduling grid renders

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::recruitment::Interview;

/// How many cells a month grid always holds: 6 full weeks of 7 columns.
pub const MONTH_GRID_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarView {
    Month,
    Week,
    Day,
}

/// One renderable cell of the scheduling grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for the previous/next-month padding cells of a month grid
    pub in_reference_month: bool,
    pub is_today: bool,
    /// Interviews whose calendar-local day matches this cell
    pub interviews: Vec<Interview>,
}

/// Current calendar day on this client. Bucketing compares calendar days
/// only, never timestamps.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Cells for the requested view, reference date, and interview list.
pub fn cells(
    view: CalendarView,
    reference: NaiveDate,
    interviews: &[Interview],
    today: NaiveDate,
) -> Vec<CalendarCell> {
    match view {
        CalendarView::Month => month_grid(reference, interviews, today),
        CalendarView::Week => week_row(reference, interviews, today),
        CalendarView::Day => vec![day_cell(reference, interviews, today)],
    }
}

/// 42-cell month grid, Sunday-first, padded with trailing days of the
/// previous month and leading days of the next so every row is full.
pub fn month_grid(
    reference: NaiveDate,
    interviews: &[Interview],
    today: NaiveDate,
) -> Vec<CalendarCell> {
    let first_of_month = reference.with_day(1).unwrap_or(reference);
    let offset = first_of_month.weekday().num_days_from_sunday() as u64;
    let grid_start = first_of_month
        .checked_sub_days(Days::new(offset))
        .unwrap_or(first_of_month);

    (0..MONTH_GRID_CELLS as u64)
        .filter_map(|i| grid_start.checked_add_days(Days::new(i)))
        .map(|date| CalendarCell {
            date,
            in_reference_month: date.month() == reference.month()
                && date.year() == reference.year(),
            is_today: date == today,
            interviews: interviews_on(interviews, date),
        })
        .collect()
}

/// Exactly 7 consecutive days from the Sunday of the reference week.
pub fn week_row(
    reference: NaiveDate,
    interviews: &[Interview],
    today: NaiveDate,
) -> Vec<CalendarCell> {
    let offset = reference.weekday().num_days_from_sunday() as u64;
    let sunday = reference
        .checked_sub_days(Days::new(offset))
        .unwrap_or(reference);

    (0..7u64)
        .filter_map(|i| sunday.checked_add_days(Days::new(i)))
        .map(|date| CalendarCell {
            date,
            in_reference_month: date.month() == reference.month()
                && date.year() == reference.year(),
            is_today: date == today,
            interviews: interviews_on(interviews, date),
        })
        .collect()
}

/// Single cell for the day view.
pub fn day_cell(reference: NaiveDate, interviews: &[Interview], today: NaiveDate) -> CalendarCell {
    CalendarCell {
        date: reference,
        in_reference_month: true,
        is_today: reference == today,
        interviews: interviews_on(interviews, reference),
    }
}

fn interviews_on(interviews: &[Interview], date: NaiveDate) -> Vec<Interview> {
    interviews
        .iter()
        .filter(|iv| iv.date == date)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn interview(id: i64, on: NaiveDate) -> Interview {
        Interview {
            id,
            application_id: id * 10,
            candidate_name: format!("Candidate {}", id),
            date: on,
            start_time: "10:00".to_string(),
            attended: None,
            selected: None,
        }
    }

    #[test]
    fn test_month_grid_is_always_42_cells() {
        for (y, m) in [(2025, 2), (2024, 2), (2025, 8), (2025, 12), (2026, 1)] {
            let grid = month_grid(date(y, m, 15), &[], date(2000, 1, 1));
            assert_eq!(grid.len(), MONTH_GRID_CELLS, "month {}-{}", y, m);
        }
    }

    #[test]
    fn test_day_one_lands_on_its_weekday_offset() {
        // February 2025 starts on a Saturday: offset 6 in a Sunday-first row
        let grid = month_grid(date(2025, 2, 10), &[], date(2000, 1, 1));
        assert_eq!(grid[6].date, date(2025, 2, 1));
        assert!(grid[6].in_reference_month);
        assert!(!grid[5].in_reference_month);

        // June 2025 starts on a Sunday: no leading padding
        let grid = month_grid(date(2025, 6, 1), &[], date(2000, 1, 1));
        assert_eq!(grid[0].date, date(2025, 6, 1));
    }

    #[test]
    fn test_month_grid_pads_with_neighbor_months() {
        let grid = month_grid(date(2025, 8, 20), &[], date(2000, 1, 1));
        // August 2025 starts on a Friday
        assert_eq!(grid[0].date, date(2025, 7, 27));
        assert!(!grid[0].in_reference_month);
        assert_eq!(grid[41].date, date(2025, 9, 6));
        assert!(!grid[41].in_reference_month);
    }

    #[test]
    fn test_week_row_starts_on_sunday() {
        // 2025-08-28 is a Thursday
        let row = week_row(date(2025, 8, 28), &[], date(2000, 1, 1));
        assert_eq!(row.len(), 7);
        assert_eq!(row[0].date, date(2025, 8, 24));
        assert_eq!(row[6].date, date(2025, 8, 30));
    }

    #[test]
    fn test_interviews_bucket_by_calendar_day() {
        let interviews = vec![
            interview(1, date(2025, 8, 28)),
            interview(2, date(2025, 8, 28)),
            interview(3, date(2025, 8, 29)),
        ];
        let row = week_row(date(2025, 8, 28), &interviews, date(2000, 1, 1));

        assert_eq!(row[4].interviews.len(), 2); // Thursday
        assert_eq!(row[5].interviews.len(), 1); // Friday
        assert!(row[0].interviews.is_empty());
    }

    #[test]
    fn test_today_flag_uses_day_equality() {
        let today = date(2025, 8, 28);
        let grid = month_grid(date(2025, 8, 1), &[], today);
        let marked: Vec<_> = grid.iter().filter(|c| c.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, today);
    }

    #[test]
    fn test_day_view_is_single_cell() {
        let on = date(2025, 8, 28);
        let view = cells(CalendarView::Day, on, &[interview(1, on)], on);
        assert_eq!(view.len(), 1);
        assert!(view[0].is_today);
        assert_eq!(view[0].interviews.len(), 1);
    }
}
