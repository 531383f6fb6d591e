//! Month-view occupancy grid.
//!
//! Builds the 42 day-cells (6 weeks, Sunday-first) the calendar renders
//! for a displayed month, classifying each date against the loaded
//! appointment set. Canceled appointments do not occupy slots.
//!
//! The counts reflect whatever appointment slice the caller holds, which
//! is a client-side cache and may be stale relative to the backend; the
//! grid is recomputed from scratch on every navigation or data change.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::{AppointmentStatus, AppointmentSummary};

/// A day stops being offered as free once it holds this many
/// non-canceled appointments.
pub const DAILY_CAPACITY: usize = 8;

/// 6 weeks of 7 days, enough for any month at any starting weekday.
pub const GRID_CELLS: usize = 42;

/// One square of the month view with its derived occupancy state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_displayed_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub appointment_count: usize,
    pub is_full: bool,
    pub is_free: bool,
}

/// Classify the 42 cells of the month containing `displayed`, in
/// row-major order starting from the Sunday on or before the 1st.
///
/// A cell is free only when it has no appointments, belongs to the
/// displayed month and is not in the past.
pub fn month_grid(
    appointments: &[AppointmentSummary],
    today: NaiveDate,
    selected: Option<NaiveDate>,
    displayed: NaiveDate,
) -> Vec<DayCell> {
    let first = displayed.with_day(1).unwrap(); // day 1 exists in every month
    let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));

    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let appointment_count = appointments
                .iter()
                .filter(|a| {
                    a.date_time.date() == date && a.status != AppointmentStatus::Canceled
                })
                .count();

            let in_displayed_month =
                date.month() == displayed.month() && date.year() == displayed.year();

            DayCell {
                date,
                in_displayed_month,
                is_today: date == today,
                is_selected: selected == Some(date),
                appointment_count,
                is_full: appointment_count >= DAILY_CAPACITY,
                is_free: appointment_count == 0 && in_displayed_month && date >= today,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn booking(date_time: NaiveDateTime, status: AppointmentStatus) -> AppointmentSummary {
        AppointmentSummary {
            id: 1,
            patient_name: "Ana Souza".into(),
            dentist_name: "Dr. Lima".into(),
            date_time,
            status,
            phone: None,
        }
    }

    fn cell_for<'a>(grid: &'a [DayCell], date: NaiveDate) -> &'a DayCell {
        grid.iter().find(|c| c.date == date).unwrap()
    }

    #[test]
    fn grid_always_has_42_cells() {
        let today = date(2026, 2, 10);
        // February (shortest), a 31-day month and one starting on Sunday.
        for displayed in [date(2026, 2, 1), date(2026, 7, 15), date(2026, 3, 1)] {
            let grid = month_grid(&[], today, None, displayed);
            assert_eq!(grid.len(), GRID_CELLS);
        }
    }

    #[test]
    fn grid_starts_on_the_sunday_before_the_first() {
        // March 2026 starts on a Sunday, so the grid starts on the 1st.
        let grid = month_grid(&[], date(2026, 3, 10), None, date(2026, 3, 1));
        assert_eq!(grid[0].date, date(2026, 3, 1));

        // April 2026 starts on a Wednesday; the grid reaches back to
        // Sunday March 29.
        let grid = month_grid(&[], date(2026, 3, 10), None, date(2026, 4, 1));
        assert_eq!(grid[0].date, date(2026, 3, 29));
        assert!(!grid[0].in_displayed_month);
        assert!(cell_for(&grid, date(2026, 4, 1)).in_displayed_month);
    }

    #[test]
    fn grid_is_row_major_and_contiguous() {
        let grid = month_grid(&[], date(2026, 3, 10), None, date(2026, 4, 1));
        for pair in grid.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn counts_exclude_canceled_appointments() {
        let day = date(2026, 3, 5);
        let appointments = vec![
            booking(at(2026, 3, 5, 9), AppointmentStatus::Scheduled),
            booking(at(2026, 3, 5, 10), AppointmentStatus::Confirmed),
            booking(at(2026, 3, 5, 11), AppointmentStatus::Canceled),
            booking(at(2026, 3, 6, 9), AppointmentStatus::Scheduled),
        ];

        let grid = month_grid(&appointments, date(2026, 3, 1), None, day);
        assert_eq!(cell_for(&grid, day).appointment_count, 2);
        assert_eq!(cell_for(&grid, date(2026, 3, 6)).appointment_count, 1);
    }

    #[test]
    fn nine_bookings_make_a_day_full() {
        let appointments: Vec<_> = (9..18)
            .map(|h| booking(at(2026, 3, 5, h), AppointmentStatus::Scheduled))
            .collect();
        assert_eq!(appointments.len(), 9);

        let grid = month_grid(&appointments, date(2026, 3, 1), None, date(2026, 3, 5));
        let cell = cell_for(&grid, date(2026, 3, 5));
        assert!(cell.is_full);
        assert!(!cell.is_free);
        assert_eq!(cell.appointment_count, 9);
    }

    #[test]
    fn exactly_capacity_is_full() {
        let appointments: Vec<_> = (9..17)
            .map(|h| booking(at(2026, 3, 5, h), AppointmentStatus::Scheduled))
            .collect();
        assert_eq!(appointments.len(), DAILY_CAPACITY);

        let grid = month_grid(&appointments, date(2026, 3, 1), None, date(2026, 3, 5));
        assert!(cell_for(&grid, date(2026, 3, 5)).is_full);
    }

    #[test]
    fn empty_future_day_in_month_is_free() {
        let grid = month_grid(&[], date(2026, 3, 10), None, date(2026, 3, 1));
        let cell = cell_for(&grid, date(2026, 3, 20));
        assert!(cell.is_free);
        assert!(!cell.is_full);
    }

    #[test]
    fn empty_past_day_is_not_free() {
        let grid = month_grid(&[], date(2026, 3, 10), None, date(2026, 3, 1));
        assert!(!cell_for(&grid, date(2026, 3, 4)).is_free);
    }

    #[test]
    fn empty_day_outside_displayed_month_is_not_free() {
        // April grid shows the tail of March; those cells are never free.
        let grid = month_grid(&[], date(2026, 3, 10), None, date(2026, 4, 1));
        let spill = cell_for(&grid, date(2026, 3, 30));
        assert!(!spill.in_displayed_month);
        assert!(!spill.is_free);
    }

    #[test]
    fn today_counts_as_free_when_empty() {
        let today = date(2026, 3, 10);
        let grid = month_grid(&[], today, None, today);
        let cell = cell_for(&grid, today);
        assert!(cell.is_today);
        assert!(cell.is_free);
    }

    #[test]
    fn selected_date_is_marked() {
        let grid = month_grid(&[], date(2026, 3, 1), Some(date(2026, 3, 12)), date(2026, 3, 1));
        assert!(cell_for(&grid, date(2026, 3, 12)).is_selected);
        assert_eq!(grid.iter().filter(|c| c.is_selected).count(), 1);
    }
}
