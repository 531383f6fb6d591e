//! The clinic's fixed working-hours table and slot arithmetic.
//!
//! Monday to Friday the clinic sees patients 09:00-12:00 and
//! 14:00-18:00; Saturday 08:00-12:00; Sunday it is closed. Bookings are
//! hourly, exactly on the hour, and band boundaries are inclusive on
//! both sides. This table is not user-editable.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use std::ops::RangeInclusive;

/// Weekday morning band, hours inclusive.
pub const WEEKDAY_MORNING: RangeInclusive<u32> = 9..=12;
/// Weekday afternoon band, hours inclusive.
pub const WEEKDAY_AFTERNOON: RangeInclusive<u32> = 14..=18;
/// Saturday morning band, hours inclusive.
pub const SATURDAY_MORNING: RangeInclusive<u32> = 8..=12;

/// How far ahead the date picker offers dates.
pub const BOOKING_HORIZON_DAYS: i64 = 60;

/// True for Monday through Saturday; the clinic is closed on Sundays.
pub fn is_valid_appointment_date(date: NaiveDate) -> bool {
    date.weekday() != Weekday::Sun
}

/// True iff the instant is exactly on the hour and inside one of the
/// working bands for its weekday.
pub fn is_valid_appointment_time(at: NaiveDateTime) -> bool {
    let time = at.time();
    if time.minute() != 0 {
        return false;
    }

    let hour = time.hour();
    if at.date().weekday() == Weekday::Sat {
        SATURDAY_MORNING.contains(&hour)
    } else {
        WEEKDAY_MORNING.contains(&hour) || WEEKDAY_AFTERNOON.contains(&hour)
    }
}

/// The ordered hourly slots offered for a date: Saturday gets the
/// 08:00-12:00 band, every other day gets morning then afternoon.
/// Sunday is rejected by [`is_valid_appointment_date`] before slots are
/// ever offered, so it just yields the weekday bands.
pub fn time_slots(date: NaiveDate) -> Vec<NaiveTime> {
    let bands: &[RangeInclusive<u32>] = if date.weekday() == Weekday::Sat {
        &[SATURDAY_MORNING]
    } else {
        &[WEEKDAY_MORNING, WEEKDAY_AFTERNOON]
    };

    bands
        .iter()
        .flat_map(|band| band.clone())
        .map(on_the_hour)
        .collect()
}

/// `time_slots` rendered as the `"HH:00"` labels the booking form shows.
pub fn slot_labels(date: NaiveDate) -> Vec<String> {
    time_slots(date)
        .into_iter()
        .map(|t| t.format("%H:%M").to_string())
        .collect()
}

/// The next 60 calendar days starting tomorrow, keeping only days the
/// clinic is open, in ascending order.
pub fn available_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (1..=BOOKING_HORIZON_DAYS)
        .map(|offset| today + Duration::days(offset))
        .filter(|date| is_valid_appointment_date(*date))
        .collect()
}

fn on_the_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap() // hours come from the band table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    // 2026-03-01 is a Sunday; the 2nd through 7th run Monday to Saturday.

    #[test]
    fn every_day_but_sunday_is_bookable() {
        assert!(!is_valid_appointment_date(date(2026, 3, 1)));
        for day in 2..=7 {
            assert!(is_valid_appointment_date(date(2026, 3, day)));
        }
    }

    #[test]
    fn weekday_band_hours_are_inclusive() {
        for hour in [9, 10, 11, 12, 14, 15, 16, 17, 18] {
            assert!(
                is_valid_appointment_time(at(2026, 3, 3, hour, 0)),
                "hour {hour} should be bookable on a Tuesday"
            );
        }
    }

    #[test]
    fn weekday_rejects_lunch_and_early_hours() {
        assert!(!is_valid_appointment_time(at(2026, 3, 3, 8, 0)));
        assert!(!is_valid_appointment_time(at(2026, 3, 3, 13, 0)));
        assert!(!is_valid_appointment_time(at(2026, 3, 3, 19, 0)));
    }

    #[test]
    fn saturday_band_hours_are_inclusive() {
        for hour in [8, 9, 10, 11, 12] {
            assert!(
                is_valid_appointment_time(at(2026, 3, 7, hour, 0)),
                "hour {hour} should be bookable on a Saturday"
            );
        }
        assert!(!is_valid_appointment_time(at(2026, 3, 7, 13, 0)));
        assert!(!is_valid_appointment_time(at(2026, 3, 7, 14, 0)));
    }

    #[test]
    fn only_exact_hours_are_bookable() {
        assert!(is_valid_appointment_time(at(2026, 3, 3, 10, 0)));
        assert!(!is_valid_appointment_time(at(2026, 3, 3, 10, 30)));
        assert!(!is_valid_appointment_time(at(2026, 3, 3, 10, 1)));
    }

    #[test]
    fn tuesday_slots_are_morning_then_afternoon() {
        assert_eq!(
            slot_labels(date(2026, 3, 3)),
            vec![
                "09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00", "18:00",
            ]
        );
    }

    #[test]
    fn saturday_slots_are_the_early_morning_band() {
        assert_eq!(
            slot_labels(date(2026, 3, 7)),
            vec!["08:00", "09:00", "10:00", "11:00", "12:00"]
        );
    }

    #[test]
    fn slots_are_deterministic_per_date() {
        let d = date(2026, 3, 3);
        assert_eq!(time_slots(d), time_slots(d));
    }

    #[test]
    fn available_dates_start_tomorrow_and_skip_sundays() {
        // Saturday, so the first offered date is the following Monday.
        let today = date(2026, 3, 7);
        let dates = available_dates(today);

        assert_eq!(dates.first(), Some(&date(2026, 3, 9)));
        assert!(dates.iter().all(|d| *d > today));
        assert!(dates.iter().all(|d| d.weekday() != Weekday::Sun));
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn available_dates_cover_sixty_days_minus_sundays() {
        let today = date(2026, 3, 2);
        let dates = available_dates(today);

        // 60 consecutive days contain 8 or 9 Sundays.
        assert!(dates.len() >= 51 && dates.len() <= 52, "got {}", dates.len());
        assert!(dates.iter().all(|d| (*d - today).num_days() <= 60));
    }
}
