use chrono::{NaiveDate, TimeDelta, Weekday};

use crate::error::CalendarError;

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Checks a `(month, day)` pair that has to exist in at least one year.
/// February 29 is accepted; evaluating it for a common year fails later.
pub fn validate_month_day(month: u32, day: u32) -> Result<(), CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let max_day = days_of_month(2000, month);
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay { month, day, max_day });
    }
    Ok(())
}

pub fn date_of(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Moves `d` by a signed number of days.
pub fn shift_days(d: NaiveDate, shift_days: i64) -> Result<NaiveDate, CalendarError> {
    TimeDelta::try_days(shift_days)
        .and_then(|delta| d.checked_add_signed(delta))
        .ok_or(CalendarError::DateOutOfRange { date: d, shift_days })
}

/// Days to walk forward from `from` to reach `to`, 0 when they coincide.
#[inline]
pub fn days_forward(from: Weekday, to: Weekday) -> i64 {
    ((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7) as i64
}

/// Days to walk backward from `from` to reach `to`, 0 when they coincide.
#[inline]
pub fn days_backward(from: Weekday, to: Weekday) -> i64 {
    days_forward(to, from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap(2024));
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(!is_leap(2025));
    }

    #[test]
    fn february_length() {
        assert_eq!(days_of_month(2024, 2), 29);
        assert_eq!(days_of_month(2025, 2), 28);
        assert_eq!(days_of_month(2025, 12), 31);
    }

    #[test]
    fn month_day_validation() {
        assert!(validate_month_day(2, 29).is_ok());
        assert_eq!(
            validate_month_day(13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            validate_month_day(4, 31).unwrap_err(),
            CalendarError::InvalidDay { month: 4, day: 31, max_day: 30 }
        );
        assert_eq!(
            validate_month_day(1, 0).unwrap_err(),
            CalendarError::InvalidDay { month: 1, day: 0, max_day: 31 }
        );
    }

    #[test]
    fn date_of_reports_unrepresentable_dates() {
        assert_eq!(
            date_of(2025, 2, 29).unwrap_err(),
            CalendarError::InvalidDate { year: 2025, month: 2, day: 29 }
        );
        assert_eq!(date_of(2024, 2, 29).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn shift_crosses_year_boundary() {
        let d = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(shift_days(d, 1).unwrap(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(shift_days(d, -365).unwrap(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn shift_past_max_date_fails() {
        let err = shift_days(NaiveDate::MAX, 1).unwrap_err();
        assert_eq!(err, CalendarError::DateOutOfRange { date: NaiveDate::MAX, shift_days: 1 });
    }

    #[test]
    fn weekday_distances() {
        assert_eq!(days_forward(Weekday::Sat, Weekday::Thu), 5);
        assert_eq!(days_forward(Weekday::Mon, Weekday::Mon), 0);
        assert_eq!(days_backward(Weekday::Sat, Weekday::Mon), 5);
        assert_eq!(days_backward(Weekday::Mon, Weekday::Mon), 0);
        assert_eq!(days_backward(Weekday::Sun, Weekday::Mon), 6);
    }
}
