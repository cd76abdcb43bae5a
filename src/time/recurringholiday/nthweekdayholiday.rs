use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::time::utility::{
    date_of,
    days_backward,
    days_forward,
    shift_days,
    validate_month_day
};

use super::recurringholiday::{RecurringHoliday, ResolvedHolidays};

/// Which way the weekday search runs from the anchor date. Both directions
/// include the anchor itself.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum SearchDirection {
    Forward,
    Backward
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    day: u32,
    weekday: Weekday,
    #[serde(default = "first_occurrence")]
    n: u8,
    direction: SearchDirection
}

fn first_occurrence() -> u8 {
    1
}

/// The `n`-th `weekday` counted from an anchor date, e.g. the last Monday
/// of May is the first Monday searching backward from May 31.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "NthWeekdayHolidayJsonProp")]
pub struct NthWeekdayHoliday {
    month: u32,
    day: u32,
    weekday: Weekday,
    n: u8,
    direction: SearchDirection
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, day: u32, weekday: Weekday, n: u8, direction: SearchDirection) -> Result<NthWeekdayHoliday, CalendarError> {
        validate_month_day(month, day)?;
        if !(1..=5).contains(&n) {
            return Err(CalendarError::InvalidOrdinal { n });
        }
        Ok(NthWeekdayHoliday { month, day, weekday, n, direction })
    }

    pub(crate) const fn literal(month: u32, day: u32, weekday: Weekday, n: u8, direction: SearchDirection) -> NthWeekdayHoliday {
        NthWeekdayHoliday { month, day, weekday, n, direction }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }
}

impl TryFrom<NthWeekdayHolidayJsonProp> for NthWeekdayHoliday {
    type Error = CalendarError;

    fn try_from(json_prop: NthWeekdayHolidayJsonProp) -> Result<Self, Self::Error> {
        NthWeekdayHoliday::new(json_prop.month, json_prop.day, json_prop.weekday, json_prop.n, json_prop.direction)
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_holiday(&self, year: i32, _resolved: &ResolvedHolidays) -> Result<NaiveDate, CalendarError> {
        let anchor = date_of(year, self.month, self.day)?;
        let extra_weeks = 7 * (self.n as i64 - 1);
        let shift = match self.direction {
            SearchDirection::Forward => days_forward(anchor.weekday(), self.weekday) + extra_weeks,
            SearchDirection::Backward => -(days_backward(anchor.weekday(), self.weekday) + extra_weeks)
        };
        shift_days(anchor, shift)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn last_monday_of_may() {
        let memorial = NthWeekdayHoliday::new(5, 31, Weekday::Mon, 1, SearchDirection::Backward).unwrap();
        assert_eq!(memorial.get_holiday(2025, &HashMap::new()).unwrap(), ymd(2025, 5, 26));
        // May 31 2027 is itself a Monday.
        assert_eq!(memorial.get_holiday(2027, &HashMap::new()).unwrap(), ymd(2027, 5, 31));
    }

    #[test]
    fn first_monday_of_september() {
        let labor = NthWeekdayHoliday::new(9, 1, Weekday::Mon, 1, SearchDirection::Forward).unwrap();
        // Sep 1 2025 is itself a Monday.
        assert_eq!(labor.get_holiday(2025, &HashMap::new()).unwrap(), ymd(2025, 9, 1));
        assert_eq!(labor.get_holiday(2026, &HashMap::new()).unwrap(), ymd(2026, 9, 7));
    }

    #[test]
    fn fourth_thursday_of_november() {
        let thanksgiving = NthWeekdayHoliday::new(11, 1, Weekday::Thu, 4, SearchDirection::Forward).unwrap();
        assert_eq!(thanksgiving.get_holiday(2024, &HashMap::new()).unwrap(), ymd(2024, 11, 28));
        assert_eq!(thanksgiving.get_holiday(2025, &HashMap::new()).unwrap(), ymd(2025, 11, 27));
        assert_eq!(thanksgiving.get_holiday(2026, &HashMap::new()).unwrap(), ymd(2026, 11, 26));
    }

    #[test]
    fn rejects_out_of_range_ordinal() {
        assert_eq!(
            NthWeekdayHoliday::new(11, 1, Weekday::Thu, 0, SearchDirection::Forward).unwrap_err(),
            CalendarError::InvalidOrdinal { n: 0 }
        );
        assert_eq!(
            NthWeekdayHoliday::new(11, 1, Weekday::Thu, 6, SearchDirection::Forward).unwrap_err(),
            CalendarError::InvalidOrdinal { n: 6 }
        );
    }

    #[test]
    fn deserializes_with_default_ordinal() {
        let json = r#"{"month": 9, "day": 1, "weekday": "Mon", "direction": "Forward"}"#;
        let labor: NthWeekdayHoliday = serde_json::from_str(json).unwrap();
        assert_eq!(labor.n(), 1);
        assert_eq!(labor, NthWeekdayHoliday::literal(9, 1, Weekday::Mon, 1, SearchDirection::Forward));
    }
}
