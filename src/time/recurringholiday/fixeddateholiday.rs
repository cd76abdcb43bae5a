use std::collections::HashMap;

use chrono::{
    NaiveDate,
    Weekday
};
use serde::Deserialize;

use crate::error::CalendarError;
use crate::time::utility::{date_of, validate_month_day};

use super::recurringholiday::{RecurringHoliday, ResolvedHolidays};
use super::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32,
    #[serde(default)]
    weekend_adjustment_map: HashMap<Weekday, WeekendAdjustment>
}

/// Same month and day every year. Without a weekend adjustment the date is
/// taken literally; with one, the observed date may land in a neighbouring
/// year and is reported there as is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FixedDateHolidayJsonProp")]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    weekend_adjustment_rules: WeekendAdjustmentRule
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32, weekend_adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> Result<FixedDateHoliday, CalendarError> {
        validate_month_day(month, day)?;
        Ok(FixedDateHoliday {
            month,
            day,
            weekend_adjustment_rules: WeekendAdjustmentRule::new(weekend_adjustment_map)
        })
    }

    /// Unadjusted rule for a pair already known to be valid.
    pub(crate) const fn literal(month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday {
            month,
            day,
            weekend_adjustment_rules: WeekendAdjustmentRule::unadjusted()
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekend_adjustment_rules(&self) -> &WeekendAdjustmentRule {
        &self.weekend_adjustment_rules
    }
}

impl TryFrom<FixedDateHolidayJsonProp> for FixedDateHoliday {
    type Error = CalendarError;

    fn try_from(json_prop: FixedDateHolidayJsonProp) -> Result<Self, Self::Error> {
        FixedDateHoliday::new(json_prop.month, json_prop.day, &json_prop.weekend_adjustment_map)
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32, _resolved: &ResolvedHolidays) -> Result<NaiveDate, CalendarError> {
        let d = date_of(year, self.month, self.day)?;
        self.weekend_adjustment_rules.adjust(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn literal_date_ignores_weekday() {
        let new_year = FixedDateHoliday::literal(1, 1);
        // 2028-01-01 is a Saturday; it stays put.
        assert_eq!(new_year.get_holiday(2028, &HashMap::new()).unwrap(), ymd(2028, 1, 1));
    }

    #[test]
    fn rejects_invalid_month_and_day() {
        assert_eq!(
            FixedDateHoliday::new(0, 1, &HashMap::new()).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            FixedDateHoliday::new(11, 31, &HashMap::new()).unwrap_err(),
            CalendarError::InvalidDay { month: 11, day: 31, max_day: 30 }
        );
    }

    #[test]
    fn leap_day_fails_in_common_year() {
        let leap_day = FixedDateHoliday::new(2, 29, &HashMap::new()).unwrap();
        assert_eq!(leap_day.get_holiday(2024, &HashMap::new()).unwrap(), ymd(2024, 2, 29));
        assert_eq!(
            leap_day.get_holiday(2025, &HashMap::new()).unwrap_err(),
            CalendarError::InvalidDate { year: 2025, month: 2, day: 29 }
        );
    }

    #[test]
    fn observed_new_year_can_fall_in_previous_year() {
        let mut map = HashMap::new();
        map.insert(Weekday::Sat, WeekendAdjustment::PreviousWeekday);
        map.insert(Weekday::Sun, WeekendAdjustment::NextWeekday);
        let new_year = FixedDateHoliday::new(1, 1, &map).unwrap();
        assert_eq!(new_year.get_holiday(2028, &HashMap::new()).unwrap(), ymd(2027, 12, 31));
    }

    #[test]
    fn deserializes_with_validation() {
        let holiday: FixedDateHoliday = serde_json::from_str(r#"{"month": 7, "day": 4}"#).unwrap();
        assert_eq!(holiday, FixedDateHoliday::literal(7, 4));

        let err = serde_json::from_str::<FixedDateHoliday>(r#"{"month": 2, "day": 30}"#).unwrap_err();
        assert!(err.to_string().contains("invalid day: 30 for month 2"));
    }
}
