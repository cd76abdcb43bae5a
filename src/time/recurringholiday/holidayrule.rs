use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::CalendarError;

use super::fixeddateholiday::FixedDateHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::offsetholiday::OffsetHoliday;
use super::recurringholiday::{RecurringHoliday, ResolvedHolidays};

/// The closed set of rule kinds a holiday table is built from. The JSON
/// form carries the kind in a `holiday_type` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "holiday_type")]
pub enum HolidayRule {
    FixedDate(FixedDateHoliday),
    NthWeekday(NthWeekdayHoliday),
    OffsetFromHoliday(OffsetHoliday)
}

impl HolidayRule {
    /// Name of the holiday this rule is computed from, if any.
    pub fn depends_on(&self) -> Option<&str> {
        match self {
            HolidayRule::OffsetFromHoliday(offset) => Some(offset.base()),
            _ => None
        }
    }
}

impl RecurringHoliday for HolidayRule {
    fn get_holiday(&self, year: i32, resolved: &ResolvedHolidays) -> Result<NaiveDate, CalendarError> {
        match self {
            HolidayRule::FixedDate(rule) => rule.get_holiday(year, resolved),
            HolidayRule::NthWeekday(rule) => rule.get_holiday(year, resolved),
            HolidayRule::OffsetFromHoliday(rule) => rule.get_holiday(year, resolved)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedHolidayRule {
    name: String,
    #[serde(flatten)]
    rule: HolidayRule
}

impl NamedHolidayRule {
    pub fn new(name: impl Into<String>, rule: HolidayRule) -> NamedHolidayRule {
        NamedHolidayRule { name: name.into(), rule }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> &HolidayRule {
        &self.rule
    }
}

impl RecurringHoliday for NamedHolidayRule {
    fn get_holiday(&self, year: i32, resolved: &ResolvedHolidays) -> Result<NaiveDate, CalendarError> {
        self.rule.get_holiday(year, resolved).map_err(|error| match error {
            CalendarError::UnknownBaseHoliday { base, .. } => CalendarError::UnknownBaseHoliday {
                name: self.name.clone(),
                base
            },
            other => other
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Weekday;

    use super::*;
    use crate::time::recurringholiday::nthweekdayholiday::SearchDirection;

    #[test]
    fn parses_each_rule_kind() {
        let json = r#"[
            {"name": "Independence", "holiday_type": "FixedDate", "month": 7, "day": 4},
            {"name": "Labor", "holiday_type": "NthWeekday", "month": 9, "day": 1,
             "weekday": "Mon", "direction": "Forward"},
            {"name": "DayAfterLabor", "holiday_type": "OffsetFromHoliday",
             "base": "Labor", "shift_days": 1}
        ]"#;
        let rules: Vec<NamedHolidayRule> = serde_json::from_str(json).unwrap();
        assert_eq!(rules[0], NamedHolidayRule::new("Independence", HolidayRule::FixedDate(FixedDateHoliday::literal(7, 4))));
        assert_eq!(
            rules[1].rule(),
            &HolidayRule::NthWeekday(NthWeekdayHoliday::literal(9, 1, Weekday::Mon, 1, SearchDirection::Forward))
        );
        assert_eq!(rules[2].rule().depends_on(), Some("Labor"));
        assert_eq!(rules[0].rule().depends_on(), None);
    }

    #[test]
    fn unknown_holiday_type_is_rejected() {
        let json = r#"{"name": "Easter", "holiday_type": "EasterRelated", "shift_days": 0}"#;
        assert!(serde_json::from_str::<NamedHolidayRule>(json).is_err());
    }

    #[test]
    fn missing_base_error_names_the_rule() {
        let rule = NamedHolidayRule::new("DayAfterThanksgiving", HolidayRule::OffsetFromHoliday(OffsetHoliday::new("Thanksgiving", 1)));
        assert_eq!(
            rule.get_holiday(2025, &HashMap::new()).unwrap_err(),
            CalendarError::UnknownBaseHoliday {
                name: "DayAfterThanksgiving".to_owned(),
                base: "Thanksgiving".to_owned()
            }
        );
    }
}
