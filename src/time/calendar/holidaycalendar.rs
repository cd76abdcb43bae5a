use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::error::CalendarError;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::holidayrule::{HolidayRule, NamedHolidayRule};
use crate::time::recurringholiday::nthweekdayholiday::{NthWeekdayHoliday, SearchDirection};
use crate::time::recurringholiday::offsetholiday::OffsetHoliday;
use crate::time::recurringholiday::recurringholiday::{RecurringHoliday, ResolvedHolidays};

pub const DEFAULT_START_YEAR: i32 = 2025;
pub const DEFAULT_HORIZON_YEARS: i32 = 2;

/// Inclusive span of years. `start > end` is allowed and covers no year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> YearRange {
        YearRange { start, end }
    }

    /// Fills missing bounds: `start` falls back to `default_start`, `end` to
    /// `today`'s year plus `horizon_years`.
    pub fn resolve(start: Option<i32>,
                   end: Option<i32>,
                   today: NaiveDate,
                   default_start: i32,
                   horizon_years: i32) -> Result<YearRange, CalendarError> {
        let end = match end {
            Some(end) => end,
            None => today
                .year()
                .checked_add(horizon_years)
                .ok_or(CalendarError::HorizonOutOfRange { year: today.year(), horizon_years })?
        };
        Ok(YearRange {
            start: start.unwrap_or(default_start),
            end
        })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.start..=self.end
    }
}

/// A holiday table: named rules evaluated in order for each year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    rules: Vec<NamedHolidayRule>
}

impl HolidayCalendar {
    /// Checks that names are unique and that every offset rule refers to a
    /// holiday listed before it.
    pub fn new(rules: Vec<NamedHolidayRule>) -> Result<HolidayCalendar, CalendarError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(rules.len());
        for rule in rules.iter() {
            if let Some(base) = rule.rule().depends_on() {
                if !seen.contains(base) {
                    return Err(CalendarError::UnknownBaseHoliday {
                        name: rule.name().to_owned(),
                        base: base.to_owned()
                    });
                }
            }
            if !seen.insert(rule.name()) {
                return Err(CalendarError::DuplicateHolidayName(rule.name().to_owned()));
            }
        }
        Ok(HolidayCalendar { rules })
    }

    /// The company calendar: six fixed days, Memorial Day, Labor Day,
    /// Thanksgiving and the day after it. No weekend observance.
    pub fn company() -> HolidayCalendar {
        let fixed = |name: &str, month, day| {
            NamedHolidayRule::new(name, HolidayRule::FixedDate(FixedDateHoliday::literal(month, day)))
        };
        let nth = |name: &str, month, day, weekday, n, direction| {
            NamedHolidayRule::new(name, HolidayRule::NthWeekday(NthWeekdayHoliday::literal(month, day, weekday, n, direction)))
        };

        HolidayCalendar {
            rules: vec![
                fixed("NewYearsDay", 1, 1),
                fixed("DayAfterNewYearsDay", 1, 2),
                nth("MemorialDay", 5, 31, Weekday::Mon, 1, SearchDirection::Backward),
                fixed("IndependenceDay", 7, 4),
                nth("LaborDay", 9, 1, Weekday::Mon, 1, SearchDirection::Forward),
                fixed("VeteransDay", 11, 11),
                nth("Thanksgiving", 11, 1, Weekday::Thu, 4, SearchDirection::Forward),
                NamedHolidayRule::new(
                    "DayAfterThanksgiving",
                    HolidayRule::OffsetFromHoliday(OffsetHoliday::new("Thanksgiving", 1))
                ),
                fixed("ChristmasDay", 12, 25),
                fixed("DayAfterChristmas", 12, 26),
            ]
        }
    }

    pub fn rules(&self) -> &[NamedHolidayRule] {
        &self.rules
    }

    /// Each rule's date in `year`, in table order.
    pub fn named_holidays(&self, year: i32) -> Result<Vec<(&str, NaiveDate)>, CalendarError> {
        let mut resolved: ResolvedHolidays = HashMap::with_capacity(self.rules.len());
        let mut named = Vec::with_capacity(self.rules.len());
        for rule in self.rules.iter() {
            let d = rule.get_holiday(year, &resolved)?;
            resolved.insert(rule.name(), d);
            named.push((rule.name(), d));
        }
        Ok(named)
    }

    pub fn compute_holidays(&self, year: i32) -> Result<HashSet<NaiveDate>, CalendarError> {
        Ok(self.named_holidays(year)?
            .into_iter()
            .map(|(_, d)| d)
            .collect())
    }

    pub fn aggregate_holidays(&self, years: YearRange) -> Result<HashSet<NaiveDate>, CalendarError> {
        let mut holiday_set = HashSet::new();
        for year in years.years() {
            holiday_set.extend(self.compute_holidays(year)?);
        }
        debug!(
            start_year = years.start(),
            end_year = years.end(),
            holidays = holiday_set.len(),
            "aggregated holiday set"
        );
        Ok(holiday_set)
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        HolidayCalendar::company()
    }
}

/// Company holidays for one year.
pub fn compute_holidays(year: i32) -> Result<HashSet<NaiveDate>, CalendarError> {
    HolidayCalendar::company().compute_holidays(year)
}

/// Company holidays for every year in `start_year..=end_year`; empty when
/// `start_year > end_year`.
pub fn aggregate_holidays(start_year: i32, end_year: i32) -> Result<HashSet<NaiveDate>, CalendarError> {
    HolidayCalendar::company().aggregate_holidays(YearRange::new(start_year, end_year))
}
