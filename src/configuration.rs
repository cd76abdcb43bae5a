use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use tracing::info;

use crate::error::{CalendarError, ConfigurationError};
use crate::time::calendar::businessdayresolver::BusinessDayResolver;
use crate::time::calendar::holidaycalendar::{
    DEFAULT_HORIZON_YEARS,
    DEFAULT_START_YEAR,
    HolidayCalendar,
    YearRange
};
use crate::time::recurringholiday::holidayrule::NamedHolidayRule;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CalendarConfigurationJsonProp {
    #[serde(default)]
    start_year: Option<i32>,
    #[serde(default)]
    horizon_years: Option<i32>,
    #[serde(default)]
    weekends: Option<HashSet<Weekday>>,
    #[serde(default)]
    holidays: Option<Vec<NamedHolidayRule>>
}

/// Everything needed to turn "today" into a business-day resolver: the
/// holiday table, the default year span, and the weekend days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfiguration {
    calendar: HolidayCalendar,
    start_year: i32,
    horizon_years: i32,
    weekends: HashSet<Weekday>
}

impl CalendarConfiguration {
    pub fn company() -> CalendarConfiguration {
        CalendarConfiguration {
            calendar: HolidayCalendar::company(),
            start_year: DEFAULT_START_YEAR,
            horizon_years: DEFAULT_HORIZON_YEARS,
            weekends: [Weekday::Sat, Weekday::Sun].into_iter().collect()
        }
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<CalendarConfiguration, ConfigurationError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_prop: CalendarConfigurationJsonProp = serde_json::from_reader(reader)?;
        let configuration = CalendarConfiguration::from_json_prop(json_prop)?;
        info!(
            path = %file_path.as_ref().display(),
            holidays = configuration.calendar.rules().len(),
            "loaded calendar configuration"
        );
        Ok(configuration)
    }

    pub fn from_json_str(json: &str) -> Result<CalendarConfiguration, ConfigurationError> {
        let json_prop: CalendarConfigurationJsonProp = serde_json::from_str(json)?;
        Ok(CalendarConfiguration::from_json_prop(json_prop)?)
    }

    fn from_json_prop(json_prop: CalendarConfigurationJsonProp) -> Result<CalendarConfiguration, CalendarError> {
        let defaults = CalendarConfiguration::company();
        let calendar = match json_prop.holidays {
            Some(rules) => HolidayCalendar::new(rules)?,
            None => defaults.calendar
        };
        Ok(CalendarConfiguration {
            calendar,
            start_year: json_prop.start_year.unwrap_or(defaults.start_year),
            horizon_years: json_prop.horizon_years.unwrap_or(defaults.horizon_years),
            weekends: json_prop.weekends.unwrap_or(defaults.weekends)
        })
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn horizon_years(&self) -> i32 {
        self.horizon_years
    }

    pub fn weekends(&self) -> &HashSet<Weekday> {
        &self.weekends
    }

    /// Year span for `today`, with explicit bounds taking precedence.
    pub fn year_range(&self, today: NaiveDate, start: Option<i32>, end: Option<i32>) -> Result<YearRange, CalendarError> {
        YearRange::resolve(start, end, today, self.start_year, self.horizon_years)
    }

    pub fn resolver(&self, years: YearRange) -> Result<BusinessDayResolver, CalendarError> {
        let holidays = self.calendar.aggregate_holidays(years)?;
        Ok(BusinessDayResolver::with_weekends(&self.weekends, holidays))
    }
}

impl Default for CalendarConfiguration {
    fn default() -> Self {
        CalendarConfiguration::company()
    }
}
