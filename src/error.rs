use chrono::{NaiveDate, NaiveDateTime};

/// Errors raised while building holiday rules, evaluating them for a year,
/// or resolving business days and report windows.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    #[error("date {year}-{month:02}-{day:02} is not representable")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
    },

    #[error("shifting {date} by {shift_days} days leaves the representable range")]
    DateOutOfRange {
        date: NaiveDate,
        shift_days: i64,
    },

    #[error("time {hour:02}:{minute:02} on {date} is not representable")]
    InvalidTime {
        date: NaiveDate,
        hour: u32,
        minute: u32,
    },

    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        month: u32,
    },

    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        month: u32,
        day: u32,
        max_day: u32,
    },

    #[error("invalid weekday ordinal: {n} (must be 1..=5)")]
    InvalidOrdinal {
        n: u8,
    },

    #[error("holiday '{0}' is defined more than once")]
    DuplicateHolidayName(String),

    #[error("holiday '{name}' is offset from '{base}', which is not defined before it")]
    UnknownBaseHoliday {
        name: String,
        base: String,
    },

    #[error("no business day found within {max_days} days before {reference}")]
    NoBusinessDayWithin {
        reference: NaiveDate,
        max_days: u32,
    },

    #[error("year {year} plus a horizon of {horizon_years} years is out of range")]
    HorizonOutOfRange {
        year: i32,
        horizon_years: i32,
    },

    #[error("report window starts at {start} which is after its end {end}")]
    InvertedWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Errors raised while loading a calendar configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
