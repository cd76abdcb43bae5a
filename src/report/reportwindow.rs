use std::fmt;

use chrono::{
    NaiveDate,
    NaiveDateTime,
    NaiveTime
};
use tracing::{debug, warn};

use crate::error::CalendarError;

const TIMESTAMP_FORMATS: [&str; 2] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f"
];

/// Reads a completion timestamp as the query layer renders it. A bare date
/// is taken as midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

pub fn at_time(date: NaiveDate, hour: u32, minute: u32) -> Result<NaiveDateTime, CalendarError> {
    date.and_hms_opt(hour, minute, 0)
        .ok_or(CalendarError::InvalidTime { date, hour, minute })
}

/// Timestamp window closed on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    start: NaiveDateTime,
    end: NaiveDateTime
}

/// Rows kept by [`ReportWindow::filter_rows`] and what happened to the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome<R> {
    pub kept: Vec<R>,
    pub outside_window: usize,
    pub unparseable: usize
}

impl ReportWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<ReportWindow, CalendarError> {
        if start > end {
            return Err(CalendarError::InvertedWindow { start, end });
        }
        Ok(ReportWindow { start, end })
    }

    /// Every instant of `date`, up to the last nanosecond.
    pub fn whole_day(date: NaiveDate) -> Result<ReportWindow, CalendarError> {
        let end = date
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .ok_or(CalendarError::InvalidTime { date, hour: 23, minute: 59 })?;
        ReportWindow::new(date.and_time(NaiveTime::MIN), end)
    }

    /// `date` from `from_hour:00` to `to_hour:00`.
    pub fn intraday(date: NaiveDate, from_hour: u32, to_hour: u32) -> Result<ReportWindow, CalendarError> {
        ReportWindow::new(at_time(date, from_hour, 0)?, at_time(date, to_hour, 0)?)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    #[inline]
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        (ts >= self.start) && (ts <= self.end)
    }

    /// Keeps the rows whose timestamp lies in the window. Rows for which
    /// `timestamp_of` yields nothing are dropped and counted separately.
    pub fn filter_rows<R, F>(&self, rows: Vec<R>, timestamp_of: F) -> FilterOutcome<R>
    where
        F: Fn(&R) -> Option<NaiveDateTime>
    {
        let total = rows.len();
        let mut outcome = FilterOutcome {
            kept: Vec::with_capacity(total),
            outside_window: 0,
            unparseable: 0
        };

        for row in rows {
            match timestamp_of(&row) {
                Some(ts) if self.contains(ts) => outcome.kept.push(row),
                Some(_) => outcome.outside_window += 1,
                None => outcome.unparseable += 1
            }
        }

        if outcome.unparseable > 0 {
            warn!(dropped = outcome.unparseable, "dropped rows with invalid timestamps");
        }
        debug!(window = %self, before = total, after = outcome.kept.len(), "filtered rows");
        outcome
    }
}

impl fmt::Display for ReportWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start.format("%Y-%m-%d %H:%M"), self.end.format("%Y-%m-%d %H:%M"))
    }
}
