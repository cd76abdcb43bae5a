use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::report::reportwindow::ReportWindow;
use crate::time::calendar::businessdaycalendar::BusinessDayCalendar;

const SHIFT_START_HOUR: u32 = 3;
const MIDDAY_END_HOUR: u32 = 12;
const MID_AFTERNOON_END_HOUR: u32 = 15;

/// The scheduled report runs and the completion window each one exports.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReportRun {
    /// All of the previous business day.
    PreviousBusinessDay,
    /// Today, 03:00 to 12:00.
    Midday,
    /// Today, 03:00 to 15:00.
    MidAfternoon
}

impl ReportRun {
    pub fn window<C>(&self, today: NaiveDate, calendar: &C) -> Result<ReportWindow, CalendarError>
    where
        C: BusinessDayCalendar + ?Sized
    {
        match self {
            ReportRun::PreviousBusinessDay => ReportWindow::whole_day(calendar.previous_business_day(today)),
            ReportRun::Midday => ReportWindow::intraday(today, SHIFT_START_HOUR, MIDDAY_END_HOUR),
            ReportRun::MidAfternoon => ReportWindow::intraday(today, SHIFT_START_HOUR, MID_AFTERNOON_END_HOUR)
        }
    }
}
