use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Holidays already resolved for the year being evaluated, keyed by name.
pub type ResolvedHolidays<'a> = HashMap<&'a str, NaiveDate>;

pub trait RecurringHoliday {

    /// Date of this holiday in `year`. Rules that depend on another holiday
    /// look it up in `resolved`.
    fn get_holiday(&self, year: i32, resolved: &ResolvedHolidays) -> Result<NaiveDate, CalendarError>;
}
