use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::CalendarError;
use crate::time::utility::shift_days;

use super::recurringholiday::{RecurringHoliday, ResolvedHolidays};

/// A signed day offset from another holiday of the same year. The result is
/// kept whichever year it lands in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffsetHoliday {
    base: String,
    shift_days: i64
}

impl OffsetHoliday {
    pub fn new(base: impl Into<String>, shift_days: i64) -> OffsetHoliday {
        OffsetHoliday { base: base.into(), shift_days }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for OffsetHoliday {
    fn get_holiday(&self, _year: i32, resolved: &ResolvedHolidays) -> Result<NaiveDate, CalendarError> {
        let base_day = resolved.get(self.base.as_str()).ok_or_else(|| CalendarError::UnknownBaseHoliday {
            name: format!("{}{:+}", self.base, self.shift_days),
            base: self.base.clone(),
        })?;
        shift_days(*base_day, self.shift_days)
    }
}
