use std::collections::HashSet;

use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use tracing::trace;

use crate::error::CalendarError;
use crate::time::calendar::businessdaycalendar::BusinessDayCalendar;
use crate::time::calendar::holidaycalendar::{HolidayCalendar, YearRange};

const ONE_DAY: Days = Days::new(1);

/// Weekend days as a bitmask, bit `i` set for `num_days_from_monday() == i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WeekendMask(u8);

impl WeekendMask {
    const SATURDAY_SUNDAY: WeekendMask = WeekendMask(0b0110_0000);

    fn new(weekends: &HashSet<Weekday>) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    #[inline]
    fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    fn to_hashset(self) -> HashSet<Weekday> {
        (0..7u8)
            .filter(|day| (self.0 & (1u8 << day)) != 0)
            .filter_map(|day| Weekday::try_from(day).ok())
            .collect()
    }
}

/// Resolves business days against a fixed holiday set and a weekend set
/// (Saturday and Sunday unless configured otherwise).
#[derive(Debug, Clone)]
pub struct BusinessDayResolver {
    weekends: WeekendMask,
    holidays: HashSet<NaiveDate>
}

impl BusinessDayResolver {
    pub fn new(holidays: HashSet<NaiveDate>) -> BusinessDayResolver {
        BusinessDayResolver {
            weekends: WeekendMask::SATURDAY_SUNDAY,
            holidays
        }
    }

    /// A resolver whose weekend is `weekends` instead of Saturday and Sunday.
    /// An empty set means every weekday can be a business day.
    pub fn with_weekends(weekends: &HashSet<Weekday>, holidays: HashSet<NaiveDate>) -> BusinessDayResolver {
        BusinessDayResolver {
            weekends: WeekendMask::new(weekends),
            holidays
        }
    }

    /// Resolver over `calendar`'s holidays for every year in `years`.
    pub fn from_calendar(calendar: &HolidayCalendar, years: YearRange) -> Result<BusinessDayResolver, CalendarError> {
        Ok(BusinessDayResolver::new(calendar.aggregate_holidays(years)?))
    }

    pub fn holidays(&self) -> &HashSet<NaiveDate> {
        &self.holidays
    }

    pub fn weekends(&self) -> HashSet<Weekday> {
        self.weekends.to_hashset()
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }

    #[inline]
    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holidays.contains(&d)
    }

    /// Like [`BusinessDayCalendar::previous_business_day`], but gives up with
    /// an error once `max_days` calendar days before `reference` have been
    /// tried without finding a business day.
    pub fn previous_business_day_within(&self, reference: NaiveDate, max_days: u32) -> Result<NaiveDate, CalendarError> {
        let mut candidate = reference;
        for _ in 0..max_days {
            candidate = candidate
                .checked_sub_days(ONE_DAY)
                .ok_or(CalendarError::DateOutOfRange { date: candidate, shift_days: -1 })?;
            if self.is_business_day(candidate) {
                return Ok(candidate);
            }
            trace!(%candidate, "skipping non-business day");
        }
        Err(CalendarError::NoBusinessDayWithin { reference, max_days })
    }
}

impl BusinessDayCalendar for BusinessDayResolver {
    #[inline]
    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_weekend(d) && !self.is_holiday(d)
    }
}

/// The most recent day strictly before `reference` that is neither a
/// Saturday, a Sunday, nor in `holidays`. The walk has no upper bound.
///
/// # Panics
///
/// Panics if the walk steps below `NaiveDate::MIN`. Use
/// [`BusinessDayResolver::previous_business_day_within`] for a checked walk.
pub fn previous_business_day(reference: NaiveDate, holidays: &HashSet<NaiveDate>) -> NaiveDate {
    let mut candidate = reference - ONE_DAY;
    while WeekendMask::SATURDAY_SUNDAY.is_weekend(candidate.weekday()) || holidays.contains(&candidate) {
        trace!(%candidate, "skipping non-business day");
        candidate = candidate - ONE_DAY;
    }
    candidate
}
