use std::collections::HashMap;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use crate::error::CalendarError;
use crate::time::utility::shift_days;


#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Observance rule for a fixed-date holiday that falls on a weekend.
/// Indexed by `Weekday::num_days_from_monday()`; `None` leaves the date as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekendAdjustmentRule {
    rule: [Option<i64>; 7]
}

impl WeekendAdjustmentRule {
    /// Builds the per-weekday shifts. The walk continues through every
    /// following weekday that is also listed in the map, whatever its own
    /// adjustment, so Saturday -> NextWeekday with Sunday listed shifts by
    /// two days.
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> WeekendAdjustmentRule {
        let mut rule: [Option<i64>; 7] = [None; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let step = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut to_weekday = weekday;
            let mut shift: i64 = 0;
            let one_day = adj as i64;

            // A map naming all seven days would never terminate.
            while adjustment_map.contains_key(&to_weekday) && shift.abs() < 7 {
                to_weekday = step(&to_weekday);
                shift += one_day;
            }

            rule[weekday.num_days_from_monday() as usize] = Some(shift);
        }

        WeekendAdjustmentRule { rule }
    }

    pub const fn unadjusted() -> WeekendAdjustmentRule {
        WeekendAdjustmentRule { rule: [None; 7] }
    }

    pub fn is_unadjusted(&self) -> bool {
        self.rule.iter().all(Option::is_none)
    }

    pub fn adjustment_map(&self) -> HashMap<Weekday, WeekendAdjustment> {
        let mut result: HashMap<Weekday, WeekendAdjustment> = HashMap::new();

        for (day_offset, shift) in self.rule.iter().enumerate() {
            let Some(shift) = *shift else { continue };
            let Ok(weekday) = Weekday::try_from(day_offset as u8) else { continue };
            let adjustment = match shift {
                n if n > 0 => WeekendAdjustment::NextWeekday,
                n if n < 0 => WeekendAdjustment::PreviousWeekday,
                _ => WeekendAdjustment::Unadjusted,
            };
            result.insert(weekday, adjustment);
        }

        result
    }

    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> Result<NaiveDate, CalendarError> {
        match self.rule[d.weekday().num_days_from_monday() as usize] {
            Some(shift) => shift_days(d, shift),
            None => Ok(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed_us_style() -> WeekendAdjustmentRule {
        let mut map = HashMap::new();
        map.insert(Weekday::Sat, WeekendAdjustment::PreviousWeekday);
        map.insert(Weekday::Sun, WeekendAdjustment::NextWeekday);
        WeekendAdjustmentRule::new(&map)
    }

    #[test]
    fn saturday_moves_to_friday_and_sunday_to_monday() {
        let rule = observed_us_style();
        // 2026-07-04 is a Saturday, 2027-07-04 a Sunday.
        let sat = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        let sun = NaiveDate::from_ymd_opt(2027, 7, 4).unwrap();
        assert_eq!(rule.adjust(sat).unwrap(), NaiveDate::from_ymd_opt(2026, 7, 3).unwrap());
        assert_eq!(rule.adjust(sun).unwrap(), NaiveDate::from_ymd_opt(2027, 7, 5).unwrap());
    }

    #[test]
    fn weekday_is_left_alone() {
        let rule = observed_us_style();
        let fri = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(rule.adjust(fri).unwrap(), fri);
    }

    #[test]
    fn consecutive_weekend_days_are_skipped_together() {
        let mut map = HashMap::new();
        map.insert(Weekday::Sat, WeekendAdjustment::NextWeekday);
        map.insert(Weekday::Sun, WeekendAdjustment::NextWeekday);
        let rule = WeekendAdjustmentRule::new(&map);
        let sat = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        assert_eq!(rule.adjust(sat).unwrap(), NaiveDate::from_ymd_opt(2026, 7, 6).unwrap());
    }

    #[test]
    fn unadjusted_neighbour_is_still_walked_through() {
        let mut map = HashMap::new();
        map.insert(Weekday::Sat, WeekendAdjustment::NextWeekday);
        map.insert(Weekday::Sun, WeekendAdjustment::Unadjusted);
        let rule = WeekendAdjustmentRule::new(&map);
        let sat = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        let sun = NaiveDate::from_ymd_opt(2027, 7, 4).unwrap();
        assert_eq!(rule.adjust(sat).unwrap(), NaiveDate::from_ymd_opt(2026, 7, 6).unwrap());
        assert_eq!(rule.adjust(sun).unwrap(), sun);
    }

    #[test]
    fn adjustment_map_round_trips() {
        let rule = observed_us_style();
        let map = rule.adjustment_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&Weekday::Sat], WeekendAdjustment::PreviousWeekday);
        assert_eq!(WeekendAdjustmentRule::new(&map), rule);
    }

    #[test]
    fn empty_map_is_unadjusted() {
        let rule = WeekendAdjustmentRule::new(&HashMap::new());
        assert!(rule.is_unadjusted());
        assert_eq!(rule, WeekendAdjustmentRule::unadjusted());
    }
}
