use chrono::{Days, NaiveDate};

const ONE_DAY: Days = Days::new(1);

/// Day-stepping operations shared by anything that can tell business days
/// from non-business days.
pub trait BusinessDayCalendar: Send + Sync {
    fn is_business_day(&self, d: NaiveDate) -> bool;

    /// Walks `n` business days away from `horizon` (backward for negative
    /// `n`). `horizon` itself is never counted.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> NaiveDate {
        let shift_one_day = if n >= 0 {
            |d: NaiveDate| d + ONE_DAY
        } else {
            |d: NaiveDate| d - ONE_DAY
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d);
            m -= self.is_business_day(d) as u32;
        }
        d
    }

    fn next_business_day(&self, d: NaiveDate) -> NaiveDate {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> NaiveDate {
        self.shift_n_business_day(d, -1)
    }
}
