//! `Calendar` trait and workday navigation.
//!
//! A calendar knows which dates are holidays.  Everything else (workday
//! tests, skipping forward and back over holidays, counting workdays) is
//! derived from that one predicate by the trait's default methods.

use crate::date::Date;

/// A holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"United States (Federal)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a holiday.  Every Saturday and Sunday is a
    /// holiday in the calendars of this crate.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is not a holiday.
    fn is_workday(&self, date: Date) -> bool {
        !self.is_holiday(date)
    }

    /// Move `date` by `n` workdays (backward when `n` is negative).
    ///
    /// Steps one day at a time and only counts days that are workdays, so
    /// for `n != 0` the result is never `date` itself and lies at least
    /// `|n|` days away.
    fn add_workdays(&self, mut date: Date, n: i32) -> Date {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date += step;
            if self.is_workday(date) {
                remaining -= 1;
            }
        }
        date
    }

    /// The first workday strictly after `date`.
    fn next_workday(&self, date: Date) -> Date {
        self.add_workdays(date, 1)
    }

    /// The last workday strictly before `date`.
    fn prior_workday(&self, date: Date) -> Date {
        self.add_workdays(date, -1)
    }

    /// `date` itself if it is a workday, otherwise the next workday.
    fn next_until_workday(&self, mut date: Date) -> Date {
        while self.is_holiday(date) {
            date += 1;
        }
        date
    }

    /// `date` itself if it is a workday, otherwise the prior workday.
    fn prior_until_workday(&self, mut date: Date) -> Date {
        while self.is_holiday(date) {
            date -= 1;
        }
        date
    }

    /// Count the workdays between `d1` (exclusive) and `d2` (inclusive).
    /// Returns a negative number if `d2 < d1`.
    fn workdays_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        let mut d = start + 1;
        while d <= end {
            if self.is_workday(d) {
                count += 1;
            }
            d += 1;
        }
        sign * count
    }
}
