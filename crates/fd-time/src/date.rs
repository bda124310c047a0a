//! `Date` type.
//!
//! Dates are stored as a serial number of days relative to the Unix epoch
//! (serial 0 = 1970-01-01) on the proleptic Gregorian calendar.  Values are
//! immutable; every arithmetic operation returns a new `Date`.
//!
//! # Valid range
//! The checked constructors accept years 1 through 9999.  The serial
//! arithmetic behind the `+`/`-` operators is unchecked so that chunk
//! boundaries just outside that range (the end of the week containing
//! 9999-12-31, say) can still be represented; use [`Date::add_days`] when a
//! range check is wanted.  Unchecked results saturate at years ±1,000,000
//! rather than overflow.

use crate::month::Month;
use crate::weekday::Weekday;
use fd_core::errors::{Error, Result};
use fd_core::{ensure_range, fail};

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(serial_from_ymd(1, 1, 1));

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(serial_from_ymd(9999, 12, 31));

    /// Beginning of time: January 1, 1900.  Earlier than any date of
    /// commercial interest; the `from` end of the `forever` spec.
    pub const BOT: Date = Date(serial_from_ymd(1900, 1, 1));

    /// End of time: December 31, 3000.  The `to` end of the `forever` spec.
    pub const EOT: Date = Date(serial_from_ymd(3000, 12, 31));

    const FLOOR: i32 = serial_from_ymd(-FAR_YEAR, 1, 1);
    const CEIL: i32 = serial_from_ymd(FAR_YEAR, 12, 31);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::InvalidDate(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::InvalidDate(format!(
                "year {year} out of range [1, 9999]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a year and a day-of-year (1–365, or 366 in a leap
    /// year).
    pub fn from_year_day(year: i32, day_of_year: u16) -> Result<Self> {
        let max = if is_leap_year(year) { 366 } else { 365 };
        ensure_range!(day_of_year, 1, max, "day-of-year");
        Ok(Date::from_ymd(year, 1, 1)? + (day_of_year as i32 - 1))
    }

    /// Create a date from an ISO 8601 week date: the `iso_day` (1 = Monday …
    /// 7 = Sunday) of commercial week `week` of week-year `year`.
    ///
    /// Week 1 is the week containing January 4.  Week 53 is only accepted
    /// for week-years that have one.
    pub fn commercial(year: i32, week: u8, iso_day: u8) -> Result<Self> {
        ensure_range!(week, 1, 53, "week number");
        ensure_range!(iso_day, 1, 7, "ISO day number");
        if week > weeks_in_iso_year(year) {
            return Err(Error::InvalidDate(format!(
                "week-year {year} has no week {week}"
            )));
        }
        let start = iso_week_one_start(year);
        Date::from_serial(start.0 + (week as i32 - 1) * 7 + (iso_day as i32 - 1))
    }

    /// Build a date without range checks.  Callers guarantee that `month`
    /// and `day` are valid for `year`.
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Date(serial_from_ymd(year, month, day))
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// A negative `nth` counts back from the end of the month, so `-1` is
    /// the last such weekday.  For example the fourth Thursday of November
    /// 2024 is `Date::nth_weekday_in_month(4, Weekday::Thursday, 2024, 11)`.
    ///
    /// # Errors
    /// `InvalidRange` if `nth` is zero or its magnitude exceeds 5, or if
    /// `month` is outside 1–12; `NoSuchOccurrence` if the month has fewer
    /// than `|nth|` such weekdays.
    pub fn nth_weekday_in_month(nth: i32, weekday: Weekday, year: i32, month: u8) -> Result<Self> {
        ensure_range!(month, 1, 12, "month number");
        ensure_range!(nth.abs(), 1, 5, "ordinal day number");
        let first = Date::from_ymd(year, month, 1)?;
        let result = if nth > 0 {
            let skip = first.weekday().days_until(weekday) as i32;
            first + (skip + 7 * (nth - 1))
        } else {
            let last = first.end_of_month();
            let back = weekday.days_until(last.weekday()) as i32;
            last - (back + 7 * (-nth - 1))
        };
        if result.month() != month || result.year() != year {
            fail!(
                "there is no {} {weekday} in {year:04}-{month:02}",
                ordinal_name(nth)
            );
        }
        Ok(result)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        match Month::from_number(self.month()) {
            Some(m) => m,
            None => unreachable!("ymd_from_serial yields months in 1..=12"),
        }
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)`.
    pub fn ymd_parts(&self) -> (i32, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        (self.0 - serial_from_ymd(self.year(), 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 0 (1970-01-01) was a Thursday, index 4 counting from Sunday.
        let w = (self.0 + 4).rem_euclid(7) as u8;
        match Weekday::from_sunday_index(w) {
            Some(w) => w,
            None => unreachable!("rem_euclid(7) is always in 0..7"),
        }
    }

    /// Number of days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        let (y, m, _) = ymd_from_serial(self.0);
        days_in_month(y, m)
    }

    /// Return `true` if this date is a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    /// Return `true` if this date is Monday through Friday.
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Return `true` if this date is the `nth` `weekday` of `month` in its
    /// own year.  Invalid arguments simply yield `false`.
    pub fn is_nth_weekday_in_month(&self, nth: i32, weekday: Weekday, month: u8) -> bool {
        Date::nth_weekday_in_month(nth, weekday, self.year(), month)
            .map(|d| d == *self)
            .unwrap_or(false)
    }

    // ── Period indices ────────────────────────────────────────────────────────

    /// Calendar half of the year (1 or 2).
    pub fn half(&self) -> u8 {
        self.month_of_year().half()
    }

    /// Calendar quarter (1–4).
    pub fn quarter(&self) -> u8 {
        self.month_of_year().quarter()
    }

    /// Calendar bimonth (1–6); bimonths start on odd months.
    pub fn bimonth(&self) -> u8 {
        self.month_of_year().bimonth()
    }

    /// Calendar semimonth (1–24); each month splits after the 15th.
    pub fn semimonth(&self) -> u8 {
        (self.month() - 1) * 2 + if self.day() <= 15 { 1 } else { 2 }
    }

    /// ISO 8601 week number (1–53).
    pub fn cweek(&self) -> u8 {
        let thursday = self.iso_thursday();
        ((thursday.day_of_year() - 1) / 7 + 1) as u8
    }

    /// ISO 8601 week-year, which differs from [`year`](Self::year) for a few
    /// days around January 1.
    pub fn cwyear(&self) -> i32 {
        self.iso_thursday().year()
    }

    /// Index of the ISO week pair containing this date: weeks 1 and 2 form
    /// biweek 1, weeks 3 and 4 biweek 2, and so on.
    pub fn biweek(&self) -> u8 {
        (self.cweek() + 1) / 2
    }

    fn iso_thursday(&self) -> Date {
        let iso_day = self.weekday().ordinal() as i32;
        *self + (4 - iso_day)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Date::from_serial(serial),
            None => Err(Error::InvalidDate(format!("{self} + {n} days overflows"))),
        }
    }

    /// Advance by `n` calendar months, clamping the day to the length of the
    /// destination month (January 31 + 1 month = February 28 or 29).
    pub fn add_months(self, n: i32) -> Result<Self> {
        let result = self.shift_months(n);
        Date::from_serial(result.0)
    }

    /// Advance by `n` years, clamping February 29 to February 28.
    pub fn add_years(self, n: i32) -> Result<Self> {
        self.add_months(n.saturating_mul(12))
    }

    /// Unchecked month shift shared by the chunk arithmetic.
    pub(crate) fn shift_months(self, n: i32) -> Self {
        let (y, m, d) = ymd_from_serial(self.0);
        let far = FAR_YEAR * 12;
        let total = (y * 12 + (m as i32 - 1)).saturating_add(n).clamp(-far, far + 11);
        let new_y = total.div_euclid(12);
        let new_m = (total.rem_euclid(12) + 1) as u8;
        let new_d = d.min(days_in_month(new_y, new_m));
        Date::ymd(new_y, new_m, new_d)
    }

    /// The following day.
    pub fn succ(self) -> Self {
        self + 1
    }

    /// The preceding day.
    pub fn pred(self) -> Self {
        self - 1
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first day of the month containing this date.
    pub fn beginning_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date::ymd(y, m, 1)
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date::ymd(y, m, days_in_month(y, m))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return whether this date falls within a period of *less than six
    /// months* of `other`.
    ///
    /// Follows *Stella v. Graham Page Motors*: the window runs from two days
    /// after the date six months before `other` to two days before the date
    /// six months after it.  When `other` falls on the 28th or later, the
    /// corresponding day in each target month is clamped to that month's
    /// length before the two-day adjustment (*Jammies International*).  The
    /// relation is not symmetric.
    pub fn within_6mos_of(&self, other: Date) -> bool {
        let from_day = other.day();
        let (start, end) = if from_day >= 28 {
            let start_month = other.beginning_of_month().shift_months(-6);
            let end_month = other.beginning_of_month().shift_months(6);
            let start = Date::ymd(
                start_month.year(),
                start_month.month(),
                from_day.min(start_month.days_in_month()),
            ) + 2;
            let end = Date::ymd(
                end_month.year(),
                end_month.month(),
                from_day.min(end_month.days_in_month()),
            ) - 2;
            (start, end)
        } else {
            (other.shift_months(-6) + 2, other.shift_months(6) - 2)
        };
        start <= *self && *self <= end
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        Date(self.0.saturating_add(rhs).clamp(Self::FLOOR, Self::CEIL))
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        Date(self.0.saturating_sub(rhs).clamp(Self::FLOOR, Self::CEIL))
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<chrono::NaiveDate> for Date {
    fn from(d: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Date::ymd(d.year(), d.month() as u8, d.day() as u8)
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` string.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::InvalidDate(format!("expected YYYY-MM-DD, got '{s}'"));
        let mut parts = s.trim().splitn(3, '-');
        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let month: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let day: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        Date::from_ymd(year, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Number of ISO weeks (52 or 53) in an ISO week-year.
fn weeks_in_iso_year(year: i32) -> u8 {
    // A week-year has 53 weeks when it starts or (in leap years) ends on a
    // Thursday.
    let jan1 = Date::ymd(year, 1, 1).weekday();
    let dec31 = Date::ymd(year, 12, 31).weekday();
    if jan1 == Weekday::Thursday || dec31 == Weekday::Thursday {
        53
    } else {
        52
    }
}

/// The Monday starting ISO week 1 of `year`: the Monday on or before Jan 4.
fn iso_week_one_start(year: i32) -> Date {
    let jan4 = Date::ymd(year, 1, 4);
    jan4 - (jan4.weekday().ordinal() as i32 - 1)
}

fn ordinal_name(n: i32) -> String {
    let suffix = match (n.abs() % 10, n.abs() % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Convert (year, month, day) to a serial number (days since 1970-01-01).
/// Unchecked arithmetic saturates at this many years either side of the epoch.
const FAR_YEAR: i32 = 1_000_000;

const fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    // Shift the year to start in March so the leap day is the last day.
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (month as i32 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Decompose a serial number into (year, month, day).
const fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
    let y = yoe + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
