//! Western Easter.
//!
//! Years up to and including the Gregorian reform year are reckoned on the
//! Julian calendar from the golden-number table of paschal full moons.
//! Later years use the anonymous Gregorian algorithm.

use crate::date::Date;
use crate::settings::Settings;
use crate::weekday::Weekday;
use fd_core::errors::{Error, Result};

/// Paschal full moon (month, day) on the Julian calendar, indexed by golden
/// number minus one.
const JULIAN_FULL_MOONS: [(u8, u8); 19] = [
    (4, 5),
    (3, 25),
    (4, 13),
    (4, 2),
    (3, 22),
    (4, 10),
    (3, 30),
    (4, 18),
    (4, 7),
    (3, 27),
    (4, 15),
    (4, 4),
    (3, 24),
    (4, 12),
    (4, 1),
    (3, 21),
    (4, 9),
    (3, 29),
    (4, 17),
];

/// Date of Easter Sunday in `year`.
///
/// For `year <= reform_year` the result carries the Julian month and day.
///
/// # Errors
/// [`Error::UndefinedEaster`] for years before 30.
///
/// ```
/// use fd_time::{easter, Date};
/// assert_eq!(easter(2024, 1582).unwrap(), Date::from_ymd(2024, 3, 31).unwrap());
/// assert!(easter(29, 1582).is_err());
/// ```
pub fn easter(year: i32, reform_year: i32) -> Result<Date> {
    if year < 30 {
        return Err(Error::UndefinedEaster(year));
    }
    let (month, day) = if year <= reform_year {
        julian_easter(year)
    } else {
        gregorian_easter(year)
    };
    Date::from_ymd(year, month, day)
}

fn julian_easter(year: i32) -> (u8, u8) {
    let (month, day) = JULIAN_FULL_MOONS[year.rem_euclid(19) as usize];
    let weekday = julian_weekday(year, month, day);
    // A full moon on Sunday pushes Easter a whole week.
    let ahead = 7 - weekday.num_days_from_sunday();
    // The latest full moon is April 18, so the Sunday never leaves April.
    let total = day + ahead;
    match month {
        3 if total > 31 => (4, total - 31),
        _ => (month, total),
    }
}

/// Weekday of a Julian calendar date, through its Julian day number.
fn julian_weekday(year: i32, month: u8, day: u8) -> Weekday {
    let a = (14 - month as i32) / 12;
    let y = year + 4800 - a;
    let m = month as i32 + 12 * a - 3;
    let jdn = day as i32 + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083;
    match Weekday::from_sunday_index(((jdn + 1) % 7) as u8) {
        Some(w) => w,
        None => unreachable!("index is reduced modulo 7"),
    }
}

fn gregorian_easter(year: i32) -> (u8, u8) {
    let a = year % 19;
    let (b, c) = (year / 100, year % 100);
    let (d, e) = (b / 4, b % 4);
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let (i, k) = (c / 4, c % 4);
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u8, (n % 31 + 1) as u8)
}

impl Date {
    /// Whether this date is Easter Sunday, reckoned with the default
    /// Gregorian reform year.
    pub fn is_easter(&self) -> bool {
        self.is_easter_with(&Settings::default())
    }

    /// Whether this date is Easter Sunday under `settings`.
    pub fn is_easter_with(&self, settings: &Settings) -> bool {
        easter(self.year(), settings.reform_year)
            .map(|e| e == *self)
            .unwrap_or(false)
    }

    /// Easter Sunday of this date's year.
    pub fn easter_this_year(&self, settings: &Settings) -> Result<Date> {
        easter(self.year(), settings.reform_year)
    }
}
