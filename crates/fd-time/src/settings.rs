//! Library settings.
//!
//! [`Settings`] carries the two knobs that change calendar answers: the day
//! on which weeks begin and the year of Gregorian calendar reform used by
//! the Easter computation.  It is a plain `Copy` value threaded through
//! every call that depends on it; there is no process-wide instance.

use crate::weekday::Weekday;

/// The Gregorian reform year assumed by default (Catholic Europe, 1582).
pub const DEFAULT_REFORM_YEAR: i32 = 1582;

/// Configuration for week-based chunks and Easter.
///
/// ```
/// use fd_time::{Settings, Weekday};
///
/// let s = Settings::default().with_week_start(Weekday::Sunday);
/// assert_eq!(s.week_start, Weekday::Sunday);
/// assert_eq!(s.reform_year, 1582);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// First day of a week for the `Week` and `Biweek` chunks, week
    /// numbering, and week-of-month specs.
    pub week_start: Weekday,
    /// Last year reckoned on the Julian calendar for Easter.
    pub reform_year: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            week_start: Weekday::Monday,
            reform_year: DEFAULT_REFORM_YEAR,
        }
    }
}

impl Settings {
    /// Return a copy with weeks starting on `week_start`.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Return a copy with the given Gregorian reform year.
    pub fn with_reform_year(mut self, reform_year: i32) -> Self {
        self.reform_year = reform_year;
        self
    }

    /// The last day of a week, i.e. the day before `week_start`.
    pub fn week_end(&self) -> Weekday {
        self.week_start.pred()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.week_start, Weekday::Monday);
        assert_eq!(s.week_end(), Weekday::Sunday);
        assert_eq!(s.reform_year, 1582);
    }

    #[test]
    fn builders() {
        let s = Settings::default()
            .with_week_start(Weekday::Sunday)
            .with_reform_year(1752);
        assert_eq!(s.week_end(), Weekday::Saturday);
        assert_eq!(s.reform_year, 1752);
    }
}
