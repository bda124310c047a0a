//! `Chunk`: the nine calendar period kinds and their arithmetic.
//!
//! Every chunk partitions the timeline into contiguous spans.  For any date
//! the span containing it has a well-defined first and last day, and the
//! date can be moved forward or backward by whole spans.  `Week` and
//! `Biweek` depend on the configured first day of the week, so every
//! operation takes a [`Settings`].
//!
//! ```
//! use fd_time::{Chunk, Date, Settings};
//!
//! let s = Settings::default();
//! let d = Date::from_ymd(2012, 7, 18).unwrap();
//! assert_eq!(Chunk::Quarter.beginning_of(d, &s), Date::from_ymd(2012, 7, 1).unwrap());
//! assert_eq!(Chunk::Semimonth.end_of(d, &s), Date::from_ymd(2012, 7, 31).unwrap());
//! assert_eq!(Chunk::Semimonth.advance(d, 1), Date::from_ymd(2012, 8, 3).unwrap());
//! ```

use crate::date::Date;
use crate::settings::Settings;
use fd_core::errors::{Error, Result};

/// A calendar period kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Chunk {
    /// A calendar year.
    Year,
    /// January–June or July–December.
    Half,
    /// A calendar quarter.
    Quarter,
    /// A pair of months starting on an odd month (Jan–Feb, Mar–Apr, …).
    Bimonth,
    /// A calendar month.
    Month,
    /// Days 1–15 or 16–end of a month.
    Semimonth,
    /// A pair of weeks, odd-numbered week first.
    Biweek,
    /// A week starting on [`Settings::week_start`].
    Week,
    /// A single day.
    Day,
}

impl Chunk {
    /// All chunks, longest first.
    pub const ALL: [Chunk; 9] = [
        Chunk::Year,
        Chunk::Half,
        Chunk::Quarter,
        Chunk::Bimonth,
        Chunk::Month,
        Chunk::Semimonth,
        Chunk::Biweek,
        Chunk::Week,
        Chunk::Day,
    ];

    /// Lower-case name (`"year"`, `"semimonth"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            Chunk::Year => "year",
            Chunk::Half => "half",
            Chunk::Quarter => "quarter",
            Chunk::Bimonth => "bimonth",
            Chunk::Month => "month",
            Chunk::Semimonth => "semimonth",
            Chunk::Biweek => "biweek",
            Chunk::Week => "week",
            Chunk::Day => "day",
        }
    }

    /// Number of months spanned by the month-aligned chunks.
    fn months(&self) -> Option<i32> {
        match self {
            Chunk::Year => Some(12),
            Chunk::Half => Some(6),
            Chunk::Quarter => Some(3),
            Chunk::Bimonth => Some(2),
            Chunk::Month => Some(1),
            _ => None,
        }
    }

    /// First day of the span of this chunk containing `date`.
    pub fn beginning_of(&self, date: Date, settings: &Settings) -> Date {
        if let Some(span) = self.months() {
            let (y, m, _) = date.ymd_parts();
            let first = ((m as i32 - 1) / span * span + 1) as u8;
            return Date::ymd(y, first, 1);
        }
        match self {
            Chunk::Semimonth => {
                let (y, m, d) = date.ymd_parts();
                Date::ymd(y, m, if d <= 15 { 1 } else { 16 })
            }
            Chunk::Biweek => {
                let bow = date.beginning_of_week(settings);
                if date.week_number(settings) % 2 == 1 {
                    bow
                } else {
                    bow - 7
                }
            }
            Chunk::Week => date.beginning_of_week(settings),
            _ => date,
        }
    }

    /// Last day of the span of this chunk containing `date`.
    ///
    /// The final biweek of a week-year with an odd number of weeks is
    /// truncated to a single week so that week 1 of the next year always
    /// opens a fresh biweek.
    pub fn end_of(&self, date: Date, settings: &Settings) -> Date {
        if let Some(span) = self.months() {
            let (y, m, _) = date.ymd_parts();
            let last = ((m as i32 - 1) / span * span + span) as u8;
            return Date::ymd(y, last, 1).end_of_month();
        }
        match self {
            Chunk::Semimonth => {
                let (y, m, d) = date.ymd_parts();
                if d <= 15 {
                    Date::ymd(y, m, 15)
                } else {
                    date.end_of_month()
                }
            }
            Chunk::Biweek => {
                if date.week_number(settings) % 2 == 0 {
                    date.end_of_week(settings)
                } else if (date + 7).week_number(settings) == 1 {
                    date.end_of_week(settings)
                } else {
                    (date + 7).end_of_week(settings)
                }
            }
            Chunk::Week => date.end_of_week(settings),
            _ => date,
        }
    }

    /// Whether `date` is the first day of its span.
    pub fn is_beginning_of(&self, date: Date, settings: &Settings) -> bool {
        date == self.beginning_of(date, settings)
    }

    /// Whether `date` is the last day of its span.
    pub fn is_end_of(&self, date: Date, settings: &Settings) -> bool {
        date == self.end_of(date, settings)
    }

    /// Move `date` by `n` chunks (backward when `n` is negative).
    ///
    /// Month-aligned chunks keep the day of the month, clamped to the length
    /// of the destination month.  An odd number of semimonths moves 15 days
    /// within the half-month grid: from the first half, day `d` maps to day
    /// `d + 15` (capped at the month's end); from the second half, day `d`
    /// maps to day `d - 15` of the following month (capped at the 15th).
    /// Every pair of semimonths is one whole month.  Moves far beyond the
    /// valid date range saturate instead of overflowing.
    pub fn advance(&self, date: Date, n: i32) -> Date {
        if n == 0 {
            return date;
        }
        if let Some(span) = self.months() {
            return date.shift_months(n.saturating_mul(span));
        }
        match self {
            Chunk::Semimonth => {
                let moved = date.shift_months(n / 2);
                match n % 2 {
                    1 => semimonth_forward(moved),
                    -1 => semimonth_backward(moved),
                    _ => moved,
                }
            }
            Chunk::Biweek => date + n.saturating_mul(14),
            Chunk::Week => date + n.saturating_mul(7),
            _ => date + n,
        }
    }
}

fn semimonth_forward(date: Date) -> Date {
    let (y, m, d) = date.ymd_parts();
    if d <= 15 {
        Date::ymd(y, m, (d + 15).min(date.days_in_month()))
    } else {
        let next = Date::ymd(y, m, 1).shift_months(1);
        Date::ymd(next.year(), next.month(), (d - 15).min(15))
    }
}

fn semimonth_backward(date: Date) -> Date {
    let (y, m, d) = date.ymd_parts();
    if d <= 15 {
        let prev = Date::ymd(y, m, 1).shift_months(-1);
        Date::ymd(prev.year(), prev.month(), (d + 15).min(prev.days_in_month()))
    } else {
        Date::ymd(y, m, (d - 15).min(15))
    }
}

impl std::str::FromStr for Chunk {
    type Err = Error;

    /// Parse a chunk name, case-insensitively.  `fortnight` is accepted as
    /// a synonym of `biweek`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        if name == "fortnight" {
            return Ok(Chunk::Biweek);
        }
        Chunk::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::InvalidChunk(s.to_string()))
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── Week helpers on Date ──────────────────────────────────────────────────────

impl Date {
    /// First day of the week containing this date.
    pub fn beginning_of_week(self, settings: &Settings) -> Date {
        self - settings.week_start.days_until(self.weekday()) as i32
    }

    /// Last day of the week containing this date.
    pub fn end_of_week(self, settings: &Settings) -> Date {
        self.beginning_of_week(settings) + 6
    }

    /// Week number within the week-year.
    ///
    /// Week 1 is the week opening on the year's first
    /// [`week_start`](Settings::week_start) day; any days before it belong
    /// to the last week of the previous year.
    pub fn week_number(self, settings: &Settings) -> u8 {
        let mut first = first_week_start(self.year(), settings);
        if self < first {
            first = first_week_start(self.year() - 1, settings);
        }
        ((self - first) / 7 + 1) as u8
    }

    /// The first day of the span of `chunk` containing this date.
    pub fn beginning_of_chunk(self, chunk: Chunk, settings: &Settings) -> Date {
        chunk.beginning_of(self, settings)
    }

    /// The last day of the span of `chunk` containing this date.
    pub fn end_of_chunk(self, chunk: Chunk, settings: &Settings) -> Date {
        chunk.end_of(self, settings)
    }

    /// Move this date by `n` chunks.
    pub fn add_chunk(self, chunk: Chunk, n: i32) -> Date {
        chunk.advance(self, n)
    }
}

fn first_week_start(year: i32, settings: &Settings) -> Date {
    let jan1 = Date::ymd(year, 1, 1);
    jan1 + jan1.weekday().days_until(settings.week_start) as i32
}
