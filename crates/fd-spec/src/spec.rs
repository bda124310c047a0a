//! The typed result of parsing a period spec.
//!
//! A [`DateSpec`] says *which* period a string names; it does not yet say
//! which date, because the missing year or month and every clock-relative
//! form depend on "today".  [`Resolver`](crate::Resolver) turns a
//! [`ParsedSpec`] into a date.

use fd_core::errors::{Error, Result};
use fd_time::{Chunk, Weekday};

/// Whether a period resolves to its first or its last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Select {
    /// The first day of the period.
    #[default]
    From,
    /// The last day of the period.
    To,
}

impl std::str::FromStr for Select {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "from" => Ok(Select::From),
            "to" => Ok(Select::To),
            _ => Err(Error::InvalidSelect(s.to_string())),
        }
    }
}

impl std::fmt::Display for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Select::From => f.write_str("from"),
            Select::To => f.write_str("to"),
        }
    }
}

/// The first or second half of a month, written `A` or `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthHalf {
    /// Days 1 through 15.
    A,
    /// Day 16 through the end of the month.
    B,
}

/// One period named by a spec string.
///
/// `year` and `month` fields that are `None` were omitted from the input
/// and default to the clock's current year and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateSpec {
    /// `[YYYY-]DDD`: a single day of the year.
    DayOfYear {
        /// Explicit year.
        year: Option<i32>,
        /// Day of the year, 1–366.
        day: u16,
    },
    /// `[YYYY-]MM[-DD]`: a whole month, or one day when `day` is given.
    Month {
        /// Explicit year.
        year: Option<i32>,
        /// Month number, 1–12.
        month: u8,
        /// Day of the month, unchecked until resolution.
        day: Option<u8>,
    },
    /// `[YYYY-]Www[-D]` or `[YYYY-]wwW[-D]`: an ISO commercial week, or
    /// one ISO weekday of it.
    Week {
        /// Explicit year.
        year: Option<i32>,
        /// ISO week number, 1–53.
        week: u8,
        /// ISO weekday, 1 (Monday) – 7 (Sunday).
        day: Option<u8>,
    },
    /// `[YYYY-]Qn` or `[YYYY-]nQ`.
    Quarter {
        /// Explicit year.
        year: Option<i32>,
        /// Quarter number, 1–4.
        quarter: u8,
    },
    /// `[YYYY-]Hn` or `[YYYY-]nH`.
    Half {
        /// Explicit year.
        year: Option<i32>,
        /// Half number, 1–2.
        half: u8,
    },
    /// `YYYY`.
    Year {
        /// The year.
        year: i32,
    },
    /// `[YYYY-][MM-]A` or `…B`: one half of a month.
    HalfMonth {
        /// Explicit year.
        year: Option<i32>,
        /// Explicit month, 1–12.
        month: Option<u8>,
        /// Which half.
        half: MonthHalf,
    },
    /// `[YYYY-][MM-]i` … `vi`: a week of the month, clipped to the month.
    WeekOfMonth {
        /// Explicit year.
        year: Option<i32>,
        /// Explicit month, 1–12.
        month: Option<u8>,
        /// Week of the month, 1–6.
        week: u8,
    },
    /// `[YYYY-][MM-]±nDay`: the nth weekday of a month, counting from the
    /// end when negative.
    NthWeekday {
        /// Explicit year.
        year: Option<i32>,
        /// Explicit month, 1–12.
        month: Option<u8>,
        /// Ordinal, ±1 – ±5.
        nth: i8,
        /// The weekday.
        weekday: Weekday,
    },
    /// `[YYYY-]E[±n]`: Easter plus an offset in days.
    Easter {
        /// Explicit year.
        year: Option<i32>,
        /// Days after (or before, when negative) Easter Sunday.
        offset: i32,
    },
    /// `this_week`, `last_month`, `tomorrow`, …: the chunk containing
    /// today, shifted by `offset` chunks.
    Relative {
        /// The period kind.
        chunk: Chunk,
        /// −1 for last/yester, 0 for this/to, +1 for next.
        offset: i8,
    },
    /// `forever`: [`Date::BOT`](fd_time::Date::BOT) through
    /// [`Date::EOT`](fd_time::Date::EOT).
    Forever,
    /// `never`: no date at all.
    Never,
}

impl DateSpec {
    /// The name of the grammar rule that produces this variant.
    pub fn rule(&self) -> &'static str {
        match self {
            DateSpec::DayOfYear { .. } => "day-of-year",
            DateSpec::Month { .. } => "month",
            DateSpec::Week { .. } => "commercial-week",
            DateSpec::Quarter { .. } => "quarter",
            DateSpec::Half { .. } => "half",
            DateSpec::Year { .. } => "year",
            DateSpec::HalfMonth { .. } => "half-month",
            DateSpec::WeekOfMonth { .. } => "week-of-month",
            DateSpec::NthWeekday { .. } => "nth-weekday",
            DateSpec::Easter { .. } => "easter",
            DateSpec::Relative { .. } => "relative",
            DateSpec::Forever => "forever",
            DateSpec::Never => "never",
        }
    }
}

/// Which way a skip modifier walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward earlier dates (`<`, `<=`).
    Before,
    /// Toward later dates (`>`, `>=`).
    After,
}

/// A trailing `<Th`, `<=Th`, `>Th` or `>=Th`.
///
/// The exclusive forms always move at least one day; the inclusive forms
/// keep a date that already falls on `weekday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkipModifier {
    /// Direction of the walk.
    pub direction: Direction,
    /// Whether the starting date itself may be the answer.
    pub inclusive: bool,
    /// The weekday to stop on.
    pub weekday: Weekday,
}

/// A spec string split into its period and optional skip modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedSpec {
    /// The period named by the base spec.
    pub spec: DateSpec,
    /// The trailing weekday skip, if any.
    pub skip: Option<SkipModifier>,
}
