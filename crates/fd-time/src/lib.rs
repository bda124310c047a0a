//! # fd-time
//!
//! Date, chunk arithmetic, Easter, and holiday calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and workday navigation.
pub mod calendar;

/// The federal and exchange holiday calendars.
pub mod calendars;

/// `Chunk`: year, half, quarter, bimonth, month, semimonth, biweek, week, day.
pub mod chunk;

/// `Clock`: the source of "today".
pub mod clock;

/// `Date` type.
pub mod date;

/// Western Easter, Julian or Gregorian.
pub mod easter;

/// `Month`: month of the year.
pub mod month;

/// Week-start and calendar-reform settings.
pub mod settings;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use calendars::{HolidayCalendar, NewYorkStockExchange, UnitedStatesFederal};
pub use chunk::Chunk;
pub use clock::{Clock, SystemClock};
pub use date::{days_in_month, is_leap_year, Date};
pub use easter::easter;
pub use month::Month;
pub use settings::{Settings, DEFAULT_REFORM_YEAR};
pub use weekday::Weekday;
