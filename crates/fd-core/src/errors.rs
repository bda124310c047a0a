//! Error types for fatdate.
//!
//! Every fallible operation in the workspace reports one of the variants of
//! [`Error`].  Errors are local and final: there is no partial result, and
//! the caller decides whether to report or substitute a default.  The
//! [`ensure_range!`](crate::ensure_range) and [`fail!`](crate::fail) macros
//! cover the two checks that recur across the chunk, holiday, and spec code.

use thiserror::Error;

/// The top-level error type used throughout fatdate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A chunk name outside the nine recognised period kinds.
    #[error("unknown chunk: '{0}'")]
    InvalidChunk(String),

    /// A numeric component (month, week, quarter, half, day-of-year,
    /// ordinal, ISO weekday) outside its valid domain.
    #[error("invalid {what} ({min}-{max}): '{value}'")]
    InvalidRange {
        /// What the number was supposed to denote, e.g. `"month number"`.
        what: &'static str,
        /// The offending value.
        value: i64,
        /// Smallest allowed value.
        min: i64,
        /// Largest allowed value.
        max: i64,
    },

    /// The requested nth weekday or week-of-month does not exist.
    #[error("{0}")]
    NoSuchOccurrence(String),

    /// The input matches none of the period-spec forms.
    #[error("unrecognized date spec: '{0}'")]
    UnrecognizedSpec(String),

    /// Easter was requested for a year before 30.
    #[error("Easter is undefined before the year 30, got {0}")]
    UndefinedEaster(i32),

    /// Year, month, and day do not form a calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A weekday name that does not start with a known two-letter prefix.
    #[error("there is no weekday named '{0}'")]
    InvalidWeekday(String),

    /// A period selector other than `from` or `to`.
    #[error("invalid date spec type: '{0}'")]
    InvalidSelect(String),
}

/// Shorthand `Result` type used throughout fatdate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidRange { .. })` unless `min <= value <= max`.
///
/// # Example
/// ```
/// use fd_core::{ensure_range, errors::Error};
/// fn quarter(q: u32) -> fd_core::Result<u32> {
///     ensure_range!(q, 1, 4, "quarter number");
///     Ok(q)
/// }
/// assert!(quarter(3).is_ok());
/// assert_eq!(
///     quarter(5),
///     Err(Error::InvalidRange { what: "quarter number", value: 5, min: 1, max: 4 })
/// );
/// ```
#[macro_export]
macro_rules! ensure_range {
    ($value:expr, $min:expr, $max:expr, $what:expr) => {{
        let value = $value as i64;
        let (min, max) = ($min as i64, $max as i64);
        if value < min || value > max {
            return Err($crate::errors::Error::InvalidRange {
                what: $what,
                value,
                min,
                max,
            });
        }
    }};
}

/// Return `Err(Error::NoSuchOccurrence(..))` immediately.
///
/// # Example
/// ```
/// use fd_core::fail;
/// fn fifth_week() -> fd_core::Result<()> {
///     fail!("no week number {} in {}-{:02}", 5, 2010, 9);
/// }
/// assert_eq!(
///     fifth_week().unwrap_err().to_string(),
///     "no week number 5 in 2010-09"
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::NoSuchOccurrence(format!($($msg)*)))
    };
}
