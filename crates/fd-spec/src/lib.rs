//! # fd-spec
//!
//! A compact language for naming calendar periods, and its resolver.
//!
//! `2012-W32`, `2024-Q3`, `last_month`, `2028-11<=Th` and friends each name
//! one period; [`resolve_spec`] returns its first or last day, reading
//! "today" from an explicit [`Clock`](fd_time::Clock) so that the
//! clock-relative forms stay deterministic.
//!
//! ```
//! use fd_spec::{resolve_spec, Select};
//! use fd_time::Date;
//!
//! let today = Date::from_ymd(2014, 12, 12).unwrap();
//! let from = resolve_spec("last_bimonth", Select::From, &today).unwrap();
//! let to = resolve_spec("last_bimonth", Select::To, &today).unwrap();
//! assert_eq!(from, Some(Date::from_ymd(2014, 9, 1).unwrap()));
//! assert_eq!(to, Some(Date::from_ymd(2014, 10, 31).unwrap()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `parse_american` and `month_from_name`.
pub mod american;

/// The ordered grammar rules and `parse`.
pub mod grammar;

/// `Resolver` and `resolve_spec`.
pub mod resolve;

/// `DateSpec`, `SkipModifier`, `Select`.
pub mod spec;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use american::{month_from_name, parse_american};
pub use grammar::parse;
pub use resolve::{resolve_spec, Resolver};
pub use spec::{DateSpec, Direction, MonthHalf, ParsedSpec, Select, SkipModifier};
