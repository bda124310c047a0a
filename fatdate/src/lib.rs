//! # fatdate
//!
//! Calendar periods for people who think in quarters, semimonths, and
//! trading days.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! fatdate = "0.1"
//! ```
//!
//! ```rust
//! use fatdate::spec::{resolve_spec, Select};
//! use fatdate::time::{Calendar, Date, HolidayCalendar};
//!
//! let today = Date::from_ymd(2024, 11, 1).unwrap();
//! let thanksgiving = resolve_spec("11-4Th", Select::From, &today).unwrap().unwrap();
//! assert!(HolidayCalendar::Exchange.is_holiday(thanksgiving));
//! assert_eq!(HolidayCalendar::Exchange.next_workday(thanksgiving - 1), thanksgiving + 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use fd_core as core;

/// Date, chunk, Easter, and holiday calendar types.
pub use fd_time as time;

/// Period-specification parser and resolver.
pub use fd_spec as spec;

pub use fd_core::{Error, Result};
