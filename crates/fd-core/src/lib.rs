//! # fd-core
//!
//! Error definitions shared by the fatdate crates.
//!
//! The chunk arithmetic, the holiday calendars, and the period-spec parser
//! all report failures through the single [`Error`] enum defined here, so a
//! caller of the `fatdate` facade only has one error type to match on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure_range!` / `fail!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
