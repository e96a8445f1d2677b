//! # cat-time
//!
//! Calendar dates and day-count conventions.
//!
//! Only the calendar arithmetic the simulators need is provided: adding
//! days and years to a date, the signed day difference between two dates,
//! and year fractions under a day-count convention.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use day_counter::{Actual36525, Actual365Fixed, DayCountConvention, DayCounter};
