//! `DayCounter` trait and built-in day-count conventions.
//!
//! A day counter computes the fraction of a year between two dates. The
//! Beta loss simulator uses it to turn a reference window into the horizon
//! of its Poisson arrival process.

use crate::date::Date;
use cat_core::{Real, Time};
use serde::{Deserialize, Serialize};

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/365 (Fixed)"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

/// Actual/365 (Fixed) day counter.
///
/// `year_fraction = actual_days / 365`
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        (d2 - d1) as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// Actual/365.25 day counter.
///
/// `year_fraction = actual_days / 365.25`
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual36525;

impl DayCounter for Actual36525 {
    fn name(&self) -> &str {
        "Actual/365.25"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        (d2 - d1) as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.25
    }
}

/// Serializable selector for the built-in conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// [`Actual365Fixed`].
    Actual365Fixed,
    /// [`Actual36525`].
    #[default]
    Actual36525,
}

impl DayCountConvention {
    /// The day counter implementing this convention.
    pub fn day_counter(self) -> &'static dyn DayCounter {
        match self {
            DayCountConvention::Actual365Fixed => &Actual365Fixed,
            DayCountConvention::Actual36525 => &Actual36525,
        }
    }
}

impl DayCounter for DayCountConvention {
    fn name(&self) -> &str {
        self.day_counter().name()
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        self.day_counter().day_count(d1, d2)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_counter().year_fraction(d1, d2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn actual_365_fixed() {
        let dc = Actual365Fixed;
        assert_eq!(dc.day_count(date(2011, 1, 1), date(2012, 1, 1)), 365);
        assert_relative_eq!(dc.year_fraction(date(2012, 1, 1), date(2013, 1, 1)), 366.0 / 365.0);
    }

    #[test]
    fn actual_36525() {
        let dc = Actual36525;
        assert_relative_eq!(
            dc.year_fraction(date(2015, 1, 2), date(2018, 1, 2)),
            1096.0 / 365.25
        );
    }

    #[test]
    fn convention_dispatch() {
        assert_eq!(DayCountConvention::default(), DayCountConvention::Actual36525);
        assert_eq!(DayCountConvention::Actual365Fixed.name(), "Actual/365 (Fixed)");
        assert_relative_eq!(
            DayCountConvention::Actual365Fixed.year_fraction(date(2011, 1, 1), date(2012, 1, 1)),
            1.0
        );
    }
}
