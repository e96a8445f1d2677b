//! `Date` type.
//!
//! Dates are stored as a serial number of days since an epoch: serial 1 is
//! January 1, 1900. The supported range is 1900-01-01 to 2199-12-31, and
//! every arithmetic operation that would leave it returns [`Error::Date`].
//!
//! Adding months or years keeps the day of month where possible and clamps
//! it to the last day of the target month otherwise, so 29 February plus one
//! year is 28 February.

use std::str::FromStr;

use cat_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

const MIN_YEAR: u16 = 1900;
const MAX_YEAR: u16 = 2199;

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Like [`from_ymd`](Self::from_ymd), but a day past the end of the month
    /// is clamped to the month's last day (`2023-02-29` becomes `2023-02-28`).
    pub fn from_ymd_clamped(year: u16, month: u8, day: u8) -> Result<Self> {
        if (MIN_YEAR..=MAX_YEAR).contains(&year) && (1..=12).contains(&month) {
            Self::from_ymd(year, month, day.min(days_in_month(year, month)))
        } else {
            Self::from_ymd(year, month, day)
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days overflows")))
            .and_then(Self::from_serial)
    }

    /// Advance by `n` calendar years, clamping 29 February when needed.
    pub fn add_years(self, n: i32) -> Result<Self> {
        let (y, m, d) = ymd_from_serial(self.0);
        let out_of_range =
            || Error::Date(format!("{self} + {n} years leaves the supported range"));
        let year = (y as i32)
            .checked_add(n)
            .and_then(|year| u16::try_from(year).ok())
            .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
            .ok_or_else(out_of_range)?;
        Self::from_ymd_clamped(year, m, d)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let mut field = |name: &str| {
            parts
                .next()
                .ok_or_else(|| Error::Date(format!("missing {name} in '{s}'")))
        };
        let (y, m, d) = (field("year")?, field("month")?, field("day")?);
        let bad = |_| Error::Date(format!("cannot parse '{s}' as YYYY-MM-DD"));
        Date::from_ymd(
            y.parse().map_err(bad)?,
            m.parse().map_err(bad)?,
            d.parse().map_err(bad)?,
        )
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Serial of January 1 of `year`.
fn year_start(year: u16) -> i32 {
    let y = year as i32;
    // leap years in [1900, year); 1900 itself is not a leap year
    let leaps = (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    (y - 1900) * 365 + leaps.max(0) + 1
}

fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let mut serial = year_start(year) + MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32 - 1
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = ((serial - 1) / 365 + MIN_YEAR as i32) as u16;
    while y > MIN_YEAR && serial < year_start(y) {
        y -= 1;
    }
    let mut remaining = serial - year_start(y) + 1;
    let mut m = 1u8;
    while m < 12 && remaining > days_in_month(y, m) as i32 {
        remaining -= days_in_month(y, m) as i32;
        m += 1;
    }
    (y, m, remaining as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(Date::from_ymd(1901, 1, 1).unwrap().serial(), 366);
        assert_eq!(Date::from_ymd(2199, 12, 31).unwrap(), Date::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29),
            (2100, 2, 28),
            (2000, 1, 1),
            (2023, 6, 15),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid() {
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_serial(0).is_err());
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_add_years_clamps_leap_day() {
        let d = Date::from_ymd(2012, 2, 29).unwrap();
        assert_eq!(d.add_years(1).unwrap(), Date::from_ymd(2013, 2, 28).unwrap());
        assert_eq!(d.add_years(4).unwrap(), Date::from_ymd(2016, 2, 29).unwrap());
        assert_eq!(d.add_years(-12).unwrap(), Date::from_ymd(2000, 2, 29).unwrap());
    }

    #[test]
    fn test_add_years_out_of_range() {
        let d = Date::from_ymd(2023, 6, 15).unwrap();
        assert!(matches!(d.add_years(i32::MAX), Err(Error::Date(_))));
        assert!(matches!(d.add_years(i32::MIN), Err(Error::Date(_))));
        assert!(matches!(d.add_years(177), Err(Error::Date(_))));
        assert!(matches!(d.add_years(-124), Err(Error::Date(_))));
        assert_eq!(d.add_years(176).unwrap(), Date::from_ymd(2199, 6, 15).unwrap());
        assert!(matches!(d.add_days(i32::MAX), Err(Error::Date(_))));
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d.add_days(31).unwrap();
        assert_eq!(d2, Date::from_ymd(2023, 2, 1).unwrap());
        assert_eq!(d2 - d, 31);
        assert_eq!(d - d2, -31);
        assert_eq!(d.add_years(2).unwrap().year(), 2025);
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2010-03-15".parse().unwrap();
        assert_eq!(d, Date::from_ymd(2010, 3, 15).unwrap());
        assert_eq!(d.to_string(), "2010-03-15");
        assert_eq!(format!("{d:?}"), "Date(2010-03-15)");
        assert!("2010-03".parse::<Date>().is_err());
        assert!("2010-xx-01".parse::<Date>().is_err());
    }
}
