//! `Date` — calendar-day value type.
//!
//! A `Date` is a serial number of days since the epoch **January 1, 1900**
//! (serial 0), which is a Monday. It carries year/month/day resolution
//! only: no time of day and no time zone, so comparisons are always by
//! calendar day.
//!
//! # Range
//! The valid range is 1900-01-01 to 2199-12-31.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use tc_core::errors::{Error, Result};
use tc_core::Year;

/// A calendar date represented as a day serial.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900 (a Monday).
    pub const MIN: Date = Date(0);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_572);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (0 = 1900-01-01).
    ///
    /// Returns an error if the serial is outside the valid range.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < 0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [0, {}]",
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
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

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("month is always in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let year = self.year();
        (self.0 - serial_from_ymd(year, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 0 is a Monday, so the ordinal falls out of the serial.
        let w = (self.0.rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── ISO-8601 week ─────────────────────────────────────────────────────────

    /// Return the ISO-8601 week number (1–53).
    ///
    /// ISO weeks run Monday through Sunday; a date belongs to the week
    /// containing its week's Thursday, so the first days of January can
    /// fall into week 52/53 of the previous ISO year and late December
    /// days into week 1 of the next.
    pub fn iso_week(&self) -> u8 {
        let thursday = self.iso_thursday();
        let year = ymd_from_serial(thursday).0;
        ((thursday - serial_from_ymd(year, 1, 1)) / 7 + 1) as u8
    }

    /// Return the ISO-8601 week-based year the date belongs to.
    pub fn iso_week_year(&self) -> Year {
        ymd_from_serial(self.iso_thursday()).0
    }

    /// Serial of the Thursday in this date's Monday-based week.
    ///
    /// Computed on raw serials: near the range bounds the Thursday may
    /// itself lie just outside the representable `Date` range.
    fn iso_thursday(&self) -> i32 {
        self.0 + 4 - self.weekday().ordinal() as i32
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition out of range");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction out of range");
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
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO-8601 calendar date, `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self> {
        let parse_err = || Error::Parse(format!("expected YYYY-MM-DD, got {s:?}"));
        let mut parts = s.split('-');
        let y = parts.next().ok_or_else(parse_err)?;
        let m = parts.next().ok_or_else(parse_err)?;
        let d = parts.next().ok_or_else(parse_err)?;
        if parts.next().is_some() || y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(parse_err());
        }
        let year = y.parse::<Year>().map_err(|_| parse_err())?;
        let month = m.parse::<u8>().map_err(|_| parse_err())?;
        let day = d.parse::<u8>().map_err(|_| parse_err())?;
        Date::from_ymd(year, month, day)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

// The serial ↔ (year, month, day) conversions use era-based civil-calendar
// arithmetic over 400-year (146097-day) cycles, shifted so that serial 0 is
// 1900-01-01. Internally years run March-based so leap days land at the end
// of the counting year.

const EPOCH_SHIFT: i64 = 693_901; // days from 0000-03-01 to 1900-01-01

fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let y = year as i64 - i64::from(month <= 2);
    let era = y / 400;
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12; // March = 0 … February = 11
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    (era * 146_097 + doe - EPOCH_SHIFT) as i32
}

fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    let z = serial as i64 + EPOCH_SHIFT;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let mut y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    if m <= 2 {
        y += 1;
    }
    (y as Year, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
