//! `HolidayCalendar` trait and the `Holiday` enum.
//!
//! A holiday calendar knows which calendar days are statutory public
//! holidays in one jurisdiction. Hour entry treats weekends and public
//! holidays as non-working days.

use crate::date::Date;
use tc_core::errors::Result;
use tc_core::Year;

/// A statutory public holiday.
///
/// The set covers every holiday observed in the supported jurisdictions:
/// seven fixed-date holidays plus five movable ones at fixed offsets from
/// Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holiday {
    /// Neujahr (Jan 1).
    NewYear,
    /// Heilige Drei Könige (Jan 6).
    Epiphany,
    /// Karfreitag (Easter Sunday − 2 days).
    GoodFriday,
    /// Ostermontag (Easter Sunday + 1 day).
    EasterMonday,
    /// Tag der Arbeit (May 1).
    LabourDay,
    /// Christi Himmelfahrt (Easter Sunday + 39 days).
    Ascension,
    /// Pfingstmontag (Easter Sunday + 50 days).
    WhitMonday,
    /// Fronleichnam (Easter Sunday + 60 days).
    CorpusChristi,
    /// Tag der Deutschen Einheit (Oct 3).
    GermanUnity,
    /// Allerheiligen (Nov 1).
    AllSaints,
    /// 1. Weihnachtstag (Dec 25).
    ChristmasDay,
    /// 2. Weihnachtstag (Dec 26).
    BoxingDay,
}

impl std::fmt::Display for Holiday {
    /// The statutory German name.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Holiday::NewYear => "Neujahr",
            Holiday::Epiphany => "Heilige Drei Könige",
            Holiday::GoodFriday => "Karfreitag",
            Holiday::EasterMonday => "Ostermontag",
            Holiday::LabourDay => "Tag der Arbeit",
            Holiday::Ascension => "Christi Himmelfahrt",
            Holiday::WhitMonday => "Pfingstmontag",
            Holiday::CorpusChristi => "Fronleichnam",
            Holiday::GermanUnity => "Tag der Deutschen Einheit",
            Holiday::AllSaints => "Allerheiligen",
            Holiday::ChristmasDay => "1. Weihnachtstag",
            Holiday::BoxingDay => "2. Weihnachtstag",
        };
        write!(f, "{name}")
    }
}

/// A public-holiday calendar for one jurisdiction.
///
/// Implementing this trait for another federal state is the extension
/// point for jurisdictions beyond the built-in one.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable jurisdiction name (e.g. `"Baden-Württemberg"`).
    fn name(&self) -> &str;

    /// Return the holiday falling on `date`, if any.
    ///
    /// Comparison is by calendar day; `Date` carries no time zone, so
    /// callers normalize to local-calendar-day semantics before
    /// constructing one.
    fn holiday_on(&self, date: Date) -> Option<Holiday>;

    /// Return `true` if `date` is a public holiday.
    fn is_public_holiday(&self, date: Date) -> bool {
        self.holiday_on(date).is_some()
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if hours can be booked on `date`: neither a
    /// weekend nor a public holiday.
    fn is_working_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_public_holiday(date)
    }

    /// Collect all public holidays of `year` in calendar order.
    fn holidays_in_year(&self, year: Year) -> Result<Vec<(Date, Holiday)>> {
        let first = Date::from_ymd(year, 1, 1)?;
        let last = Date::from_ymd(year, 12, 31)?;
        let mut found = Vec::new();
        for serial in first.serial()..=last.serial() {
            let d = Date::from_serial(serial)?;
            if let Some(h) = self.holiday_on(d) {
                found.push((d, h));
            }
        }
        Ok(found)
    }
}
