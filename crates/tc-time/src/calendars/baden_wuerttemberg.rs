//! Baden-Württemberg public-holiday calendar.

use crate::calendar::{Holiday, HolidayCalendar};
use crate::date::Date;
use crate::easter::easter_sunday_doy;
use crate::month::Month;

/// Public holidays of the German federal state of Baden-Württemberg.
///
/// The following twelve statutory holidays are observed:
/// * Neujahr (Jan 1)
/// * Heilige Drei Könige (Jan 6)
/// * Karfreitag (E − 2)
/// * Ostermontag (E + 1)
/// * Tag der Arbeit (May 1)
/// * Christi Himmelfahrt (E + 39)
/// * Pfingstmontag (E + 50)
/// * Fronleichnam (E + 60)
/// * Tag der Deutschen Einheit (Oct 3)
/// * Allerheiligen (Nov 1)
/// * 1\. Weihnachtstag (Dec 25)
/// * 2\. Weihnachtstag (Dec 26)
///
/// where E is Easter Sunday. Dec 24 and Dec 31 are ordinary days here,
/// unlike in bank settlement calendars.
#[derive(Debug, Clone, Copy, Default)]
pub struct BadenWuerttemberg;

impl HolidayCalendar for BadenWuerttemberg {
    fn name(&self) -> &str {
        "Baden-Württemberg"
    }

    fn holiday_on(&self, date: Date) -> Option<Holiday> {
        use Holiday::*;

        match (date.day_of_month(), date.month_of_year()) {
            (1, Month::January) => return Some(NewYear),
            (6, Month::January) => return Some(Epiphany),
            (1, Month::May) => return Some(LabourDay),
            (3, Month::October) => return Some(GermanUnity),
            (1, Month::November) => return Some(AllSaints),
            (25, Month::December) => return Some(ChristmasDay),
            (26, Month::December) => return Some(BoxingDay),
            _ => {}
        }

        let dd = date.day_of_year() as i32;
        let e = easter_sunday_doy(date.year()) as i32;
        match dd - e {
            -2 => Some(GoodFriday),
            1 => Some(EasterMonday),
            39 => Some(Ascension),
            50 => Some(WhitMonday),
            60 => Some(CorpusChristi),
            _ => None,
        }
    }
}
