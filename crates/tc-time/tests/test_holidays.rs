//! Integration tests for the Baden-Württemberg holiday calendar: full
//! per-year holiday lists checked in both directions, plus the Easter
//! range property.

use proptest::prelude::*;

use tc_time::easter::easter_sunday;
use tc_time::{BadenWuerttemberg, Date, HolidayCalendar};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Assert that the calendar's holidays for `year` are exactly `expected`:
/// every computed holiday is expected and every expected date is found.
fn check_holidays(cal: &dyn HolidayCalendar, year: u16, expected: &[Date]) {
    let calculated: Vec<Date> = cal
        .holidays_in_year(year)
        .unwrap()
        .into_iter()
        .map(|(d, _)| d)
        .collect();

    for d in &calculated {
        assert!(
            expected.contains(d),
            "{}: {} calculated as holiday but not expected ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
    for d in expected {
        assert!(
            calculated.contains(d),
            "{}: {} expected as holiday but not found ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
}

#[test]
fn bw_holidays_2023() {
    // Easter Sunday 2023: April 9.
    let expected = vec![
        date(2023, 1, 1),
        date(2023, 1, 6),
        date(2023, 4, 7),
        date(2023, 4, 10),
        date(2023, 5, 1),
        date(2023, 5, 18),
        date(2023, 5, 29),
        date(2023, 6, 8),
        date(2023, 10, 3),
        date(2023, 11, 1),
        date(2023, 12, 25),
        date(2023, 12, 26),
    ];
    check_holidays(&BadenWuerttemberg, 2023, &expected);
}

#[test]
fn bw_holidays_2024() {
    // Easter Sunday 2024: March 31.
    let expected = vec![
        date(2024, 1, 1),
        date(2024, 1, 6),
        date(2024, 3, 29),
        date(2024, 4, 1),
        date(2024, 5, 1),
        date(2024, 5, 9),
        date(2024, 5, 20),
        date(2024, 5, 30),
        date(2024, 10, 3),
        date(2024, 11, 1),
        date(2024, 12, 25),
        date(2024, 12, 26),
    ];
    check_holidays(&BadenWuerttemberg, 2024, &expected);
}

#[test]
fn bw_holidays_2025() {
    // Easter Sunday 2025: April 20.
    let expected = vec![
        date(2025, 1, 1),
        date(2025, 1, 6),
        date(2025, 4, 18),
        date(2025, 4, 21),
        date(2025, 5, 1),
        date(2025, 5, 29),
        date(2025, 6, 9),
        date(2025, 6, 19),
        date(2025, 10, 3),
        date(2025, 11, 1),
        date(2025, 12, 25),
        date(2025, 12, 26),
    ];
    check_holidays(&BadenWuerttemberg, 2025, &expected);
}

#[test]
fn good_friday_scenario() {
    // Easter 2024-03-31: Good Friday is 2024-03-29, the Thursday before
    // is an ordinary day.
    let cal = BadenWuerttemberg;
    assert!(cal.is_public_holiday(date(2024, 3, 29)));
    assert!(!cal.is_public_holiday(date(2024, 3, 28)));
}

#[test]
fn christmas_scenario() {
    let cal = BadenWuerttemberg;
    assert!(cal.is_public_holiday(date(2024, 12, 25)));
    assert!(cal.is_public_holiday(date(2024, 12, 26)));
    assert!(!cal.is_public_holiday(date(2024, 12, 24)));
}

#[test]
fn holidays_fall_on_weekends_too() {
    // 2023-01-01 is a Sunday and still a public holiday.
    let cal = BadenWuerttemberg;
    assert!(cal.is_public_holiday(date(2023, 1, 1)));
    assert!(cal.is_weekend(date(2023, 1, 1)));
    assert!(!cal.is_working_day(date(2023, 1, 1)));
}

proptest! {
    #[test]
    fn easter_between_march_22_and_april_25(year in 1900u16..=2100) {
        let e = easter_sunday(year).unwrap();
        let lower = date(year, 3, 22);
        let upper = date(year, 4, 25);
        prop_assert!(lower <= e && e <= upper, "Easter {} out of range: {}", year, e);
    }

    #[test]
    fn holiday_check_is_pure(serial in 0i32..=109_572) {
        let cal = BadenWuerttemberg;
        let d = Date::from_serial(serial).unwrap();
        prop_assert_eq!(cal.is_public_holiday(d), cal.is_public_holiday(d));
        prop_assert_eq!(cal.holiday_on(d), cal.holiday_on(d));
    }

    #[test]
    fn eleven_or_twelve_holidays_per_year(year in 1900u16..=2199) {
        // Twelve statutory holidays; eleven distinct dates in the years
        // where Christi Himmelfahrt coincides with Tag der Arbeit.
        let n = BadenWuerttemberg.holidays_in_year(year).unwrap().len();
        prop_assert!(n == 11 || n == 12, "{} holidays in {}", n, year);
    }
}
