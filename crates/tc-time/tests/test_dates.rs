//! Integration tests for the `Date` type: construction, round-trips,
//! weekday and ISO-week behavior across the whole supported range.

use proptest::prelude::*;

use tc_time::date::{days_in_month, is_leap_year};
use tc_time::{Date, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn range_bounds() {
    assert_eq!(Date::MIN, date(1900, 1, 1));
    assert_eq!(Date::MAX, date(2199, 12, 31));
    assert_eq!(Date::MIN.weekday(), Weekday::Monday);
}

#[test]
fn leap_year_rules() {
    assert!(is_leap_year(2000)); // divisible by 400
    assert!(!is_leap_year(1900)); // century, not by 400
    assert!(!is_leap_year(2100));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
}

#[test]
fn serial_is_contiguous_across_boundaries() {
    // Month, year, and leap-day boundaries are one serial step apart.
    assert_eq!(date(2024, 1, 31) + 1, date(2024, 2, 1));
    assert_eq!(date(2024, 2, 29) + 1, date(2024, 3, 1));
    assert_eq!(date(2023, 12, 31) + 1, date(2024, 1, 1));
    assert_eq!(date(2100, 2, 28) + 1, date(2100, 3, 1));
}

#[test]
fn known_weekdays() {
    assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2024, 1, 30).weekday(), Weekday::Tuesday);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(2199, 12, 31).weekday(), Weekday::Tuesday);
}

#[test]
fn iso_week_53_years() {
    // Years whose ISO calendar has 53 weeks.
    assert_eq!(date(2015, 12, 31).iso_week(), 53);
    assert_eq!(date(2020, 12, 31).iso_week(), 53);
    assert_eq!(date(2026, 12, 31).iso_week(), 53);
    // And one that hands its last days to week 1 of the next year.
    assert_eq!(date(2024, 12, 31).iso_week(), 1);
    assert_eq!(date(2024, 12, 31).iso_week_year(), 2025);
}

proptest! {
    #[test]
    fn serial_ymd_roundtrip(serial in 0i32..=109_572) {
        let d = Date::from_serial(serial).unwrap();
        let rebuilt = Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap();
        prop_assert_eq!(rebuilt, d);
        prop_assert_eq!(rebuilt.serial(), serial);
    }

    #[test]
    fn components_always_valid(serial in 0i32..=109_572) {
        let d = Date::from_serial(serial).unwrap();
        prop_assert!((1900..=2199).contains(&d.year()));
        prop_assert!((1..=12).contains(&d.month()));
        prop_assert!(d.day_of_month() >= 1);
        prop_assert!(d.day_of_month() <= days_in_month(d.year(), d.month()));
        prop_assert!((1..=366).contains(&d.day_of_year()));
    }

    #[test]
    fn weekday_advances_daily(serial in 0i32..109_572) {
        let d = Date::from_serial(serial).unwrap();
        let next = d + 1;
        let expected = d.weekday().ordinal() % 7 + 1;
        prop_assert_eq!(next.weekday().ordinal(), expected);
    }

    #[test]
    fn iso_week_in_range(serial in 0i32..=109_572) {
        let d = Date::from_serial(serial).unwrap();
        let week = d.iso_week();
        prop_assert!((1..=53).contains(&week), "week {} for {}", week, d);
    }

    #[test]
    fn display_parse_roundtrip(serial in 0i32..=109_572) {
        let d = Date::from_serial(serial).unwrap();
        let parsed: Date = d.to_string().parse().unwrap();
        prop_assert_eq!(parsed, d);
    }
}
