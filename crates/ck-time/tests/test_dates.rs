//! Integration tests for `Date` and the Gregorian `CalendarSystem`.

use ck_time::date::{days_in_month, is_leap_year};
use ck_time::{CalendarSystem, Date, Gregorian, TimeUnit, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Calendar facts ───────────────────────────────────────────────────────────

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2023));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(2023, 13), 0);
}

#[test]
fn consecutive_days_cycle_weekdays() {
    let start = date(2023, 12, 25); // Monday
    let mut d = start;
    for i in 0..400 {
        let expected = Weekday::from_ordinal(((i + 1) % 7 + 1) as u8).unwrap();
        assert_eq!(d.weekday(), expected, "weekday mismatch at {d}");
        d = d.add_days(1).unwrap();
    }
}

#[test]
fn every_month_of_a_century_is_contiguous() {
    let mut d = date(2000, 1, 1);
    while d < date(2100, 1, 1) {
        let r = Gregorian.month_range(d).unwrap();
        assert_eq!(r.start, d);
        assert_eq!(i32::from(Gregorian.days_in_month(d)), r.days());
        assert_eq!(r.end.day_of_month(), 1);
        d = r.end;
    }
}

#[test]
fn month_offsets_clamp_and_never_skip_a_month() {
    let d = date(2023, 1, 31);
    let months: Vec<(u16, u8, u8)> = (0..12)
        .map(|n| Gregorian.add_months(d, n).unwrap().ymd())
        .collect();
    assert_eq!(months[1], (2023, 2, 28));
    assert_eq!(months[3], (2023, 4, 30));
    for (n, (_, m, _)) in months.iter().enumerate() {
        assert_eq!(*m as usize, n + 1);
    }
}

#[test]
fn advance_by_unit() {
    let d = date(2024, 2, 29);
    assert_eq!(d.advance(1, TimeUnit::Years).unwrap(), date(2025, 2, 28));
    assert_eq!(d.advance(4, TimeUnit::Years).unwrap(), date(2028, 2, 29));
    assert_eq!(d.advance(3, TimeUnit::Weeks).unwrap(), date(2024, 3, 21));
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn serial_roundtrip(serial in 1i32..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, day) = d.ymd();
        prop_assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
    }

    #[test]
    fn add_weeks_keeps_weekday(serial in 1000i32..3_000_000, n in -100i32..100) {
        let d = Date::from_serial(serial).unwrap();
        let moved = Gregorian.add_weeks(d, n).unwrap();
        prop_assert_eq!(moved.weekday(), d.weekday());
        prop_assert_eq!(moved - d, 7 * n);
    }

    #[test]
    fn ordinal_in_week_counts_from_first_weekday(serial in 10i32..3_000_000, first in 1u8..=7) {
        let d = Date::from_serial(serial).unwrap();
        let first = Weekday::from_ordinal(first).unwrap();
        let ord = Gregorian.ordinal_in_week(d, first);
        prop_assert!((1..=7).contains(&ord));
        let week_start = d.add_days(1 - i32::from(ord)).unwrap();
        prop_assert_eq!(week_start.weekday(), first);
    }
}
