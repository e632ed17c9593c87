//! Gregorian → lunar conversion.
//!
//! [`LunarCalendar`] is the seam for any lunisolar calendar implementation.
//! [`ChineseLunar`] backs it with ICU4X's astronomical Chinese calendar.
//! [`LunarConverter`] passes provider output through unchanged; the day-0
//! convention is left to the label formatter.

use ck_core::errors::{Error, Result};
use ck_time::Date;
use icu_calendar::chinese::Chinese;
use icu_calendar::Ref;

use crate::components::LunarComponents;

/// A lunar calendar system.
pub trait LunarCalendar: std::fmt::Debug {
    /// Human-readable name (e.g. `"Chinese"`).
    fn name(&self) -> &str;

    /// Return the lunar components of the Gregorian `date`.
    fn lunar_components(&self, date: Date) -> Result<LunarComponents>;
}

/// The traditional Chinese lunisolar calendar.
///
/// `year` is the 1-based year of the sexagenary cycle, so stem-branch names
/// follow directly from it.
#[derive(Debug)]
pub struct ChineseLunar {
    calendar: Chinese,
}

impl ChineseLunar {
    /// Create the provider using the compiled-in calendar data.
    pub fn new() -> Self {
        Self {
            calendar: Chinese::new(),
        }
    }
}

impl Default for ChineseLunar {
    fn default() -> Self {
        Self::new()
    }
}

impl LunarCalendar for ChineseLunar {
    fn name(&self) -> &str {
        "Chinese"
    }

    fn lunar_components(&self, date: Date) -> Result<LunarComponents> {
        let (y, m, d) = date.ymd();
        let iso = icu_calendar::Date::try_new_iso_date(i32::from(y), m, d)
            .map_err(|e| Error::Lunar(format!("{date:?}: {e}")))?;
        let lunar = iso.to_calendar(Ref(&self.calendar));

        let year = lunar
            .year()
            .cyclic
            .ok_or_else(|| Error::Lunar(format!("{date:?}: no cyclic year")))?;
        let (month, is_leap_month) = lunar
            .month()
            .code
            .parsed()
            .ok_or_else(|| Error::Lunar(format!("{date:?}: unparseable month code")))?;
        let day = lunar.day_of_month().0;
        checked_components(date, i32::from(year.get()), month, day, is_leap_month)
    }
}

/// Reject provider output whose month or day cannot be labelled.
fn checked_components(
    date: Date,
    year: i32,
    month: u8,
    day: u32,
    is_leap_month: bool,
) -> Result<LunarComponents> {
    if !(1..=12).contains(&month) || day > 30 {
        return Err(Error::Lunar(format!(
            "{date:?}: month {month} day {day} out of range"
        )));
    }
    Ok(LunarComponents::new(year, month, day as u8, is_leap_month))
}

/// Maps Gregorian dates to [`LunarComponents`] through a [`LunarCalendar`].
#[derive(Debug, Clone, Default)]
pub struct LunarConverter<L = ChineseLunar> {
    provider: L,
}

impl<L: LunarCalendar> LunarConverter<L> {
    /// Wrap a provider.
    pub fn new(provider: L) -> Self {
        Self { provider }
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &L {
        &self.provider
    }

    /// Convert `date`, returning the provider's output verbatim.
    pub fn convert(&self, date: Date) -> Result<LunarComponents> {
        let lunar = self.provider.lunar_components(date);
        if let Err(e) = &lunar {
            log::trace!("{} conversion failed: {e}", self.provider.name());
        }
        lunar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn chinese_new_year_2024() {
        let c = ChineseLunar::new()
            .lunar_components(date(2024, 2, 10))
            .unwrap();
        // Jia-Chen is year 41 of the cycle
        assert_eq!(c, LunarComponents::new(41, 1, 1, false));
    }

    #[test]
    fn month_after_leap_month_keeps_its_number() {
        // 2023 has a leap second month; 2023-06-23 is day 6 of the fifth.
        let c = ChineseLunar::new()
            .lunar_components(date(2023, 6, 23))
            .unwrap();
        assert_eq!(c, LunarComponents::new(40, 5, 6, false));
    }

    #[test]
    fn leap_month_is_flagged() {
        let c = ChineseLunar::new()
            .lunar_components(date(2023, 3, 22))
            .unwrap();
        assert_eq!(c, LunarComponents::new(40, 2, 1, true));
    }

    #[test]
    fn eve_of_new_year_belongs_to_previous_year() {
        let c = ChineseLunar::new()
            .lunar_components(date(2024, 2, 9))
            .unwrap();
        assert_eq!(c.year, 40);
        assert_eq!(c.month, 12);
        assert!(!c.is_leap_month);
    }

    #[test]
    fn out_of_range_provider_fields_are_lunar_errors() {
        let d = date(2024, 2, 10);
        for (month, day) in [(0, 1), (13, 1), (1, 31)] {
            assert!(matches!(
                checked_components(d, 41, month, day, false),
                Err(Error::Lunar(_))
            ));
        }
        assert_eq!(
            checked_components(d, 41, 12, 30, true),
            Ok(LunarComponents::new(41, 12, 30, true))
        );
    }

    #[derive(Debug)]
    struct DayZero;

    impl LunarCalendar for DayZero {
        fn name(&self) -> &str {
            "day zero"
        }

        fn lunar_components(&self, _date: Date) -> Result<LunarComponents> {
            Ok(LunarComponents::new(2021, 2, 0, false))
        }
    }

    #[test]
    fn converter_is_a_passthrough() {
        let converter = LunarConverter::new(DayZero);
        assert_eq!(converter.provider().name(), "day zero");
        assert_eq!(
            converter.convert(date(2021, 3, 12)).unwrap(),
            LunarComponents::new(2021, 2, 0, false)
        );
    }
}
