//! `CalendarSystem` trait and the proleptic Gregorian implementation.
//!
//! A calendar system resolves month boundaries, offsets dates by calendar
//! units and breaks a date into its components.  Everything month-grid
//! construction needs from "a calendar" goes through this trait, so a caller
//! can plug in a different system.

use crate::components::GregorianComponents;
use crate::date::Date;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use ck_core::errors::{Error, Result};

/// A half-open range of dates `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    /// First date in the range.
    pub start: Date,
    /// First date after the range.
    pub end: Date,
}

impl DateRange {
    /// Number of days in the range.
    pub fn days(&self) -> i32 {
        self.end - self.start
    }

    /// Return `true` if `date` lies in `[start, end)`.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }
}

/// A calendar system used for date arithmetic.
pub trait CalendarSystem: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Gregorian"`).
    fn name(&self) -> &str;

    /// Return the month containing `date` as `[first day, first day of the
    /// following month)`.
    ///
    /// # Errors
    /// [`Error::CalendarResolution`] if either boundary cannot be
    /// represented.
    fn month_range(&self, date: Date) -> Result<DateRange>;

    /// Offset `date` by `n` calendar units.
    fn advance(&self, date: Date, n: i32, unit: TimeUnit) -> Result<Date>;

    /// Return the weekday of `date`.
    fn weekday(&self, date: Date) -> Weekday {
        date.weekday()
    }

    /// Number of days in the month containing `date`, or 0 if the month
    /// boundaries cannot be resolved.
    fn days_in_month(&self, date: Date) -> u8 {
        self.month_range(date)
            .map(|r| r.days() as u8)
            .unwrap_or(0)
    }

    /// Advance by `n` days.
    fn add_days(&self, date: Date, n: i32) -> Result<Date> {
        self.advance(date, n, TimeUnit::Days)
    }

    /// Advance by `n` weeks (`7n` days).
    fn add_weeks(&self, date: Date, n: i32) -> Result<Date> {
        self.advance(date, n, TimeUnit::Weeks)
    }

    /// Advance by `n` months, clamping to the target month's length.
    fn add_months(&self, date: Date, n: i32) -> Result<Date> {
        self.advance(date, n, TimeUnit::Months)
    }

    /// 1-based position of `date` within its week when weeks start on
    /// `first_weekday`.
    fn ordinal_in_week(&self, date: Date, first_weekday: Weekday) -> u8 {
        self.weekday(date).position_in_week(first_weekday)
    }

    /// Break `date` into its Gregorian components, numbering weeks from
    /// `first_weekday`.
    ///
    /// Only needs the start of `date`'s month, so dates in the last
    /// representable month still break down.
    fn components(&self, date: Date, first_weekday: Weekday) -> Result<GregorianComponents> {
        if date.is_null() {
            return Err(Error::CalendarResolution("null date has no components".into()));
        }
        let (year, month, day) = date.ymd();
        let weekday = self.weekday(date);
        let ordinal = self.ordinal_in_week(date, first_weekday);

        let lead = self.ordinal_in_week(date.start_of_month(), first_weekday) - 1;
        let week_of_month = (day + lead - 1) / 7 + 1;

        // Week 1 of a year is the week containing January 1, so the days of
        // a week reaching into the next year belong to its week 1.
        let doy = date.day_of_year();
        let days_in_year: u16 = if crate::date::is_leap_year(year) { 366 } else { 365 };
        let jan1 = self.add_days(date, 1 - i32::from(doy))?;
        let jan1_lead = u16::from(self.ordinal_in_week(jan1, first_weekday)) - 1;
        let week_of_year = if u16::from(7 - ordinal) > days_in_year - doy {
            1
        } else {
            ((doy + jan1_lead - 1) / 7 + 1) as u8
        };

        Ok(GregorianComponents {
            year,
            month,
            day,
            weekday,
            weekday_ordinal: (day - 1) / 7 + 1,
            week_of_month,
            week_of_year,
        })
    }
}

/// The proleptic Gregorian calendar over [`Date::MIN`] … [`Date::MAX`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Gregorian;

impl CalendarSystem for Gregorian {
    fn name(&self) -> &str {
        "Gregorian"
    }

    fn month_range(&self, date: Date) -> Result<DateRange> {
        if date.is_null() {
            return Err(Error::CalendarResolution("null date has no month".into()));
        }
        let start = date.start_of_month();
        let end = date.end_of_month().add_days(1).map_err(|_| {
            Error::CalendarResolution(format!("month of {date:?} has no representable end"))
        })?;
        Ok(DateRange { start, end })
    }

    fn advance(&self, date: Date, n: i32, unit: TimeUnit) -> Result<Date> {
        date.advance(n, unit)
    }
}
