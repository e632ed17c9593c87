//! `GregorianComponents` — a date broken into calendar fields.

use crate::weekday::Weekday;

/// The Gregorian fields of a single day.
///
/// Week numbers depend on the first weekday the components were computed
/// with, see [`CalendarSystem::components`](crate::CalendarSystem::components).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GregorianComponents {
    /// Year (1–9999).
    pub year: u16,
    /// Month (1–12).
    pub month: u8,
    /// Day of the month (1–31).
    pub day: u8,
    /// Day of the week.
    pub weekday: Weekday,
    /// Occurrence of this weekday within the month (the 2nd Tuesday → 2).
    pub weekday_ordinal: u8,
    /// 1-based week of the month.
    pub week_of_month: u8,
    /// 1-based week of the year; week 1 contains January 1.
    pub week_of_year: u8,
}
