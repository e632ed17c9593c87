//! `Date` type.
//!
//! Dates are proleptic Gregorian calendar days stored as a serial number of
//! days.
//!
//! # Serial number convention
//! * Serial 0 is used as the "null date" sentinel.
//! * Serial 1 = January 1, 0001 (a Monday).
//! * The valid date range is 0001-01-01 to 9999-12-31.

use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use ck_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// The null date sentinel (serial 0).
    pub const NULL: Date = Date(0);

    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial <= 0` (the null sentinel or before the
    /// epoch) or past [`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::Date("serial number must be positive".into()));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} exceeds maximum date")));
        }
        Ok(d)
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
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

    /// Return `true` if this is the null date sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = self.ymd();
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 (0001-01-01) is a Monday, ordinal 2
        let w = (self.0.rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Sunday)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {self:?} + {n} overflows")))?;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Advance by `n` units.
    ///
    /// Month and year steps keep the day of the month, clamped to the length
    /// of the target month: January 31 plus one month is the last day of
    /// February.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => {
                let days = n
                    .checked_mul(7)
                    .ok_or_else(|| Error::Date(format!("{n} weeks overflows")))?;
                self.add_days(days)
            }
            TimeUnit::Months => {
                let (y, m, d) = self.ymd();
                let total = (y as i64) * 12 + (m as i64 - 1) + n as i64;
                let new_y = total.div_euclid(12);
                let new_m = (total.rem_euclid(12) + 1) as u8;
                if !(1..=9999).contains(&new_y) {
                    return Err(Error::Date(format!("year {new_y} out of range")));
                }
                let new_y = new_y as u16;
                let new_d = d.min(days_in_month(new_y, new_m));
                Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
            }
            TimeUnit::Years => {
                let months = n
                    .checked_mul(12)
                    .ok_or_else(|| Error::Date(format!("{n} years overflows")))?;
                self.advance(months, TimeUnit::Months)
            }
        }
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Today's date in the local time zone.
    #[cfg(feature = "chrono")]
    pub fn today() -> Result<Self> {
        Self::try_from(chrono::Local::now().date_naive())
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range [1, 9999]", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(d: Date) -> Result<Self> {
        if d.is_null() {
            return Err(Error::Date("null date has no chrono equivalent".into()));
        }
        let (y, m, day) = d.ymd();
        chrono::NaiveDate::from_ymd_opt(i32::from(y), u32::from(m), u32::from(day))
            .ok_or_else(|| Error::Date(format!("{d:?} not representable by chrono")))
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        let (y, m, d) = self.ymd();
        let mon = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ][m as usize - 1];
        write!(f, "{d} {mon} {y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "Date(null)");
        }
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// 0000-03-01, day zero of the March-based day count, has serial
/// `-EPOCH_SHIFT`.
const EPOCH_SHIFT: i32 = 305;

/// Convert (year, month, day) to a serial number.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    // Years start in March so the leap day is the last day of the year.
    let y = year as i32 - i32::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month as i32 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - EPOCH_SHIFT
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = serial + EPOCH_SHIFT;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y as u16, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1, 1, 1).unwrap();
        assert_eq!(d, Date::MIN);
        assert_eq!(d.weekday(), Weekday::Monday);
        assert_eq!(Date::from_ymd(9999, 12, 31).unwrap(), Date::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1, 1, 1),
            (1582, 10, 15),
            (1900, 2, 28),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2024, 2, 29),
            (2024, 12, 31),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid() {
        assert!(Date::from_ymd(0, 1, 1).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_serial(0).is_err());
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
    }

    #[test]
    fn test_weekday() {
        // 2024-02-01 is a Thursday
        let d = Date::from_ymd(2024, 2, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Thursday);
        // 1970-01-01 was a Thursday
        let d = Date::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Thursday);
        // 2024-03-02 is a Saturday
        let d = Date::from_ymd(2024, 3, 2).unwrap();
        assert_eq!(d.weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(Date::from_ymd(2024, 3, 1).unwrap().day_of_year(), 61);
        assert_eq!(Date::from_ymd(2023, 12, 31).unwrap().day_of_year(), 365);
    }

    #[test]
    fn test_advance_months() {
        let d = Date::from_ymd(2023, 1, 31).unwrap();
        // Jan 31 + 1 month = Feb 28 (clamp to end of month)
        let next = d.advance(1, TimeUnit::Months).unwrap();
        assert_eq!(next.ymd(), (2023, 2, 28));
        let leap = Date::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(leap.advance(1, TimeUnit::Months).unwrap().ymd(), (2024, 2, 29));
        // Backwards across a year boundary
        let back = Date::from_ymd(2024, 3, 31).unwrap();
        assert_eq!(back.advance(-4, TimeUnit::Months).unwrap().ymd(), (2023, 11, 30));
        assert_eq!(d.advance(2, TimeUnit::Years).unwrap().ymd(), (2025, 1, 31));
    }

    #[test]
    fn test_advance_out_of_range() {
        assert!(Date::MAX.advance(1, TimeUnit::Days).is_err());
        assert!(Date::MAX.advance(1, TimeUnit::Months).is_err());
        assert!(Date::MIN.advance(-1, TimeUnit::Weeks).is_err());
        assert!(Date::MIN.add_days(i32::MAX).is_err());
    }

    #[test]
    fn test_month_bounds() {
        let d = Date::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.start_of_month().ymd(), (2024, 2, 1));
        assert_eq!(d.end_of_month().day_of_month(), 29); // 2024 is a leap year
        assert_eq!(d.end_of_month() - d.start_of_month(), 28);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_conversions() {
        let naive = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let d = Date::try_from(naive).unwrap();
        assert_eq!(d.ymd(), (2024, 2, 29));
        assert_eq!(chrono::NaiveDate::try_from(d).unwrap(), naive);
        assert_eq!(
            chrono::NaiveDate::try_from(Date::MAX).unwrap(),
            chrono::NaiveDate::from_ymd_opt(9999, 12, 31).unwrap()
        );
        assert!(matches!(
            chrono::NaiveDate::try_from(Date::NULL),
            Err(Error::Date(_))
        ));
        let before_min = chrono::NaiveDate::from_ymd_opt(0, 12, 31).unwrap();
        assert!(Date::try_from(before_min).is_err());
        let after_max = chrono::NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        assert!(Date::try_from(after_max).is_err());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_today_is_in_range() {
        let today = Date::today().unwrap();
        assert!(!today.is_null());
        assert!((Date::MIN..=Date::MAX).contains(&today));
    }

    #[test]
    fn test_display() {
        let d = Date::from_ymd(2024, 2, 1).unwrap();
        assert_eq!(d.to_string(), "1 February 2024");
        assert_eq!(format!("{d:?}"), "Date(2024-02-01)");
        assert_eq!(Date::NULL.to_string(), "null date");
    }
}
