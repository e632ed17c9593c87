//! # ck-time
//!
//! Gregorian dates, weekdays, and the pluggable calendar system used for
//! month-boundary arithmetic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarSystem` trait and the Gregorian implementation.
pub mod calendar;

/// `GregorianComponents` — per-day calendar fields.
pub mod components;

/// `Date` type.
pub mod date;

/// `TimeUnit` — days, weeks, months, years.
pub mod time_unit;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{CalendarSystem, DateRange, Gregorian};
pub use components::GregorianComponents;
pub use date::Date;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
