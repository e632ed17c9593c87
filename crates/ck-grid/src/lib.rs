//! # ck-grid
//!
//! Month grids for calendar widgets: the caller-owned [`CalendarConfig`],
//! weekday labels, and [`MonthGridBuilder`], which pads a month to whole
//! weeks and annotates every day with Gregorian and lunar information.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarConfig` — first weekday and rotated weekday names.
pub mod config;

/// `MonthGrid`, `DayEntry` and `MonthGridBuilder`.
pub mod grid;

/// `WeekdayLabeler` and `weekday_name`.
pub mod weekday_labeler;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use config::CalendarConfig;
pub use grid::{build_month_grid, DayEntry, DayKind, MonthGrid, MonthGridBuilder};
pub use weekday_labeler::{weekday_name, WeekdayLabeler};
