//! # calendarkit
//!
//! Month calendar grids annotated with Gregorian and traditional lunar
//! calendar information.  This is the computational core behind a calendar
//! widget: it produces data, callers render it.
//!
//! This crate is a **façade** that re-exports the workspace crates and the
//! four entry points.
//!
//! ## Quick start
//!
//! ```rust
//! use calendarkit::{build_month_grid, CalendarConfig, Date};
//!
//! let mut config = CalendarConfig::default();
//! config.set_first_weekday(2).unwrap(); // Monday
//!
//! let grid = build_month_grid(Date::from_ymd(2024, 2, 1).unwrap(), &config);
//! assert_eq!(grid.len() % 7, 0);
//! assert_eq!(grid.entries()[0].weekday_name, "Mon");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, localization and label tables.
pub use ck_core as core;

/// Dates, weekdays and the calendar-system trait.
pub use ck_time as time;

/// Lunar conversion and labels.
pub use ck_lunar as lunar;

/// Month grids and calendar configuration.
pub use ck_grid as grid;

// ── Entry points ──────────────────────────────────────────────────────────────

pub use ck_core::{BuiltinLocale, Error, Localize, Result};
pub use ck_grid::{
    build_month_grid, weekday_name, CalendarConfig, DayEntry, DayKind, MonthGrid,
    MonthGridBuilder,
};
pub use ck_lunar::{lunar_label, LunarComponents, LunarLabel, LunarLabelFormatter};
pub use ck_time::{Date, Weekday};
