//! # ck-lunar
//!
//! Gregorian → lunar calendar conversion and the stem-branch / month / day
//! labels shown under each day of a month grid.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `LunarComponents` — raw lunar fields of a day.
pub mod components;

/// `LunarCalendar` trait, the Chinese provider and `LunarConverter`.
pub mod converter;

/// `LunarLabel` and `LunarLabelFormatter`.
pub mod label;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use components::LunarComponents;
pub use converter::{ChineseLunar, LunarCalendar, LunarConverter};
pub use label::{lunar_label, LunarLabel, LunarLabelFormatter};
