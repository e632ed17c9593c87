//! Human-readable lunar labels.
//!
//! # Day zero
//! Some lunar providers report day 0 for the last day of a lunar month.  The
//! formatter renders such a day as the final entry of the day table (day 30)
//! of the *previous* month, whether or not that month really has 30 days.

use ck_core::locale::{
    load_table, localized, Localize, LUNAR_BRANCH, LUNAR_DAY, LUNAR_LEAP_PREFIX, LUNAR_MONTH,
    LUNAR_MONTH_SUFFIX, LUNAR_STEM, LUNAR_YEAR_SUFFIX,
};
use ck_core::{BuiltinLocale, TextTable};
use std::sync::OnceLock;

use crate::components::LunarComponents;

const STEMS: usize = 10;
const BRANCHES: usize = 12;
const MONTHS: usize = 12;
const DAYS: usize = 30;

/// Stem-branch year name, month name and day name of a lunar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarLabel {
    /// Stem + branch + year suffix (e.g. `"甲辰年"`).
    pub year_name: String,
    /// Optional leap prefix + month name + month suffix (e.g. `"闰二月"`).
    pub month_name: String,
    /// Ordinal day name (e.g. `"初一"`).
    pub day_name: String,
}

/// Formats [`LunarComponents`] into a [`LunarLabel`] using localized tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarLabelFormatter {
    stems: TextTable,
    branches: TextTable,
    months: TextTable,
    days: TextTable,
    year_suffix: String,
    month_suffix: String,
    leap_prefix: String,
}

impl LunarLabelFormatter {
    /// Load the label tables from `locale`; keys it does not answer fall back
    /// to English.
    pub fn new(locale: &dyn Localize) -> Self {
        Self {
            stems: load_table(locale, LUNAR_STEM, STEMS),
            branches: load_table(locale, LUNAR_BRANCH, BRANCHES),
            months: load_table(locale, LUNAR_MONTH, MONTHS),
            days: load_table(locale, LUNAR_DAY, DAYS),
            year_suffix: localized(locale, LUNAR_YEAR_SUFFIX),
            month_suffix: localized(locale, LUNAR_MONTH_SUFFIX),
            leap_prefix: localized(locale, LUNAR_LEAP_PREFIX),
        }
    }

    /// Format `components`.
    pub fn format(&self, components: &LunarComponents) -> LunarLabel {
        let (month, day_name) = if components.day == 0 {
            let previous = if components.month <= 1 {
                MONTHS as u8
            } else {
                components.month - 1
            };
            (previous, self.days.last())
        } else {
            (components.month, self.days.get_or_first(ordinal_index(components.day)))
        };

        LunarLabel {
            year_name: self.year_name(components.year),
            month_name: self.month_name(month, components.is_leap_month),
            day_name: day_name.to_string(),
        }
    }

    /// Stem + branch + year suffix for `year`.  The name repeats every 60
    /// years.
    pub fn year_name(&self, year: i32) -> String {
        format!(
            "{}{}{}",
            self.stems.get_or_first(cyclic_index(year, STEMS)),
            self.branches.get_or_first(cyclic_index(year, BRANCHES)),
            self.year_suffix
        )
    }

    /// Month name of the 1-based `month`, with the leap prefix if
    /// `is_leap_month`.
    pub fn month_name(&self, month: u8, is_leap_month: bool) -> String {
        let prefix = if is_leap_month { self.leap_prefix.as_str() } else { "" };
        format!(
            "{prefix}{}{}",
            self.months.get_or_first(ordinal_index(month)),
            self.month_suffix
        )
    }

    /// Day name of the 1-based `day`.
    pub fn day_name(&self, day: u8) -> &str {
        self.days.get_or_first(ordinal_index(day))
    }
}

impl Default for LunarLabelFormatter {
    fn default() -> Self {
        Self::new(&BuiltinLocale::English)
    }
}

/// Format `components` with the built-in English tables.
pub fn lunar_label(components: &LunarComponents) -> LunarLabel {
    static ENGLISH: OnceLock<LunarLabelFormatter> = OnceLock::new();
    ENGLISH
        .get_or_init(LunarLabelFormatter::default)
        .format(components)
}

/// 0-based table index of `value mod len`, where a remainder of 0 selects the
/// last entry.
fn cyclic_index(value: i32, len: usize) -> usize {
    let r = value.rem_euclid(len as i32) as usize;
    (r + len - 1) % len
}

/// 0-based index of a 1-based ordinal; 0 maps past the end of any table.
fn ordinal_index(n: u8) -> usize {
    usize::from(n).checked_sub(1).unwrap_or(usize::MAX)
}
