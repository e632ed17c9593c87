//! `LunarComponents` — raw lunar calendar fields of a day.

/// The lunar calendar fields reported by a [`LunarCalendar`] provider.
///
/// [`LunarCalendar`]: crate::LunarCalendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarComponents {
    /// Lunar year.  [`ChineseLunar`](crate::ChineseLunar) reports the 1-based
    /// year of the 60-year cycle (1 = Jia-Zi).
    pub year: i32,
    /// Lunar month (1–12).
    pub month: u8,
    /// Lunar day (0–30).  0 stands for the last day of the previous lunar
    /// month; see [`LunarLabelFormatter`](crate::LunarLabelFormatter).
    pub day: u8,
    /// `true` if `month` is an intercalary (leap) month.
    pub is_leap_month: bool,
}

impl LunarComponents {
    /// Create lunar components.
    pub const fn new(year: i32, month: u8, day: u8, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }
}
