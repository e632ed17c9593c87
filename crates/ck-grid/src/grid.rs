//! Month grid construction.
//!
//! A [`MonthGrid`] covers whole weeks: the target month plus the days of the
//! previous month that fill its first week and the days of the next month that
//! fill its last week.  Every day carries Gregorian fields, lunar fields, a
//! lunar label and a weekday name.

use ck_core::errors::Result;
use ck_core::Localize;
use ck_lunar::{
    ChineseLunar, LunarCalendar, LunarComponents, LunarConverter, LunarLabel, LunarLabelFormatter,
};
use ck_time::{CalendarSystem, Date, Gregorian, GregorianComponents};

use crate::config::CalendarConfig;
use crate::weekday_labeler::WeekdayLabeler;

/// Which month a grid entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayKind {
    /// Padding from the month before the target month.
    Previous,
    /// A day of the target month.
    Current,
    /// Padding from the month after the target month.
    Next,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Previous => write!(f, "previous"),
            DayKind::Current => write!(f, "current"),
            DayKind::Next => write!(f, "next"),
        }
    }
}

/// One day of a [`MonthGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayEntry {
    /// Month membership.
    pub kind: DayKind,
    /// The date.
    pub date: Date,
    /// Gregorian fields, week numbers relative to the configured first
    /// weekday.
    pub gregorian: GregorianComponents,
    /// Raw lunar fields.
    pub lunar: LunarComponents,
    /// Formatted lunar names.
    pub lunar_label: LunarLabel,
    /// Localized weekday name.
    pub weekday_name: String,
}

impl DayEntry {
    /// Return `true` if the entry belongs to the target month.
    pub fn is_current_month(&self) -> bool {
        self.kind == DayKind::Current
    }
}

/// Chronologically ordered days covering whole weeks around a month.
///
/// An empty grid means the month could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthGrid {
    entries: Vec<DayEntry>,
}

impl MonthGrid {
    /// All entries in order.
    pub fn entries(&self) -> &[DayEntry] {
        &self.entries
    }

    /// Number of entries (a multiple of 7).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the grid has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, DayEntry> {
        self.entries.iter()
    }

    /// The grid's rows, seven entries each.
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayEntry> {
        self.entries.chunks(7)
    }

    /// Leading padding from the previous month.
    pub fn leading(&self) -> &[DayEntry] {
        let n = self
            .entries
            .iter()
            .take_while(|e| e.kind == DayKind::Previous)
            .count();
        &self.entries[..n]
    }

    /// Days of the target month.
    pub fn current_month(&self) -> &[DayEntry] {
        let start = self.leading().len();
        let end = self.entries.len() - self.trailing().len();
        &self.entries[start..end]
    }

    /// Trailing padding from the next month.
    pub fn trailing(&self) -> &[DayEntry] {
        let n = self
            .entries
            .iter()
            .rev()
            .take_while(|e| e.kind == DayKind::Next)
            .count();
        &self.entries[self.entries.len() - n..]
    }

    /// Consume the grid, returning its entries.
    pub fn into_entries(self) -> Vec<DayEntry> {
        self.entries
    }
}

impl IntoIterator for MonthGrid {
    type Item = DayEntry;
    type IntoIter = std::vec::IntoIter<DayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type Item = &'a DayEntry;
    type IntoIter = std::slice::Iter<'a, DayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds [`MonthGrid`]s from a Gregorian calendar system, a lunar calendar
/// and a label formatter.
#[derive(Debug)]
pub struct MonthGridBuilder<C = Gregorian, L = ChineseLunar> {
    labeler: WeekdayLabeler<C>,
    lunar: LunarConverter<L>,
    formatter: LunarLabelFormatter,
}

impl MonthGridBuilder {
    /// Gregorian dates, Chinese lunar dates, English labels.
    pub fn new() -> Self {
        Self::with_locale(&ck_core::BuiltinLocale::English)
    }

    /// Gregorian dates, Chinese lunar dates, labels from `locale`.
    pub fn with_locale(locale: &dyn Localize) -> Self {
        Self::with_systems(
            Gregorian,
            ChineseLunar::new(),
            LunarLabelFormatter::new(locale),
        )
    }
}

impl Default for MonthGridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CalendarSystem, L: LunarCalendar> MonthGridBuilder<C, L> {
    /// Assemble a builder from explicit collaborators.
    pub fn with_systems(calendar: C, lunar: L, formatter: LunarLabelFormatter) -> Self {
        Self {
            labeler: WeekdayLabeler::new(calendar),
            lunar: LunarConverter::new(lunar),
            formatter,
        }
    }

    /// Build the grid of the month containing `anchor`.
    ///
    /// Returns an empty grid if the month cannot be resolved; see
    /// [`try_build`](Self::try_build) for the error.
    pub fn build(&self, anchor: Date, config: &CalendarConfig) -> MonthGrid {
        match self.try_build(anchor, config) {
            Ok(grid) => grid,
            Err(e) => {
                log::warn!("no month grid for {anchor:?}: {e}");
                MonthGrid::default()
            }
        }
    }

    /// Build the grid of the month containing `anchor`, reporting why the
    /// month could not be resolved.
    pub fn try_build(&self, anchor: Date, config: &CalendarConfig) -> Result<MonthGrid> {
        let calendar = self.labeler.calendar();
        let range = calendar.month_range(anchor)?;
        let first = config.first_weekday();
        let start_ordinal = calendar.ordinal_in_week(range.start, first);
        let end_ordinal = calendar.ordinal_in_week(range.end, first);

        // The month's first day opens a week: no leading padding.
        let leading = if start_ordinal >= 2 {
            i32::from(start_ordinal) - 1
        } else {
            0
        };
        // The next month's first day opens a week: no trailing padding.
        let trailing = if end_ordinal > 1 {
            7 + 1 - i32::from(end_ordinal)
        } else {
            0
        };
        let days = i32::from(calendar.days_in_month(range.start));

        let mut entries = Vec::with_capacity((leading + days + trailing) as usize);
        for offset in (1..=leading).rev() {
            let date = calendar.add_days(range.start, -offset)?;
            entries.push(self.entry(DayKind::Previous, date, config)?);
        }
        for offset in 0..days {
            let date = calendar.add_days(range.start, offset)?;
            entries.push(self.entry(DayKind::Current, date, config)?);
        }
        for offset in 0..trailing {
            let date = calendar.add_days(range.end, offset)?;
            entries.push(self.entry(DayKind::Next, date, config)?);
        }

        log::debug!(
            "month grid for {:?}: {leading} previous, {days} current, {trailing} next",
            range.start
        );
        Ok(MonthGrid { entries })
    }

    fn entry(&self, kind: DayKind, date: Date, config: &CalendarConfig) -> Result<DayEntry> {
        let gregorian = self
            .labeler
            .calendar()
            .components(date, config.first_weekday())?;
        let lunar = self.lunar.convert(date)?;
        let lunar_label = self.formatter.format(&lunar);
        let weekday_name = self.labeler.label(date, config);
        Ok(DayEntry {
            kind,
            date,
            gregorian,
            lunar,
            lunar_label,
            weekday_name,
        })
    }
}

/// Build the grid of the month containing `anchor` with the Gregorian and
/// Chinese lunar calendars and English lunar labels.
pub fn build_month_grid(anchor: Date, config: &CalendarConfig) -> MonthGrid {
    MonthGridBuilder::new().build(anchor, config)
}
