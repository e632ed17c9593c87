//! Localized weekday labels.

use ck_time::{CalendarSystem, Date, Gregorian};

use crate::config::CalendarConfig;

/// Maps dates to the weekday names of a [`CalendarConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekdayLabeler<C = Gregorian> {
    calendar: C,
}

impl<C: CalendarSystem> WeekdayLabeler<C> {
    /// Label weekdays as computed by `calendar`.
    pub fn new(calendar: C) -> Self {
        Self { calendar }
    }

    /// The calendar system weekdays are computed with.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Name of the weekday of `date`.
    ///
    /// Falls back to the 1-based ordinal in the week (as a string) when the
    /// name table does not hold exactly seven entries.
    pub fn label(&self, date: Date, config: &CalendarConfig) -> String {
        let ordinal = self.calendar.ordinal_in_week(date, config.first_weekday());
        name_for_ordinal(config, ordinal)
    }
}

/// Name of the weekday at 1-based position `ordinal` of the configured week.
fn name_for_ordinal(config: &CalendarConfig, ordinal: u8) -> String {
    let names = config.weekday_names();
    let name = usize::from(ordinal)
        .checked_sub(1)
        .and_then(|i| names.get(i));
    match name {
        Some(name) if names.len() == 7 => name.clone(),
        _ => ordinal.to_string(),
    }
}

/// Name of the weekday of `date` under `config`, using the Gregorian
/// calendar.
pub fn weekday_name(date: Date, config: &CalendarConfig) -> String {
    WeekdayLabeler::new(Gregorian).label(date, config)
}
