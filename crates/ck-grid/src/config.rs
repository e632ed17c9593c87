//! `CalendarConfig` — first weekday and the weekday-name table rotated to it.
//!
//! The configuration is an ordinary caller-owned value.  Mutation takes
//! `&mut self`; callers that share one across threads wrap it in their own
//! lock.

use ck_core::errors::{Error, Result};
use ck_core::locale::{load_table, Localize, WEEKDAY};
use ck_core::{BuiltinLocale, TextTable};
use ck_time::Weekday;

/// First-weekday setting plus the localized weekday names in display order.
///
/// `weekday_names()[0]` is always the name of `first_weekday()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarConfig {
    first_weekday: Weekday,
    /// Sunday-first names, the source of every rotation.
    base_names: TextTable,
    weekday_names: TextTable,
}

impl CalendarConfig {
    /// Load the weekday names from `locale` with Sunday as the first
    /// weekday.
    pub fn new(locale: &dyn Localize) -> Self {
        Self::with_base_names(load_table(locale, WEEKDAY, 7))
    }

    /// Use caller-supplied Sunday-first weekday names.
    ///
    /// A table that does not hold exactly seven names is accepted; weekday
    /// labels then degrade to numeric ordinals.
    pub fn with_base_names(names: impl Into<TextTable>) -> Self {
        let base_names = names.into();
        Self {
            first_weekday: Weekday::Sunday,
            weekday_names: base_names.clone(),
            base_names,
        }
    }

    /// Builder form of [`set_first_weekday`](Self::set_first_weekday).
    pub fn with_first_weekday(mut self, first: Weekday) -> Self {
        self.apply_first_weekday(first);
        self
    }

    /// Set the first weekday from its ordinal (1 = Sunday … 7 = Saturday)
    /// and rebuild the rotated name table.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `day` is outside `1..=7`; the
    /// configuration is left unchanged.
    pub fn set_first_weekday(&mut self, day: u8) -> Result<()> {
        let first = Weekday::from_ordinal(day).ok_or_else(|| {
            Error::InvalidArgument(format!("first weekday {day} not in [1, 7]"))
        })?;
        self.apply_first_weekday(first);
        Ok(())
    }

    fn apply_first_weekday(&mut self, first: Weekday) {
        let rotated = self
            .base_names
            .rotated_left(usize::from(first.ordinal() - 1));
        self.weekday_names = rotated;
        self.first_weekday = first;
    }

    /// The configured first weekday.
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Weekday names in display order, starting at the first weekday.
    pub fn weekday_names(&self) -> &[String] {
        self.weekday_names.as_slice()
    }

    /// Weekday names starting at Sunday.
    pub fn base_weekday_names(&self) -> &[String] {
        self.base_names.as_slice()
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new(&BuiltinLocale::English)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sunday() {
        let config = CalendarConfig::default();
        assert_eq!(config.first_weekday(), Weekday::Sunday);
        assert_eq!(
            config.weekday_names(),
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
    }

    #[test]
    fn monday_first_rotation() {
        let mut config = CalendarConfig::default();
        config.set_first_weekday(2).unwrap();
        assert_eq!(config.first_weekday(), Weekday::Monday);
        assert_eq!(
            config.weekday_names(),
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
        // Rotations always start from the base table.
        config.set_first_weekday(7).unwrap();
        assert_eq!(config.weekday_names()[0], "Sat");
        assert_eq!(config.weekday_names()[1], "Sun");
        config.set_first_weekday(1).unwrap();
        assert_eq!(config.weekday_names(), config.base_weekday_names());
    }

    #[test]
    fn invalid_first_weekday_leaves_config_unchanged() {
        let mut config = CalendarConfig::default().with_first_weekday(Weekday::Wednesday);
        let before = config.clone();
        for day in [0u8, 8, 255] {
            let err = config.set_first_weekday(day).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
        }
        assert_eq!(config, before);
    }

    #[test]
    fn localized_names() {
        let config = CalendarConfig::new(&BuiltinLocale::SimplifiedChinese)
            .with_first_weekday(Weekday::Monday);
        assert_eq!(config.weekday_names()[0], "周一");
        assert_eq!(config.weekday_names()[6], "周日");
    }
}
