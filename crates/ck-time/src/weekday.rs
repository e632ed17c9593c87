//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 1–7 with Sunday = 1, the canonical base used by the
/// first-weekday setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (1).
    Sunday = 1,
    /// Monday (2).
    Monday = 2,
    /// Tuesday (3).
    Tuesday = 3,
    /// Wednesday (4).
    Wednesday = 4,
    /// Thursday (5).
    Thursday = 5,
    /// Friday (6).
    Friday = 6,
    /// Saturday (7).
    Saturday = 7,
}

impl Weekday {
    /// Construct from the ordinal (1 = Sunday … 7 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Sunday),
            2 => Some(Weekday::Monday),
            3 => Some(Weekday::Tuesday),
            4 => Some(Weekday::Wednesday),
            5 => Some(Weekday::Thursday),
            6 => Some(Weekday::Friday),
            7 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Return the ordinal (1 = Sunday … 7 = Saturday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the 1-based position of `self` in a week that starts on
    /// `first`.
    ///
    /// ```
    /// use ck_time::Weekday;
    /// assert_eq!(Weekday::Monday.position_in_week(Weekday::Monday), 1);
    /// assert_eq!(Weekday::Sunday.position_in_week(Weekday::Monday), 7);
    /// ```
    pub fn position_in_week(&self, first: Weekday) -> u8 {
        (self.ordinal() + 7 - first.ordinal()) % 7 + 1
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        write!(f, "{name}")
    }
}

impl From<Weekday> for u8 {
    fn from(w: Weekday) -> u8 {
        w as u8
    }
}
