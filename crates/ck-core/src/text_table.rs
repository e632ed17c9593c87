//! `TextTable` — an ordered, bounds-checked table of localized labels.

use crate::errors::{Error, Result};

/// An ordered table of display strings (weekday names, stems, branches, …).
///
/// Lookups never panic: [`try_get`](Self::try_get) reports an
/// [`Error::IndexOutOfRange`], and [`get_or_first`](Self::get_or_first)
/// recovers with the table's first entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextTable {
    entries: Vec<String>,
}

impl TextTable {
    /// Build a table from owned entries.
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the entries as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Return the entry at the 0-based `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<&str> {
        self.entries
            .get(index)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfRange {
                index,
                size: self.entries.len(),
            })
    }

    /// Return the entry at the 0-based `index`, or the first entry if the
    /// index is out of range.  An empty table yields `""`.
    pub fn get_or_first(&self, index: usize) -> &str {
        match self.try_get(index) {
            Ok(s) => s,
            Err(e) => {
                log::trace!("label lookup fell back to first entry: {e}");
                self.entries.first().map(String::as_str).unwrap_or("")
            }
        }
    }

    /// Return the last entry, or `""` for an empty table.
    pub fn last(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("")
    }

    /// Return a copy rotated left by `n` positions (modulo the length), so
    /// that the entry at `n` becomes the entry at 0.
    pub fn rotated_left(&self, n: usize) -> Self {
        let mut entries = self.entries.clone();
        if !entries.is_empty() {
            let shift = n % entries.len();
            entries.rotate_left(shift);
        }
        Self { entries }
    }
}

impl From<Vec<String>> for TextTable {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

impl<'a> From<&[&'a str]> for TextTable {
    fn from(entries: &[&'a str]) -> Self {
        Self::new(entries.iter().map(|s| s.to_string()).collect())
    }
}
