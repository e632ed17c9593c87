//! # ck-core
//!
//! Core types shared across the calendarkit workspace: the error hierarchy,
//! the string-localization collaborator, and bounds-checked label tables.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// `Localize` trait, built-in locales and lookup keys.
pub mod locale;

/// `TextTable` — ordered, bounds-checked label table.
pub mod text_table;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use locale::{BuiltinLocale, Localize};
pub use text_table::TextTable;
