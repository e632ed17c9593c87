//! Error types for calendarkit.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The [`ensure!`] macro
//! covers the common "check and bail" pattern.
//!
//! [`ensure!`]: crate::ensure

use thiserror::Error;

/// The top-level error type used throughout calendarkit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// The calendar system cannot compute month or week boundaries for a
    /// date.
    #[error("calendar resolution failure: {0}")]
    CalendarResolution(String),

    /// Invalid date construction or date arithmetic out of range.
    #[error("date error: {0}")]
    Date(String),

    /// The lunar calendar provider rejected a date.
    #[error("lunar conversion error: {0}")]
    Lunar(String),

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout calendarkit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ck_core::{ensure, errors::Error};
/// fn positive(x: i32) -> ck_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
