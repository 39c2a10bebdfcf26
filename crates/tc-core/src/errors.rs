//! Error types for timecard-rs.
//!
//! A single `thiserror`-derived enum covers the whole workspace; the
//! `ensure!` and `fail!` macros are the shorthand used to reject bad
//! inputs at function boundaries.

use thiserror::Error;

/// The top-level error type used throughout timecard-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (invalid component, out-of-range arithmetic).
    #[error("date error: {0}")]
    Date(String),

    /// A textual value could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout timecard-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tc_core::ensure;
/// fn checked_year(year: u16) -> tc_core::Result<u16> {
///     ensure!(year >= 1900, "year {year} before supported range");
///     Ok(year)
/// }
/// assert!(checked_year(2024).is_ok());
/// assert!(checked_year(1889).is_err());
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

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use tc_core::fail;
/// fn unsupported() -> tc_core::Result<()> {
///     fail!("not available");
/// }
/// assert!(unsupported().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
