//! Error types for singleton-rs.
//!
//! A single `thiserror`-derived enum covers every failure a holder or one of
//! the demo value types can report.  The [`ensure!`] and [`fail!`] macros are
//! shorthands for early returns with that enum.

use thiserror::Error;

/// The top-level error type used throughout singleton-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The initializer of a fallible holder returned an error.
    #[error("singleton construction failed: {0}")]
    Construction(String),

    /// An earlier construction attempt failed and the holder refuses to retry.
    #[error("singleton holder poisoned by an earlier failed construction")]
    Poisoned,

    /// Writing to an output sink failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Invalid argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Shorthand `Result` type used throughout singleton-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sg_core::{ensure, errors::Error};
/// fn positive(x: i64) -> sg_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::InvalidArgument("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Construction(...))` immediately.
///
/// Intended for initializers that detect they cannot build their value.
///
/// # Example
/// ```
/// use sg_core::{fail, errors::Error};
/// fn always_err() -> sg_core::errors::Result<()> {
///     fail!("backing store unavailable");
/// }
/// assert!(matches!(always_err(), Err(Error::Construction(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Construction(format!($($msg)*)))
    };
}
