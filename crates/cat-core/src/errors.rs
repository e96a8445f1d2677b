//! Error types for the catastrophe-risk crates.
//!
//! A single `thiserror`-derived enum covers every failure the simulators can
//! report. Construction-time parameter checks go through [`ensure!`],
//! degenerate random draws through [`ensure_numeric!`].
//!
//! Exhaustion of a historical simulation is *not* an error; it is signalled
//! by `Ok(false)` from `next_path`.

use thiserror::Error;

/// The top-level error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A parameter constraint was violated at construction or call time.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A random draw produced a degenerate value.
    #[error("numeric error: {0}")]
    Numeric(String),

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cat_core::{ensure, errors::Error};
/// fn positive(x: f64) -> cat_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidInput(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Numeric(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cat_core::{ensure_numeric, errors::Error};
/// fn ratio(x: f64, y: f64) -> cat_core::errors::Result<f64> {
///     ensure_numeric!(x + y != 0.0, "degenerate sum {x} + {y}");
///     Ok(x / (x + y))
/// }
/// assert!(ratio(1.0, 1.0).is_ok());
/// assert!(matches!(ratio(0.0, 0.0), Err(Error::Numeric(_))));
/// ```
#[macro_export]
macro_rules! ensure_numeric {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Numeric(
                format!($($msg)*)
            ));
        }
    };
}
