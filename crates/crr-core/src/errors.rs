//! Error types for crrlib.
//!
//! Every failure in this library is a construction-time failure: a violated
//! constructor precondition, a malformed triangular shape, or a requested
//! combination the engine does not support.  Computations themselves are
//! pure and deterministic, so there is no retry or partial-result recovery —
//! a failed build produces no lattice at all.

use crate::Size;
use thiserror::Error;

/// The top-level error type used throughout crrlib.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A constructor precondition was violated.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Supplied lattice values do not match the triangular shape.
    #[error("shape mismatch: level {level} has {actual} values, expected {expected}")]
    ShapeMismatch {
        /// The offending level.
        level: Size,
        /// The width required by the triangular shape (`level + 1`).
        expected: Size,
        /// The width actually supplied.
        actual: Size,
    },

    /// A requested combination is not supported by the engine.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

/// Shorthand `Result` type used throughout crrlib.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Checks a constructor precondition.
///
/// Returns `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use crr_core::ensure;
/// fn positive(x: f64) -> crr_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}
