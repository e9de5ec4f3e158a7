//! Error types for bsfd.
//!
//! Every failure of a pricing call is one of two kinds: the inputs were
//! rejected before any grid was built, or a numerical step (operator
//! inversion, post-induction sanity checks) could not be trusted. The
//! `ensure!`, `ensure_post!`, and `fail!` macros map onto those kinds.

use thiserror::Error;

/// The top-level error type used throughout bsfd.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An input parameter is out of its domain (non-positive step count,
    /// strike, maturity or volatility, non-finite number, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A numerical operation failed: singular or ill-conditioned operator,
    /// or a non-finite value in the value grid.
    #[error("numerical error: {0}")]
    Numerical(String),
}

impl Error {
    /// `true` for [`Error::InvalidParameter`].
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter(_))
    }

    /// `true` for [`Error::Numerical`].
    pub fn is_numerical(&self) -> bool {
        matches!(self, Error::Numerical(_))
    }
}

/// Shorthand `Result` type used throughout bsfd.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Precondition check.
///
/// Returns `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bsfd_core::ensure;
/// fn positive(x: f64) -> bsfd_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).unwrap_err().is_invalid_parameter());
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

/// Postcondition check on a numerical result.
///
/// Returns `Err(Error::Numerical(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bsfd_core::ensure_post;
/// fn halve(x: f64) -> bsfd_core::errors::Result<f64> {
///     let result = x / 2.0;
///     ensure_post!(result.is_finite(), "result must be finite, got {result}");
///     Ok(result)
/// }
/// assert!(halve(1.0).is_ok());
/// assert!(halve(f64::NAN).unwrap_err().is_numerical());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Numerical(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Numerical(...))` immediately.
///
/// # Example
/// ```
/// use bsfd_core::fail;
/// fn always_err() -> bsfd_core::errors::Result<()> {
///     fail!("matrix is singular");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Numerical(format!($($msg)*)))
    };
}
