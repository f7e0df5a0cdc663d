//! Error types.

use core::fmt;

/// Arithmetic error: division by an element with no multiplicative inverse.
///
/// Raised when a point formula needs the inverse of `0 (mod p)`, e.g. when
/// doubling a point whose y-coordinate is zero.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("element is not invertible")
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
