//! Error types.

use core::fmt;
use num_bigint::BigInt;
use std::io;

/// Session error.
///
/// Apart from [`Error::NotProvisioned`], every variant ends the session.
#[derive(Debug)]
pub enum Error {
    /// Unknown curve (or action) selector.
    InvalidSelector(BigInt),

    /// Coordinate not in `[0, p)` or scalar not in `[0, n)`.
    OutOfRange {
        /// Name of the rejected parameter.
        param: &'static str,

        /// Rejected value.
        value: BigInt,
    },

    /// The supplied public key does not hash to the provisioned commitment.
    CommitmentMismatch,

    /// A wish was made before any public key was provisioned.
    NotProvisioned,

    /// Point arithmetic hit a non-invertible element.
    Arithmetic(weierstrass::Error),

    /// Input was not an integer literal in the expected base.
    Malformed {
        /// Expected base.
        radix: u32,

        /// Offending input.
        literal: String,
    },

    /// Input ended while a prompt was waiting for an answer.
    Eof,

    /// I/O error on the session streams.
    Io(io::Error),
}

impl Error {
    /// Can the session keep going after this error?
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotProvisioned)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelector(value) => write!(f, "invalid selection: {value}"),
            Self::OutOfRange { param, value } => write!(f, "{param} out of range: {value:X}"),
            Self::CommitmentMismatch => f.write_str("wrong pk hash"),
            Self::NotProvisioned => f.write_str("not provisioned"),
            Self::Arithmetic(err) => write!(f, "arithmetic error: {err}"),
            Self::Malformed { radix, literal } => {
                write!(f, "invalid literal for integer with base {radix}: {literal:?}")
            }
            Self::Eof => f.write_str("EOF when reading a line"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Arithmetic(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<weierstrass::Error> for Error {
    fn from(err: weierstrass::Error) -> Self {
        Self::Arithmetic(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
