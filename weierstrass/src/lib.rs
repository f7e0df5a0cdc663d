#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use num_bigint::BigInt;
//! use weierstrass::{curves, Point};
//!
//! let curve = curves::nist_p384();
//! let g = curve.generator();
//!
//! let two_g = curve.double(g)?;
//! assert_eq!(curve.add(g, g)?, two_g);
//! assert_eq!(curve.mul(g, &BigInt::from(2))?, two_g);
//!
//! let order = BigInt::from(curve.order().get().clone());
//! assert_eq!(curve.mul(g, &order)?, Point::Infinity);
//! # Ok::<(), weierstrass::Error>(())
//! ```

pub mod curves;
pub mod ecdsa;
pub mod field;

#[cfg(feature = "dev")]
pub mod dev;

mod curve;
mod error;
mod point;
mod point_arithmetic;

pub use crate::{
    curve::{Curve, CurveParams},
    ecdsa::Signature,
    error::{Error, Result},
    field::Modulus,
    point::Point,
};
pub use num_bigint;

/// Size in bytes of a serialized coordinate or scalar on the supported curves.
pub const FIELD_BYTES_SIZE: usize = 48;

/// Big-endian byte representation of a coordinate or scalar.
pub type FieldBytes = [u8; FIELD_BYTES_SIZE];
