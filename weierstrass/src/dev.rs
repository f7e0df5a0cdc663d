//! Development-related functionality.
//!
//! Key derivation and signing for tests and benchmarks. The nonce is chosen
//! by the caller, so none of this is fit for producing real signatures.

use crate::{Curve, Error, Point, Result, Signature, ecdsa::hash_message};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Returns the public key `[secret]G`.
pub fn public_key(curve: &Curve, secret: &BigUint) -> Result<Point> {
    curve.mul(curve.generator(), &secret.clone().into())
}

/// Sign `msg` with `secret` using the standard ECDSA signing equation and the
/// given `nonce`:
///
/// ```text
/// r = x([nonce]G) mod n
/// s = nonce⁻¹ (z + r · secret) mod n
/// ```
///
/// Fails if `r` or `s` comes out as zero.
pub fn sign(curve: &Curve, secret: &BigUint, nonce: &BigUint, msg: &[u8]) -> Result<Signature> {
    let n = curve.order();

    let r = match curve.mul(curve.generator(), &BigInt::from(nonce.clone()))? {
        Point::Infinity => return Err(Error),
        Point::Finite { x, .. } => n.reduce(&x),
    };

    let z = hash_message(msg);
    let s = n.mul(&n.invert(nonce)?, &n.add(&z, &n.mul(&r, secret)));

    if r.is_zero() || s.is_zero() {
        return Err(Error);
    }

    Ok(Signature::new(r, s))
}
