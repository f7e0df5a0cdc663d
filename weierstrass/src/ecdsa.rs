//! Elliptic Curve Digital Signature Algorithm (ECDSA) verification
//!
//! Messages are hashed with SHA-384 and the full 384-bit digest is used as
//! the integer `z`.
//!
//! ## Verification Example
//!
//! ```
//! use hex_literal::hex;
//! use weierstrass::{curves, Point, Signature, num_bigint::BigUint};
//!
//! // RFC 6979 Appendix A.2.6 (NIST P-384 + SHA-384)
//! let public_key = Point::new(
//!     BigUint::from_bytes_be(&hex!("ec3a4e415b4e19a4568618029f427fa5da9a8bc4ae92e02e06aae5286b300c64def8f0ea9055866064a254515480bc13")),
//!     BigUint::from_bytes_be(&hex!("8015d9b72d7d57244ea8ef9ac0c621896708a59367f9dfb9f54ca84b3f1c9db1288b231c3ae0d4fe7344fd2533264720")),
//! );
//! let signature = Signature::new(
//!     BigUint::from_bytes_be(&hex!("94edbb92a5ecb8aad4736e56c691916b3f88140666ce9fa73d64c4ea95ad133c81a648152e44acf96e36dd1e80fabe46")),
//!     BigUint::from_bytes_be(&hex!("99ef4aeb15f178cea1fe40db2603138f130e740a19624526203b6351d0a3a94fa329c145786e679e7b82c71a38628ac8")),
//! );
//!
//! let curve = curves::nist_p384();
//! assert!(curve.verify(&public_key, &signature, b"sample")?);
//! assert!(!curve.verify(&public_key, &signature, b"test")?);
//! # Ok::<(), weierstrass::Error>(())
//! ```

use crate::{Curve, Modulus, Point, Result};
use num_bigint::{BigInt, BigUint, Sign};
use sha2::{Digest, Sha384};

/// ECDSA signature `(r, s)`.
///
/// Components are signed so that out-of-range values, including zero and
/// negative ones, can be represented and rejected by [`Curve::verify`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    r: BigInt,
    s: BigInt,
}

impl Signature {
    /// Create a signature from its components. No range check is made here.
    pub fn new(r: impl Into<BigInt>, s: impl Into<BigInt>) -> Self {
        Self {
            r: r.into(),
            s: s.into(),
        }
    }

    /// The `r` component.
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigInt {
        &self.s
    }

    /// Both components, if each lies in `[1, n)`.
    fn scalars(&self, n: &Modulus) -> Option<(BigUint, BigUint)> {
        Some((nonzero_scalar(&self.r, n)?, nonzero_scalar(&self.s, n)?))
    }
}

fn nonzero_scalar(value: &BigInt, n: &Modulus) -> Option<BigUint> {
    match value.sign() {
        Sign::Plus if n.contains(value.magnitude()) => Some(value.magnitude().clone()),
        _ => None,
    }
}

/// Returns SHA-384(`msg`) as a big-endian integer.
pub fn hash_message(msg: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&Sha384::digest(msg))
}

impl Curve {
    /// Verify `signature` over `msg` against `public_key`.
    ///
    /// Returns `Ok(false)` when `r` or `s` is outside `[1, n)` or when the
    /// signature does not match. The public key is used as given; it is not
    /// checked to lie on this curve.
    pub fn verify(&self, public_key: &Point, signature: &Signature, msg: &[u8]) -> Result<bool> {
        let Some((r, s)) = signature.scalars(&self.n) else {
            return Ok(false);
        };

        let z = hash_message(msg);
        let s_inv = self.n.invert(&s)?;
        let u1 = self.n.mul(&s_inv, &z);
        let u2 = self.n.mul(&s_inv, &r);

        let point = self.add(
            &self.mul(&self.generator, &u1.into())?,
            &self.mul(public_key, &u2.into())?,
        )?;

        Ok(match point {
            Point::Infinity => false,
            Point::Finite { x, .. } => x == r,
        })
    }
}
