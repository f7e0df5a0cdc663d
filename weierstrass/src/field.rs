//! Arithmetic modulo a prime.
//!
//! Every curve carries two of these: the base field modulus `p`, used for
//! point coordinates, and the group order `n`, used for scalars.

use crate::{Error, FIELD_BYTES_SIZE, FieldBytes, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use rand_core::{CryptoRng, RngCore};

/// Odd prime modulus.
///
/// Operands do not need to be reduced beforehand; every result is in
/// `[0, m)`. None of the operations are constant-time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Modulus(BigUint);

impl Modulus {
    /// Wrap a modulus. The value must be an odd prime for [`Modulus::invert`]
    /// to be correct.
    pub fn new(modulus: BigUint) -> Self {
        Self(modulus)
    }

    /// Decode a big-endian modulus.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }

    /// Borrow the modulus as an integer.
    pub fn get(&self) -> &BigUint {
        &self.0
    }

    /// Is `value` in `[0, m)`?
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.0
    }

    /// Returns `value mod m`.
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.0
    }

    /// Returns `value mod m` for a signed value, always in `[0, m)`.
    pub fn reduce_signed(&self, value: &BigInt) -> BigUint {
        let r = value.magnitude() % &self.0;
        if value.sign() == Sign::Minus && !r.is_zero() {
            &self.0 - r
        } else {
            r
        }
    }

    /// Returns `a + b mod m`.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.0
    }

    /// Returns `a - b mod m`.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) + &self.0 - self.reduce(b)) % &self.0
    }

    /// Returns `-a mod m`.
    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    /// Returns `a * b mod m`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.0
    }

    /// Returns `a² mod m`.
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Returns `base^exponent mod m`.
    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.0)
    }

    /// Returns the multiplicative inverse of `value`.
    ///
    /// Computed as `value^(m - 2)`, which relies on `m` being prime. Fails
    /// when `value ≡ 0 (mod m)`.
    pub fn invert(&self, value: &BigUint) -> Result<BigUint> {
        let value = self.reduce(value);
        if value.is_zero() {
            return Err(Error);
        }

        Ok(self.pow(&value, &(&self.0 - 2u32)))
    }

    /// Returns `value^((m + 1) / 4) mod m`.
    ///
    /// For `m ≡ 3 (mod 4)` this is a square root of `value` when `value` is a
    /// quadratic residue. Otherwise the result squares to `-value` instead;
    /// no residuosity check is made.
    pub fn sqrt_unchecked(&self, value: &BigUint) -> BigUint {
        self.pow(value, &((&self.0 + 1u32) >> 2))
    }

    /// Returns a uniformly random value in `[1, m - 1]`.
    pub fn random_nonzero<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> BigUint {
        // We reduce a random value with a double length, which results in a
        // negligible bias from the uniform distribution.
        let mut bytes = vec![0u8; 2 * self.byte_len()];
        rng.fill_bytes(&mut bytes);
        BigUint::from_bytes_be(&bytes) % (&self.0 - 1u32) + 1u32
    }

    /// Number of bytes needed to encode the modulus.
    pub fn byte_len(&self) -> usize {
        self.0.bits().div_ceil(8) as usize
    }
}

/// Encode `value` as a fixed-width big-endian byte array.
///
/// Values wider than [`FIELD_BYTES_SIZE`] keep only their low-order bytes.
pub fn encode_field_bytes(value: &BigUint) -> FieldBytes {
    let bytes = value.to_bytes_be();
    let bytes = &bytes[bytes.len().saturating_sub(FIELD_BYTES_SIZE)..];

    let mut out = [0u8; FIELD_BYTES_SIZE];
    out[FIELD_BYTES_SIZE - bytes.len()..].copy_from_slice(bytes);
    out
}
