//! Commitments to a provisioned public key.

use num_bigint::BigUint;
use sha2::{Digest, Sha384};
use weierstrass::field::encode_field_bytes;

/// Size of a commitment in bytes.
pub const COMMITMENT_SIZE: usize = 48;

/// `SHA-384(x ‖ y)` with both coordinates as 48-byte big-endian integers.
///
/// The curve the point was generated on is not part of the preimage, so a
/// commitment made on one curve is accepted for the same coordinates on any
/// other.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Commitment([u8; COMMITMENT_SIZE]);

impl Commitment {
    /// Commit to the coordinates `(x, y)`.
    pub fn new(x: &BigUint, y: &BigUint) -> Self {
        let digest = Sha384::new()
            .chain_update(encode_field_bytes(x))
            .chain_update(encode_field_bytes(y))
            .finalize();

        let mut bytes = [0u8; COMMITMENT_SIZE];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::Commitment;
    use hex_literal::hex;
    use num_bigint::BigUint;
    use sha2::{Digest, Sha384};

    #[test]
    fn hashes_padded_coordinates() {
        let mut preimage = [0u8; 96];
        preimage[47] = 1;
        preimage[95] = 2;
        let commitment = Commitment::new(&BigUint::from(1u32), &BigUint::from(2u32));
        assert_eq!(commitment.as_ref(), Sha384::digest(preimage).as_slice());
    }

    #[test]
    fn coordinate_order_matters() {
        let x = BigUint::from_bytes_be(&hex!("0102"));
        let y = BigUint::from_bytes_be(&hex!("0304"));
        assert_ne!(Commitment::new(&x, &y), Commitment::new(&y, &x));
    }
}
