//! NIST P-384 (a.k.a. secp384r1)

use crate::CurveParams;
use hex_literal::hex;

/// NIST P-384 elliptic curve.
///
/// Its equation is `y² = x³ - 3x + b` over a ~384-bit prime field, as
/// specified in SP 800-186.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct NistP384;

impl CurveParams for NistP384 {
    const NAME: &'static str = "NIST P-384";

    const MODULUS: &'static [u8] = &hex!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff"
    );

    /// a = -3
    const EQUATION_A: &'static [u8] = &hex!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc"
    );

    const EQUATION_B: &'static [u8] = &hex!(
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef"
    );

    const GENERATOR: (&'static [u8], &'static [u8]) = (
        &hex!(
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7"
        ),
        &hex!(
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f"
        ),
    );

    const ORDER: &'static [u8] = &hex!(
        "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973"
    );
}
