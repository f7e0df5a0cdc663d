//! The curves known to this crate.
//!
//! Both parameter sets have 384-bit moduli with `p ≡ 3 (mod 4)`, so
//! [`Curve::lift_x_unchecked`] applies to either of them.

mod brainpoolp384r1;
mod nistp384;

pub use self::{brainpoolp384r1::BrainpoolP384r1, nistp384::NistP384};

use crate::Curve;
use std::sync::LazyLock;

/// NIST P-384, built on first use.
pub fn nist_p384() -> &'static Curve {
    static CURVE: LazyLock<Curve> = LazyLock::new(Curve::new::<NistP384>);
    &CURVE
}

/// brainpoolP384r1, built on first use.
pub fn brainpool_p384r1() -> &'static Curve {
    static CURVE: LazyLock<Curve> = LazyLock::new(Curve::new::<BrainpoolP384r1>);
    &CURVE
}

#[cfg(test)]
mod tests {
    use super::{brainpool_p384r1, nist_p384};
    use hex_literal::hex;
    use num_bigint::BigUint;

    #[test]
    fn moduli_are_3_mod_4() {
        for curve in [nist_p384(), brainpool_p384r1()] {
            assert_eq!(curve.modulus().get() % 4u32, BigUint::from(3u32));
        }
    }

    #[test]
    fn generator_is_on_curve() {
        for curve in [nist_p384(), brainpool_p384r1()] {
            assert!(curve.is_on_curve(curve.generator()), "{}", curve.name());
        }
    }

    #[test]
    fn equation_coefficients() {
        let p384 = nist_p384();
        assert_eq!(p384.equation_a(), &(p384.modulus().get() - 3u32));

        for curve in [nist_p384(), brainpool_p384r1()] {
            assert!(curve.modulus().contains(curve.equation_a()));
            assert!(curve.modulus().contains(curve.equation_b()));
        }

        let bp = brainpool_p384r1();
        assert_eq!(
            bp.equation_b(),
            &BigUint::from_bytes_be(&hex!(
                "04a8c7dd22ce28268b39b55416f0447c2fb77de107dcd2a62e880ea53eeb62d57cb4390295dbc9943ab78696fa504c11"
            ))
        );
    }

    #[test]
    fn field_sizes() {
        for curve in [nist_p384(), brainpool_p384r1()] {
            assert_eq!(curve.modulus().byte_len(), crate::FIELD_BYTES_SIZE);
            assert_eq!(curve.order().byte_len(), crate::FIELD_BYTES_SIZE);
        }
    }
}
