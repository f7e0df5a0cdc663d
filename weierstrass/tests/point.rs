//! Point arithmetic tests.

use hex_literal::hex;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use proptest::prelude::*;
use weierstrass::{Curve, Point, curves};

/// Multiples `[2]G` and `[3]G` as (x, y) pairs.
type Multiples = [([u8; 48], [u8; 48]); 2];

const NIST_P384_MULTIPLES: Multiples = [
    (
        hex!("08d999057ba3d2d969260045c55b97f089025959a6f434d651d207d19fb96e9e4fe0e86ebe0e64f85b96a9c75295df61"),
        hex!("8e80f1fa5b1b3cedb7bfe8dffd6dba74b275d875bc6cc43e904e505f256ab4255ffd43e94d39e22d61501e700a940e80"),
    ),
    (
        hex!("077a41d4606ffa1464793c7e5fdc7d98cb9d3910202dcd06bea4f240d3566da6b408bbae5026580d02d7e5c70500c831"),
        hex!("c995f7ca0b0c42837d0bbe9602a9fc998520b41c85115aa5f7684c0edc111eacc24abd6be4b5d298b65f28600a2f1df1"),
    ),
];

const BRAINPOOL_P384R1_MULTIPLES: Multiples = [
    (
        hex!("2282bc382a2f4dfcb95c3495d7b4fd590ad520b3eb6be4d6ec2f80c4e0f70df87c4ba74a09b553ebb427b58df9d59fca"),
        hex!("0edda83773ac68735768d14a24f37a57ce9bedbc170921ce4d89dd051728fc3eb4b4ea69ab64fc288f1b29502b6e1d30"),
    ),
    (
        hex!("7b63205bf00ddae73b17452b6a27ebf53df581348c6949f83ee1b6fcc7463bbe3c11ef6596a3b8897d7cc85b3035f11f"),
        hex!("761d3a4a5f8093775521a326bc02baaf7b2eb481ead16a5c7b2bd39462363e0373c0edaea3b8f59381d7129d48772eb3"),
    ),
];

fn point(coords: &([u8; 48], [u8; 48])) -> Point {
    Point::new(
        BigUint::from_bytes_be(&coords.0),
        BigUint::from_bytes_be(&coords.1),
    )
}

fn order(curve: &Curve) -> BigInt {
    curve.order().get().clone().into()
}

fn both_curves() -> [(&'static Curve, &'static Multiples); 2] {
    [
        (curves::nist_p384(), &NIST_P384_MULTIPLES),
        (curves::brainpool_p384r1(), &BRAINPOOL_P384R1_MULTIPLES),
    ]
}

#[test]
fn test_vector_double_generator() {
    for (curve, multiples) in both_curves() {
        let doubled = curve.double(curve.generator()).unwrap();
        assert_eq!(doubled, point(&multiples[0]), "{}", curve.name());
    }
}

#[test]
fn test_vector_repeated_add() {
    for (curve, multiples) in both_curves() {
        let g = curve.generator();
        let mut p = curve.add(g, g).unwrap();

        for coords in multiples {
            assert_eq!(p, point(coords), "{}", curve.name());
            p = curve.add(&p, g).unwrap();
        }
    }
}

#[test]
fn test_vector_scalar_mult() {
    for (curve, multiples) in both_curves() {
        for (k, coords) in (2..).zip(multiples) {
            let p = curve.mul(curve.generator(), &BigInt::from(k)).unwrap();
            assert_eq!(p, point(coords), "{}", curve.name());
        }
    }
}

#[test]
fn generator_times_order_is_identity() {
    for (curve, _) in both_curves() {
        let p = curve.mul(curve.generator(), &order(curve)).unwrap();
        assert_eq!(p, Point::Infinity, "{}", curve.name());
    }
}

#[test]
fn lift_x_recovers_generator_up_to_sign() {
    for (curve, _) in both_curves() {
        let g = curve.generator();
        let (x, y) = (g.x().unwrap(), g.y().unwrap());

        let lifted = curve.lift_x_unchecked(x);
        assert!(&lifted == y || lifted == curve.modulus().neg(y));
    }
}

#[test]
fn lift_x_of_non_residue_is_off_curve() {
    // x³ + ax + b is a non-residue for x = 1 on P-384 and x = 2 on brainpoolP384r1
    for (curve, x) in [(curves::nist_p384(), 1u32), (curves::brainpool_p384r1(), 2u32)] {
        let x = BigUint::from(x);
        let y = curve.lift_x_unchecked(&x);
        assert!(!curve.is_on_curve(&Point::new(x, y)), "{}", curve.name());
    }
}

#[test]
fn lift_x_of_residue_is_on_curve() {
    for (curve, x) in [(curves::nist_p384(), 2u32), (curves::brainpool_p384r1(), 1u32)] {
        let x = BigUint::from(x);
        let y = curve.lift_x_unchecked(&x);
        assert!(curve.is_on_curve(&Point::new(x, y)), "{}", curve.name());
    }
}

fn scalar() -> impl Strategy<Value = BigInt> {
    proptest::collection::vec(any::<u8>(), 48)
        .prop_map(|bytes| BigUint::from_bytes_be(&bytes).into())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn identity_addition(k in scalar()) {
        for (curve, _) in both_curves() {
            let p = curve.mul(curve.generator(), &k).unwrap();
            prop_assert_eq!(&curve.add(&Point::Infinity, &p).unwrap(), &p);
            prop_assert_eq!(&curve.add(&p, &Point::Infinity).unwrap(), &p);
        }
    }

    #[test]
    fn double_matches_add(k in scalar()) {
        for (curve, _) in both_curves() {
            let p = curve.mul(curve.generator(), &k).unwrap();
            prop_assume!(p.y().is_some_and(|y| !y.is_zero()));
            prop_assert_eq!(curve.double(&p).unwrap(), curve.add(&p, &p).unwrap());
        }
    }

    #[test]
    fn scalar_is_reduced_mod_order(k in scalar()) {
        for (curve, _) in both_curves() {
            let g = curve.generator();
            let shifted = &k + order(curve);
            prop_assert_eq!(curve.mul(g, &shifted).unwrap(), curve.mul(g, &k).unwrap());
        }
    }

    #[test]
    fn multiples_stay_on_curve(k in scalar()) {
        for (curve, _) in both_curves() {
            let p = curve.mul(curve.generator(), &k).unwrap();
            prop_assert!(curve.is_on_curve(&p));
        }
    }
}
