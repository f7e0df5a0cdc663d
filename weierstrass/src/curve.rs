//! Curve parameters.

use crate::{Modulus, Point};
use num_bigint::BigUint;

/// Parameters for elliptic curves which can be described by the short
/// Weierstrass equation `y² = x³ + ax + b (mod p)`.
///
/// All values are big-endian byte strings so they can be written down as
/// `const` items.
pub trait CurveParams {
    /// Human readable curve name.
    const NAME: &'static str;

    /// Base field modulus `p`.
    const MODULUS: &'static [u8];

    /// Coefficient `a` in the curve equation.
    const EQUATION_A: &'static [u8];

    /// Coefficient `b` in the curve equation.
    const EQUATION_B: &'static [u8];

    /// Generator point's affine coordinates: (x, y).
    const GENERATOR: (&'static [u8], &'static [u8]);

    /// Order `n` of the subgroup generated by [`CurveParams::GENERATOR`].
    const ORDER: &'static [u8];
}

/// Short Weierstrass curve over a prime field.
///
/// Immutable once constructed. Point arithmetic lives on this type, see
/// [`Curve::add`], [`Curve::double`] and [`Curve::mul`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Curve {
    pub(crate) name: &'static str,
    pub(crate) p: Modulus,
    pub(crate) a: BigUint,
    pub(crate) b: BigUint,
    pub(crate) generator: Point,
    pub(crate) n: Modulus,
}

impl Curve {
    /// Build the runtime description of the curve `C`.
    pub fn new<C: CurveParams>() -> Self {
        Self {
            name: C::NAME,
            p: Modulus::from_be_bytes(C::MODULUS),
            a: BigUint::from_bytes_be(C::EQUATION_A),
            b: BigUint::from_bytes_be(C::EQUATION_B),
            generator: Point::new(
                BigUint::from_bytes_be(C::GENERATOR.0),
                BigUint::from_bytes_be(C::GENERATOR.1),
            ),
            n: Modulus::from_be_bytes(C::ORDER),
        }
    }

    /// Human readable curve name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Base field modulus `p`.
    pub fn modulus(&self) -> &Modulus {
        &self.p
    }

    /// Group order `n`.
    pub fn order(&self) -> &Modulus {
        &self.n
    }

    /// Coefficient `a` in the curve equation.
    pub fn equation_a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn equation_b(&self) -> &BigUint {
        &self.b
    }

    /// Base point `G`.
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Does `point` satisfy the curve equation?
    ///
    /// The point at infinity is always on the curve. This is a diagnostic:
    /// none of the arithmetic in this crate calls it.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Finite { x, y } => self.p.square(y) == self.rhs(x),
        }
    }

    /// Returns a candidate y-coordinate for `x`: `(x³ + ax + b)^((p + 1) / 4)`.
    ///
    /// When `x³ + ax + b` is not a quadratic residue the returned `(x, y)` is
    /// **not** on the curve; nothing checks for this.
    pub fn lift_x_unchecked(&self, x: &BigUint) -> BigUint {
        self.p.sqrt_unchecked(&self.rhs(x))
    }

    /// Right-hand side of the curve equation, `x³ + ax + b (mod p)`.
    fn rhs(&self, x: &BigUint) -> BigUint {
        let x3 = self.p.mul(&self.p.square(x), x);
        let ax = self.p.mul(&self.a, x);
        self.p.add(&self.p.add(&x3, &ax), &self.b)
    }
}
