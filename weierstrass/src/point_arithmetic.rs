//! Affine point arithmetic.
//!
//! These are the textbook chord-and-tangent formulas. They are not complete:
//! the denominators `2y` and `x₁ - x₂` can vanish for inputs the formulas
//! don't special-case, in which case the operation fails with [`Error`].
//!
//! [`Error`]: crate::Error

use crate::{Curve, Point, Result};
use num_bigint::{BigInt, BigUint};

impl Curve {
    /// Returns `point + point`.
    ///
    /// Fails when `y ≡ 0 (mod p)` (vertical tangent).
    pub fn double(&self, point: &Point) -> Result<Point> {
        match point {
            Point::Infinity => Ok(Point::Infinity),
            Point::Finite { x, y } => {
                let p = &self.p;

                // λ = (3x² + a) / 2y
                let numerator = p.add(&p.mul(&BigUint::from(3u32), &p.square(x)), &self.a);
                let lambda = p.mul(&numerator, &p.invert(&p.add(y, y))?);

                let rx = p.sub(&p.square(&lambda), &p.add(x, x));
                let ry = p.sub(&p.mul(&lambda, &p.sub(x, &rx)), y);
                Ok(Point::new(rx, ry))
            }
        }
    }

    /// Returns `lhs + rhs`.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        match (lhs, rhs) {
            (Point::Infinity, _) => Ok(rhs.clone()),
            (_, Point::Infinity) => Ok(lhs.clone()),
            (Point::Finite { x: x1, y: y1 }, Point::Finite { x: x2, y: y2 }) => {
                if x1 == x2 {
                    return if y1 == y2 {
                        self.double(lhs)
                    } else {
                        Ok(Point::Infinity)
                    };
                }

                let p = &self.p;

                // λ = (y₁ - y₂) / (x₁ - x₂)
                let lambda = p.mul(&p.sub(y1, y2), &p.invert(&p.sub(x1, x2))?);

                let rx = p.sub(&p.sub(&p.square(&lambda), x1), x2);
                let ry = p.sub(&p.mul(&lambda, &p.sub(x1, &rx)), y1);
                Ok(Point::new(rx, ry))
            }
        }
    }

    /// Returns `-point`.
    pub fn neg(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Finite { x, y } => Point::new(x.clone(), self.p.neg(y)),
        }
    }

    /// Returns `[k]point`.
    ///
    /// `k` is first reduced modulo the group order `n`, so any integer is
    /// accepted and `k ≡ 0 (mod n)` yields the point at infinity. Uses
    /// right-to-left double-and-add, which is not constant-time.
    pub fn mul(&self, point: &Point, k: &BigInt) -> Result<Point> {
        match point {
            Point::Infinity => Ok(Point::Infinity),
            Point::Finite { .. } => {
                let k = self.n.reduce_signed(k);
                let mut acc = Point::Infinity;
                let mut addend = point.clone();

                for i in 0..k.bits() {
                    if k.bit(i) {
                        acc = self.add(&acc, &addend)?;
                    }
                    addend = self.double(&addend)?;
                }

                Ok(acc)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, curves};
    use num_bigint::{BigInt, BigUint};

    #[test]
    fn double_vertical_tangent_fails() {
        let curve = curves::nist_p384();
        let point = Point::new(BigUint::from(5u32), BigUint::from(0u32));
        assert!(curve.double(&point).is_err());
    }

    #[test]
    fn add_inverse_is_identity() {
        let curve = curves::brainpool_p384r1();
        let g = curve.generator();
        assert_eq!(curve.add(g, &curve.neg(g)).unwrap(), Point::Infinity);
    }

    #[test]
    fn mul_small_scalars() {
        let curve = curves::nist_p384();
        let g = curve.generator();
        assert_eq!(curve.mul(g, &BigInt::from(0)).unwrap(), Point::Infinity);
        assert_eq!(&curve.mul(g, &BigInt::from(1)).unwrap(), g);
        assert_eq!(curve.mul(g, &BigInt::from(-1)).unwrap(), curve.neg(g));
        assert_eq!(
            curve.mul(&Point::Infinity, &BigInt::from(7)).unwrap(),
            Point::Infinity
        );
    }

    #[test]
    fn off_curve_points_are_accepted() {
        let curve = curves::nist_p384();
        let p = Point::new(BigUint::from(1u32), BigUint::from(2u32));
        let q = Point::new(BigUint::from(3u32), BigUint::from(4u32));
        assert!(!curve.is_on_curve(&p));

        let sum = curve.add(&p, &q).unwrap();
        assert!(!sum.is_identity());
        assert!(curve.mul(&p, &BigInt::from(12345)).is_ok());
    }
}
