//! Curve points in affine coordinates.

use num_bigint::BigUint;

/// Point on a short Weierstrass curve.
///
/// Coordinates are expected in `[0, p)` but a point is never checked against
/// any curve equation: an arbitrary `(x, y)` pair is a valid `Point` and goes
/// through the arithmetic as given.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Infinity,

    /// Affine point `(x, y)`.
    Finite {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Affine point with the given coordinates.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self::Finite { x, y }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Self::Infinity => None,
            Self::Finite { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Self::Infinity => None,
            Self::Finite { y, .. } => Some(y),
        }
    }
}
