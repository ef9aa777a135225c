//! Curve points.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point of an elliptic curve group.
///
/// A point is either the distinguished point at infinity, which is the
/// identity of the group and carries no coordinates, or an affine point
/// `(x, y)`.
///
/// Points are immutable values: every group operation returns a new
/// point. Whether an affine point actually lies on a given curve is a
/// property of that curve, see `Curve::is_on_curve`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point<E> {
    /// The group identity.
    Infinity,

    /// An affine point.
    Affine {
        /// x-coordinate.
        x: E,
        /// y-coordinate.
        y: E,
    },
}

impl<E: Copy> Point<E> {
    /// Constructs an affine point. No curve membership is checked.
    #[inline]
    pub fn affine(x: E, y: E) -> Self {
        Self::Affine { x, y }
    }

    /// Returns `true` for the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Returns the affine coordinates, or `None` for the point at infinity.
    #[inline]
    pub fn coordinates(&self) -> Option<(E, E)> {
        match *self {
            Self::Infinity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }

    /// Returns the x-coordinate, or `None` for the point at infinity.
    #[inline]
    pub fn x(&self) -> Option<E> {
        self.coordinates().map(|(x, _)| x)
    }

    /// Returns the y-coordinate, or `None` for the point at infinity.
    #[inline]
    pub fn y(&self) -> Option<E> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl<E: fmt::Display> fmt::Display for Point<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infinity => write!(f, "∞"),
            Self::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}
