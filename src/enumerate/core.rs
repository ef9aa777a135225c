//! Point enumeration.
//!
//! Recovers the y-coordinates above a given x, lists the points of a
//! curve, and counts the points of a prime-field curve exactly.

use crate::config::{Arithmetic, CurveParameters, SamplingLimits};
use crate::curve::{Curve, FieldCurve, FieldPoint, Point, RealPoint};
use crate::error::Result;
use crate::field::{Ring, is_quadratic_residue};

/// Points produced by [`enumerate_parameters`], tagged by arithmetic mode.
#[derive(Clone, Debug, PartialEq)]
pub enum PointSet {
    /// Exhaustive (or strided) points of a prime-field curve.
    Field(Vec<FieldPoint>),
    /// Sampled points of a real curve.
    Real(Vec<RealPoint>),
}

impl PointSet {
    /// Number of points in the set, including the point at infinity.
    pub fn len(&self) -> usize {
        match self {
            Self::Field(points) => points.len(),
            Self::Real(points) => points.len(),
        }
    }

    /// Returns `true` if the set holds no point at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns every `y` such that `(x, y)` lies on the curve.
///
/// The result has zero, one or two entries. Over a prime field the
/// right-hand side is reduced modulo `p` and its modular square roots are
/// returned; over the reals the result is `[√v, -√v]`, `[0]`, or empty
/// when `v` is negative.
pub fn y_values_for_x<R: Ring>(curve: &Curve<R>, x: R::Element) -> Vec<R::Element> {
    curve.ring().sqrt(curve.rhs(x))
}

/// Lists the points of a curve.
///
/// The result always starts with the point at infinity, followed by the
/// affine points in increasing scan order of `x`. Which abscissae are
/// scanned is decided by the ring under `limits`: all of `[0, p)` for
/// small prime fields, a strided subset for large ones, and a fixed grid
/// for the reals.
///
/// # Errors
///
/// Returns an error if `limits` is invalid.
pub fn all_points<R: Ring>(
    curve: &Curve<R>,
    limits: &SamplingLimits,
) -> Result<Vec<Point<R::Element>>> {
    limits.validate()?;

    let mut points = vec![Point::Infinity];

    for x in curve.ring().abscissae(limits) {
        for y in y_values_for_x(curve, x) {
            points.push(Point::Affine { x, y });
        }
    }

    Ok(points)
}

/// Counts the points of a prime-field curve, including infinity.
///
/// Each `x` contributes two points when `x³ + ax + b` is a non-zero
/// residue, one when it is zero, and none otherwise.
pub fn count_points(curve: &FieldCurve) -> u64 {
    let p = curve.ring().modulus();

    let affine: u64 = (0..p)
        .map(|x| {
            let v = curve.rhs(x);
            if v == 0 {
                1
            } else if is_quadratic_residue(v, p) {
                2
            } else {
                0
            }
        })
        .sum();

    affine + 1
}

/// Lists the points of the curve described by `params` in its configured
/// arithmetic mode.
///
/// # Errors
///
/// Returns an error if the parameters or the limits are invalid.
pub fn enumerate_parameters(params: &CurveParameters, limits: &SamplingLimits) -> Result<PointSet> {
    match params.mode {
        Arithmetic::PrimeField => {
            let curve = params.field_curve()?;
            Ok(PointSet::Field(all_points(&curve, limits)?))
        }
        Arithmetic::Real => {
            params.validate()?;
            let curve = params.real_curve();
            Ok(PointSet::Real(all_points(&curve, limits)?))
        }
    }
}
