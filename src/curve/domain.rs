//! Protocol domain: a prime-field curve together with a base point and
//! its stated order.

use super::core::FieldCurve;
use super::point::Point;
use crate::error::{CurveError, Result};

/// A prime-field curve, a base point `G` and the stated order `n` of `G`.
///
/// This is the shared public context of key agreement and signatures.
/// The stated order is taken as configured; the signature scheme checks
/// it against the generator before relying on it.
#[derive(Clone, Debug)]
pub struct Domain {
    curve: FieldCurve,
    generator: Point<i64>,
    order: u64,
}

impl Domain {
    /// Creates a domain.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameters`] if the generator is the
    /// point at infinity, or the order is smaller than two or does not fit
    /// in an `i64`.
    pub fn new(curve: FieldCurve, generator: Point<i64>, order: u64) -> Result<Self> {
        let Some((x, y)) = generator.coordinates() else {
            return Err(CurveError::InvalidParameters(
                "generator must be an affine point".into(),
            ));
        };

        if order < 2 {
            return Err(CurveError::InvalidParameters(format!(
                "order must be at least 2, got {order}"
            )));
        }

        if i64::try_from(order).is_err() {
            return Err(CurveError::InvalidParameters(format!(
                "order {order} exceeds i64::MAX"
            )));
        }

        let p = curve.ring().modulus();
        let generator = Point::affine(x.rem_euclid(p), y.rem_euclid(p));

        Ok(Self {
            curve,
            generator,
            order,
        })
    }

    /// Returns the curve.
    #[inline]
    pub fn curve(&self) -> &FieldCurve {
        &self.curve
    }

    /// Returns the base point `G`.
    #[inline]
    pub fn generator(&self) -> &Point<i64> {
        &self.generator
    }

    /// Returns the stated order `n` of `G`.
    #[inline]
    pub fn order(&self) -> u64 {
        self.order
    }

    /// Returns the field modulus `p`.
    #[inline]
    pub fn modulus(&self) -> i64 {
        self.curve.ring().modulus()
    }

    /// Computes `k·G`.
    pub fn mul_generator(&self, k: u64) -> Result<Point<i64>> {
        self.curve.scalar_mul(k, &self.generator)
    }
}
