//! Arithmetic rings the curve group can be instantiated over.
//!
//! A [`Ring`] bundles every operation the group law and the point
//! enumerator need from the underlying arithmetic: embedding integers,
//! reduction, the four operations, square roots, equality and the
//! abscissae to scan when enumerating points.
//!
//! Two implementations are provided:
//!
//! - [`PrimeField`]: exact arithmetic modulo a prime. Division is
//!   multiplication by the modular inverse.
//! - [`RealField`]: `f64` arithmetic. Equality and zero tests use a
//!   relative tolerance, so results are approximate.

use std::fmt;

use tracing::debug;

use super::modular::{mod_inverse, mod_sqrt, mul_mod, reduce};
use crate::config::SamplingLimits;
use crate::error::{CurveError, Result};

/// Arithmetic over which curve coordinates are defined.
pub trait Ring: Clone + fmt::Debug {
    /// Representation of a single element.
    type Element: Copy + PartialEq + fmt::Debug;

    /// Embeds an integer into the ring.
    fn element(&self, value: i64) -> Self::Element;

    /// Brings an element into canonical form.
    fn reduce(&self, value: Self::Element) -> Self::Element;

    /// `a + b`
    fn add(&self, a: Self::Element, b: Self::Element) -> Self::Element;

    /// `a - b`
    fn sub(&self, a: Self::Element, b: Self::Element) -> Self::Element;

    /// `a · b`
    fn mul(&self, a: Self::Element, b: Self::Element) -> Self::Element;

    /// `-a`
    fn neg(&self, a: Self::Element) -> Self::Element;

    /// `num / den`
    ///
    /// # Errors
    ///
    /// Fails when `den` has no inverse in the ring.
    fn div(&self, num: Self::Element, den: Self::Element) -> Result<Self::Element>;

    /// Equality in the ring (exact or within tolerance).
    fn equals(&self, a: Self::Element, b: Self::Element) -> bool;

    /// All square roots of `value` (zero, one or two of them).
    fn sqrt(&self, value: Self::Element) -> Vec<Self::Element>;

    /// The x-coordinates to scan when enumerating curve points.
    fn abscissae(&self, limits: &SamplingLimits) -> Vec<Self::Element>;

    /// Returns `true` if `value` is the additive identity.
    fn is_zero(&self, value: Self::Element) -> bool {
        self.equals(value, self.element(0))
    }
}

/// Integers modulo a prime `p`.
///
/// The modulus is only checked to be at least two here; primality is a
/// property of the curve parameters and is enforced by their validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: i64,
}

impl PrimeField {
    /// Creates the ring of integers modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameters`] if `modulus < 2`.
    pub fn new(modulus: i64) -> Result<Self> {
        if modulus < 2 {
            return Err(CurveError::InvalidParameters(format!(
                "modulus must be at least 2, got {modulus}"
            )));
        }

        Ok(Self { modulus })
    }

    /// Returns the modulus `p`.
    #[inline]
    pub fn modulus(&self) -> i64 {
        self.modulus
    }
}

impl Ring for PrimeField {
    type Element = i64;

    fn element(&self, value: i64) -> i64 {
        reduce(value, self.modulus)
    }

    fn reduce(&self, value: i64) -> i64 {
        reduce(value, self.modulus)
    }

    fn add(&self, a: i64, b: i64) -> i64 {
        (i128::from(a) + i128::from(b)).rem_euclid(i128::from(self.modulus)) as i64
    }

    fn sub(&self, a: i64, b: i64) -> i64 {
        (i128::from(a) - i128::from(b)).rem_euclid(i128::from(self.modulus)) as i64
    }

    fn mul(&self, a: i64, b: i64) -> i64 {
        mul_mod(a, b, self.modulus)
    }

    fn neg(&self, a: i64) -> i64 {
        reduce(-a, self.modulus)
    }

    fn div(&self, num: i64, den: i64) -> Result<i64> {
        let inv = mod_inverse(den, self.modulus)?;
        Ok(mul_mod(num, inv, self.modulus))
    }

    fn equals(&self, a: i64, b: i64) -> bool {
        reduce(a, self.modulus) == reduce(b, self.modulus)
    }

    fn sqrt(&self, value: i64) -> Vec<i64> {
        mod_sqrt(value, self.modulus)
    }

    /// Every `x` in `[0, p)`, or an evenly strided subset when `p` exceeds
    /// `limits.max_field_columns`.
    fn abscissae(&self, limits: &SamplingLimits) -> Vec<i64> {
        let p = self.modulus as u64;
        let max = limits.max_field_columns.max(1);

        if p <= max {
            return (0..self.modulus).collect();
        }

        let stride = p.div_ceil(max);
        debug!(modulus = p, stride, "sampling field abscissae");

        (0..self.modulus).step_by(stride as usize).collect()
    }
}

/// Real-number arithmetic on `f64`.
///
/// Two values are considered equal when they differ by at most
/// `tolerance` relative to their magnitude (and never less than the
/// absolute tolerance near zero).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealField {
    tolerance: f64,
}

impl RealField {
    /// Default comparison tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    /// Creates a real ring with the given comparison tolerance.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    /// Returns the comparison tolerance.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for RealField {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE)
    }
}

impl Ring for RealField {
    type Element = f64;

    fn element(&self, value: i64) -> f64 {
        value as f64
    }

    fn reduce(&self, value: f64) -> f64 {
        value
    }

    fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    fn sub(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    fn mul(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    fn neg(&self, a: f64) -> f64 {
        -a
    }

    fn div(&self, num: f64, den: f64) -> Result<f64> {
        if self.is_zero(den) {
            return Err(CurveError::Domain(format!(
                "division by zero in real arithmetic ({num} / {den})"
            )));
        }

        Ok(num / den)
    }

    fn equals(&self, a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= self.tolerance * scale
    }

    fn sqrt(&self, value: f64) -> Vec<f64> {
        if self.is_zero(value) {
            return vec![0.0];
        }

        if value < 0.0 {
            return Vec::new();
        }

        let root = value.sqrt();
        vec![root, -root]
    }

    /// `x` from `real_start` to `real_end` (inclusive) at `real_step`, or
    /// `max_real_samples` evenly spaced values when the grid would be
    /// larger. Non-finite or reversed intervals yield nothing.
    fn abscissae(&self, limits: &SamplingLimits) -> Vec<f64> {
        let (start, end, step) = (limits.real_start, limits.real_end, limits.real_step);
        let span = end - start;

        if !span.is_finite() || !step.is_finite() || step <= 0.0 || span < 0.0 {
            return Vec::new();
        }

        let max = limits.max_real_samples.max(1);
        let wanted = (span / step).round();

        let (steps, step) = if wanted < max as f64 {
            (wanted as u64, step)
        } else {
            let steps = max - 1;
            let stride = if steps == 0 { 0.0 } else { span / steps as f64 };
            debug!(samples = max, stride, "sampling real abscissae");

            (steps, stride)
        };

        (0..=steps).map(|i| start + i as f64 * step).collect()
    }
}
