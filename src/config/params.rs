//! Curve parameter definitions and validation.
//!
//! This module defines the caller-supplied description of a curve and
//! provides validation together with conversions into the typed curve,
//! ring and domain values used by the rest of the crate.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::curve::{Curve, Domain, FieldCurve, Point, RealCurve};
use crate::error::{CurveError, Result};
use crate::field::{PrimeField, RealField, is_prime};

/// Arithmetic a curve is evaluated in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arithmetic {
    /// Integers modulo the prime `p`.
    #[default]
    PrimeField,
    /// Real numbers (approximate, `f64`).
    Real,
}

/// Parameters describing a curve `y² = x³ + a·x + b`, its base point and
/// the stated order of that base point.
///
/// # Default values
///
/// The default is the classroom curve
///
/// ```text
/// a = -7, b = 10, p = 223, G = (47, 71), n = 227
/// ```
///
/// evaluated over the prime field. Note that `G` does not satisfy this
/// equation and `n` does not annihilate it under the group law: the
/// generator lies on the sibling curve `b = 113` and its true order is
/// 217. The signature scheme recovers that order at run time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParameters {
    /// Coefficient `a`.
    pub a: i64,
    /// Coefficient `b`.
    pub b: i64,
    /// Field modulus (odd prime). Ignored in real mode.
    pub p: i64,
    /// Base point `G` as `(x, y)`.
    pub generator: (i64, i64),
    /// Stated order `n` of `G`.
    pub order: u64,
    /// Arithmetic mode.
    pub mode: Arithmetic,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            a: -7,
            b: 10,
            p: 223,
            generator: (47, 71),
            order: 227,
            mode: Arithmetic::PrimeField,
        }
    }
}

impl CurveParameters {
    /// Sets the coefficients `a` and `b`.
    pub fn with_coefficients(mut self, a: i64, b: i64) -> Self {
        self.a = a;
        self.b = b;
        self
    }

    /// Sets the field modulus `p`.
    pub fn with_modulus(mut self, p: i64) -> Self {
        self.p = p;
        self
    }

    /// Sets the base point `G`.
    pub fn with_generator(mut self, x: i64, y: i64) -> Self {
        self.generator = (x, y);
        self
    }

    /// Sets the stated order `n`.
    pub fn with_order(mut self, order: u64) -> Self {
        self.order = order;
        self
    }

    /// Sets the arithmetic mode.
    pub fn with_mode(mut self, mode: Arithmetic) -> Self {
        self.mode = mode;
        self
    }

    /// Parses and validates parameters from JSON.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Config`] if the document cannot be parsed, or
    /// any error reported by [`CurveParameters::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json).map_err(|e| CurveError::Config(e.to_string()))?;
        params.validate()?;

        Ok(params)
    }

    /// Serializes the parameters to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CurveError::Config(e.to_string()))
    }

    /// Validates the parameters for the configured mode.
    ///
    /// In prime-field mode:
    /// - `p` must be an odd prime
    /// - the curve must be non-singular modulo `p`
    /// - `n` must be at least 2 and fit in an `i64`
    ///
    /// In real mode only non-singularity is required.
    ///
    /// A generator that does not satisfy the curve equation is reported
    /// through a warning rather than rejected.
    pub fn validate(&self) -> Result<()> {
        match self.mode {
            Arithmetic::PrimeField => {
                if self.p <= 2 || !is_prime(self.p) {
                    return Err(CurveError::InvalidParameters(format!(
                        "modulus {} is not an odd prime",
                        self.p
                    )));
                }

                if self.order < 2 || i64::try_from(self.order).is_err() {
                    return Err(CurveError::InvalidParameters(format!(
                        "order must lie in [2, i64::MAX], got {}",
                        self.order
                    )));
                }

                let curve = self.build_field_curve()?;
                if curve.is_singular() {
                    return Err(CurveError::InvalidParameters(format!(
                        "curve a = {}, b = {} is singular modulo {}",
                        self.a, self.b, self.p
                    )));
                }

                let (gx, gy) = self.generator;
                if !curve.is_on_curve(&Point::affine(gx, gy)) {
                    warn!(
                        a = self.a,
                        b = self.b,
                        p = self.p,
                        gx,
                        gy,
                        "generator does not satisfy the curve equation"
                    );
                }
            }
            Arithmetic::Real => {
                if self.real_curve().is_singular() {
                    return Err(CurveError::InvalidParameters(format!(
                        "curve a = {}, b = {} is singular over the reals",
                        self.a, self.b
                    )));
                }
            }
        }

        Ok(())
    }

    /// Returns the prime-field curve.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::UnsupportedMode`] in real mode, or any
    /// validation error.
    pub fn field_curve(&self) -> Result<FieldCurve> {
        if self.mode != Arithmetic::PrimeField {
            return Err(CurveError::UnsupportedMode("prime-field"));
        }

        self.validate()?;
        self.build_field_curve()
    }

    /// Returns the curve over the reals.
    ///
    /// The real view is available in either mode, which lets a renderer
    /// draw the continuous curve behind a prime-field one.
    pub fn real_curve(&self) -> RealCurve {
        Curve::from_integers(RealField::default(), self.a, self.b)
    }

    /// Returns the protocol domain `(curve, G, n)`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::UnsupportedMode`] in real mode, or any
    /// validation error.
    pub fn domain(&self) -> Result<Domain> {
        let curve = self.field_curve()?;
        let (gx, gy) = self.generator;

        Domain::new(curve, Point::affine(gx, gy), self.order)
    }

    fn build_field_curve(&self) -> Result<FieldCurve> {
        Ok(Curve::from_integers(PrimeField::new(self.p)?, self.a, self.b))
    }
}
