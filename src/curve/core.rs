//! Short Weierstrass curves and the group law.
//!
//! A [`Curve`] is the equation
//!
//! ```text
//! y² = x³ + a·x + b
//! ```
//!
//! over a [`Ring`]. The ring is injected once at construction and owns
//! every arithmetic decision (reduction, division, equality), so the
//! group law below is written exactly once for both prime-field and
//! real-number curves.

use super::point::Point;
use crate::error::Result;
use crate::field::{PrimeField, RealField, Ring};

/// A curve `y² = x³ + a·x + b` over the ring `R`.
#[derive(Clone, Debug)]
pub struct Curve<R: Ring> {
    ring: R,
    a: R::Element,
    b: R::Element,
}

/// A curve over a prime field.
pub type FieldCurve = Curve<PrimeField>;

/// A curve over the reals.
pub type RealCurve = Curve<RealField>;

impl<R: Ring> Curve<R> {
    /// Creates a curve from ring elements. Coefficients are reduced.
    pub fn new(ring: R, a: R::Element, b: R::Element) -> Self {
        let a = ring.reduce(a);
        let b = ring.reduce(b);

        Self { ring, a, b }
    }

    /// Creates a curve from integer coefficients embedded into `ring`.
    pub fn from_integers(ring: R, a: i64, b: i64) -> Self {
        let a = ring.element(a);
        let b = ring.element(b);

        Self { ring, a, b }
    }

    /// Returns the underlying ring.
    #[inline]
    pub fn ring(&self) -> &R {
        &self.ring
    }

    /// Returns the coefficient `a`.
    #[inline]
    pub fn a(&self) -> R::Element {
        self.a
    }

    /// Returns the coefficient `b`.
    #[inline]
    pub fn b(&self) -> R::Element {
        self.b
    }

    /// Evaluates the right-hand side `x³ + a·x + b`.
    pub fn rhs(&self, x: R::Element) -> R::Element {
        let r = &self.ring;
        let x = r.reduce(x);
        let x3 = r.mul(r.mul(x, x), x);

        r.add(r.add(x3, r.mul(self.a, x)), self.b)
    }

    /// Returns `true` if the discriminant `4a³ + 27b²` vanishes, i.e. the
    /// curve has a cusp or a node and its points do not form a group.
    pub fn is_singular(&self) -> bool {
        let r = &self.ring;
        let a3 = r.mul(r.mul(self.a, self.a), self.a);
        let b2 = r.mul(self.b, self.b);
        let disc = r.add(r.mul(r.element(4), a3), r.mul(r.element(27), b2));

        r.is_zero(disc)
    }

    /// Returns `true` if `point` satisfies the curve equation.
    ///
    /// The point at infinity is always on the curve. Prime-field curves
    /// check the equation exactly; real curves within the ring tolerance.
    pub fn is_on_curve(&self, point: &Point<R::Element>) -> bool {
        match *point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let r = &self.ring;
                let y = r.reduce(y);

                r.equals(r.mul(y, y), self.rhs(x))
            }
        }
    }

    /// Returns `true` if both points are equal under the ring's equality.
    pub fn points_equal(&self, p: &Point<R::Element>, q: &Point<R::Element>) -> bool {
        match (p, q) {
            (Point::Infinity, Point::Infinity) => true,
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                self.ring.equals(*x1, *x2) && self.ring.equals(*y1, *y2)
            }
            _ => false,
        }
    }

    /// Returns the additive inverse `-P = (x, -y)`.
    pub fn negate(&self, point: &Point<R::Element>) -> Point<R::Element> {
        match *point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: self.ring.reduce(x),
                y: self.ring.neg(y),
            },
        }
    }

    /// Adds two points using the chord-and-tangent rule.
    ///
    /// - `∞ + Q = Q` and `P + ∞ = P`
    /// - `P + Q = ∞` when `P.x = Q.x` and `P.y ≠ Q.y`
    /// - doubling with `P.y = 0` yields `∞` (vertical tangent)
    /// - otherwise with slope `λ`:
    ///
    /// ```text
    /// R.x = λ² - P.x - Q.x
    /// R.y = λ·(P.x - R.x) - P.y
    /// ```
    ///
    /// where `λ = (3·P.x² + a) / (2·P.y)` when doubling and
    /// `λ = (Q.y - P.y) / (Q.x - P.x)` otherwise.
    ///
    /// # Errors
    ///
    /// Fails only when the ring cannot divide by the slope denominator,
    /// which the guards above rule out for a prime modulus.
    pub fn add(&self, p: &Point<R::Element>, q: &Point<R::Element>) -> Result<Point<R::Element>> {
        let (x1, y1, x2, y2) = match (*p, *q) {
            (Point::Infinity, _) => return Ok(*q),
            (_, Point::Infinity) => return Ok(*p),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        let r = &self.ring;
        let (x1, y1, x2, y2) = (r.reduce(x1), r.reduce(y1), r.reduce(x2), r.reduce(y2));

        let lambda = if r.equals(x1, x2) {
            if !r.equals(y1, y2) || r.is_zero(y1) {
                return Ok(Point::Infinity);
            }

            let num = r.add(r.mul(r.element(3), r.mul(x1, x1)), self.a);
            let den = r.mul(r.element(2), y1);
            r.div(num, den)?
        } else {
            r.div(r.sub(y2, y1), r.sub(x2, x1))?
        };

        let x3 = r.sub(r.sub(r.mul(lambda, lambda), x1), x2);
        let y3 = r.sub(r.mul(lambda, r.sub(x1, x3)), y1);

        Ok(Point::Affine {
            x: r.reduce(x3),
            y: r.reduce(y3),
        })
    }

    /// Computes `2·P`.
    #[inline]
    pub fn double(&self, point: &Point<R::Element>) -> Result<Point<R::Element>> {
        self.add(point, point)
    }

    /// Computes `k·P` by double-and-add over the bits of `k`.
    ///
    /// `k = 0` or `P = ∞` yields `∞`. The scalar is not reduced modulo
    /// the group order; any `k` gives the mathematically correct multiple.
    pub fn scalar_mul(&self, k: u64, point: &Point<R::Element>) -> Result<Point<R::Element>> {
        let mut result = Point::Infinity;
        let mut addend = *point;
        let mut k = k;

        while k > 0 {
            if k & 1 == 1 {
                result = self.add(&result, &addend)?;
            }

            k >>= 1;

            if k > 0 {
                addend = self.double(&addend)?;
            }
        }

        Ok(result)
    }

    /// Returns `P, 2P, 3P, …` up to and including the first `∞`, or the
    /// first `limit` multiples if infinity is not reached before.
    pub fn multiples(&self, point: &Point<R::Element>, limit: usize) -> Result<Vec<Point<R::Element>>> {
        let mut out = Vec::new();
        let mut current = *point;

        while out.len() < limit {
            out.push(current);

            if current.is_infinity() {
                break;
            }

            current = self.add(&current, point)?;
        }

        Ok(out)
    }
}
