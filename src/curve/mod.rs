//! Elliptic-curve point group.
//!
//! This module defines curve points, short Weierstrass curves over an
//! injected [`Ring`](crate::field::Ring), and the protocol [`Domain`]
//! shared by key agreement and signatures.
//!
//! ## Structure
//!
//! - `point`
//!   The [`Point`] type: the point at infinity or an affine `(x, y)`.
//!
//! - `core`
//!   The [`Curve`] type: membership test, negation, the chord-and-tangent
//!   group law, and double-and-add scalar multiplication.
//!
//! - `domain`
//!   A prime-field curve together with a base point and its stated order.
//!
//! ## Notes
//!
//! - The group law is written once and runs unchanged over prime fields
//!   and the reals.
//! - Points are never validated implicitly. Callers handling externally
//!   supplied points should check [`Curve::is_on_curve`] first.
//! - Nothing here is constant-time.

mod core;
mod domain;
mod point;

pub use self::core::{Curve, FieldCurve, RealCurve};
pub use self::domain::Domain;
pub use self::point::Point;

/// A point with prime-field coordinates.
pub type FieldPoint = Point<i64>;

/// A point with real coordinates.
pub type RealPoint = Point<f64>;
