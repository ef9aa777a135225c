//! Field and ring arithmetic.
//!
//! This module provides the arithmetic foundation on which the curve group
//! is built. It is split into two layers:
//!
//! - [`modular`]
//!   Stateless integer arithmetic modulo `m`:
//!   - canonical reduction
//!   - modular inverse (extended Euclidean algorithm)
//!   - modular exponentiation (square-and-multiply)
//!   - modular square roots (Tonelli–Shanks)
//!
//! - [`ring`]
//!   The [`Ring`] abstraction consumed by the curve group, with two
//!   implementations:
//!   - [`PrimeField`]: integers modulo an odd prime `p`
//!   - [`RealField`]: `f64` arithmetic with a comparison tolerance
//!
//! The curve group never branches on the arithmetic mode. Instead a
//! ring is injected once when the curve is constructed, and every
//! reduction, division, square root and equality test goes through it.
//!
//! ## Scope
//!
//! Elements are `i64` and intermediate products are computed in `i128`,
//! which covers the small educational moduli this crate targets. Nothing
//! here is constant-time.

pub mod modular;
pub mod ring;

pub use modular::{is_prime, is_quadratic_residue, mod_inverse, mod_pow, mod_sqrt, reduce};
pub use ring::{PrimeField, RealField, Ring};
