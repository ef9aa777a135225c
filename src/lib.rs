//! Elliptic-curve algebra over small fields
//!
//! This crate provides a compact elliptic-curve engine for worked
//! examples and teaching: exact modular arithmetic, the point group of a
//! short Weierstrass curve, point enumeration, and the two protocols
//! built on the group.
//!
//! The focus is on **clarity and explicit semantics** rather than
//! performance or side-channel resistance. All operations are pure
//! functions over immutable inputs, so every type can be shared freely
//! across threads.
//!
//! # Module overview
//!
//! - `field`
//!   Modular reduction, inversion, exponentiation and square roots
//!   (Tonelli–Shanks), together with the [`Ring`](field::Ring)
//!   abstraction and its prime-field and real-number implementations.
//!
//! - `curve`
//!   Points, curves over an injected ring, the group law and scalar
//!   multiplication, and the protocol [`Domain`](curve::Domain).
//!
//! - `enumerate`
//!   The y-coordinates above a given x, and listing or counting the
//!   points of a curve under explicit resource limits.
//!
//! - `keys`
//!   Diffie–Hellman key agreement: private scalars, public points and
//!   shared points whose coordinates feed an external cipher.
//!
//! - `signatures`
//!   An ECDSA-shaped signature scheme with a bounded nonce retry loop,
//!   order recovery for misconfigured parameters, and a pluggable digest.
//!
//! - `config`
//!   Caller-facing curve parameters and enumeration limits, with
//!   validation and JSON support.
//!
//! - `render`
//!   Plain data handed to an external renderer. Nothing is drawn here.
//!
//! # Non-goals
//!
//! - constant-time execution
//! - cryptographically secure randomness (the source is injected)
//! - a cryptographic hash (the default digest is a checksum)
//! - moduli beyond small educational primes
//!
//! # Logging
//!
//! Diagnostic events are emitted through `tracing`. The crate never
//! installs a subscriber and never logs private scalars.

pub mod config;
pub mod curve;
pub mod enumerate;
pub mod error;
pub mod field;
pub mod keys;
pub mod render;
pub mod signatures;

pub use error::{CurveError, Result};
