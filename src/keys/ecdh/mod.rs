//! Elliptic-curve Diffie–Hellman key agreement.
//!
//! Each party draws a private scalar `d` in `[1, n-1]` and publishes
//! `Q = d·G`. Multiplying the peer's public point by one's own scalar
//! gives the same group element on both sides:
//!
//! ```text
//! dA·QB = dA·dB·G = dB·QA
//! ```
//!
//! The coordinates of that element are handed to a symmetric cipher as
//! key derivation material; no cipher lives here.
//!
//! ## Structure
//!
//! - `core`
//!   Key types, private-key generation, public-key derivation and the
//!   shared-secret computation.

mod core;

pub use self::core::*;
