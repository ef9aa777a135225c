//! ECDSA-shaped signature scheme over a small curve.
//!
//! This module implements the classic elliptic-curve signature equations
//! over a prime-field [`Domain`](crate::curve::Domain):
//!
//! ```text
//! sign:    r = x(k·G) mod n,  s = k⁻¹·(z + r·d) mod n
//! verify:  x(u1·G + u2·Q) mod n == r,  u1 = z·s⁻¹,  u2 = r·s⁻¹
//! ```
//!
//! ## Structure
//!
//! - `core`
//!   The [`Signature`] type, signing with a bounded nonce retry loop, and
//!   verification.
//!
//! - `order`
//!   Recovery of the true order of the generator when the stated order
//!   does not annihilate it.
//!
//! - `digest`
//!   The pluggable [`MessageDigest`] trait and the default
//!   [`RollingChecksum`].
//!
//! ## Security scope
//!
//! This is a teaching implementation. The default digest is a toy
//! checksum, nonces come from an injected and possibly insecure random
//! source, and nothing is constant-time.

mod core;
mod digest;
mod order;

pub use self::core::{
    MAX_SIGNING_ATTEMPTS, Signature, sign, sign_with_digest, sign_with_nonce, verify,
    verify_with_digest,
};
pub use self::digest::{MessageDigest, RollingChecksum, hash};
pub use self::order::order;
