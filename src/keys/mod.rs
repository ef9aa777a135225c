//! Key material and key agreement.
//!
//! This module groups the key types of the crate and the protocol that
//! only needs keys and the group law.
//!
//! ## ECDH
//!
//! The `ecdh` module implements Diffie–Hellman key agreement over a
//! prime-field [`Domain`](crate::curve::Domain):
//! - private scalar generation from an injected random source
//! - public point derivation `Q = d·G`
//! - shared point derivation `d·Q_peer`
//!
//! The randomness source is not required to be cryptographically secure,
//! and scalar multiplication is not constant-time. The module is meant
//! for small educational curves.
pub mod ecdh;
