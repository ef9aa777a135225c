//! Digital signature schemes.
//!
//! This module groups signature algorithms built on top of the crate's
//! curve group.
//!
//! Each submodule corresponds to a specific signature scheme and is
//! responsible for its own signature type, signing logic and verification
//! rules.

pub mod ecdsa;
