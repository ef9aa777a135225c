//! Message digests for the signature scheme.

use crate::error::{CurveError, Result};

/// A message digest with a fixed 64-bit output.
///
/// The signature scheme reduces the output modulo the group order, so
/// only its residue matters. Implementations must be deterministic.
pub trait MessageDigest {
    /// Digests `message` into a fixed-width value.
    fn digest(&self, message: &[u8]) -> u64;
}

/// Polynomial rolling checksum `h = 31·h + byte` over wrapping `u64`.
///
/// This is **not** a cryptographic hash. Collisions are trivial to find,
/// and with a small group order distinct messages frequently share a
/// residue. It is the default digest because it keeps worked examples
/// small enough to follow by hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RollingChecksum;

impl MessageDigest for RollingChecksum {
    fn digest(&self, message: &[u8]) -> u64 {
        message
            .iter()
            .fold(0u64, |h, &b| h.wrapping_mul(31).wrapping_add(u64::from(b)))
    }
}

/// Hashes `message` with the default [`RollingChecksum`] and reduces the
/// result modulo `order`.
///
/// # Errors
///
/// Returns [`CurveError::InvalidParameters`] if `order` is zero.
pub fn hash(message: &[u8], order: u64) -> Result<u64> {
    if order == 0 {
        return Err(CurveError::InvalidParameters(
            "cannot reduce a digest modulo zero".into(),
        ));
    }

    Ok(RollingChecksum.digest(message) % order)
}
