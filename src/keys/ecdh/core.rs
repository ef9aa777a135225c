//! Key types and Diffie–Hellman key agreement.

use std::fmt;

use rand::Rng;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::curve::{Domain, FieldPoint, Point};
use crate::error::{CurveError, Result};
use crate::field::mod_inverse;
use crate::signatures::ecdsa::order;

/// Maximum number of scalars drawn by [`KeyPair::generate`].
pub const MAX_KEYGEN_ATTEMPTS: usize = 64;

/// A private scalar `d`.
///
/// The scalar is wiped from memory when the key is dropped and is never
/// printed by its `Debug` implementation.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(u64);

impl PrivateKey {
    /// Wraps an existing scalar.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidPrivateKey`] if the scalar is zero.
    pub fn from_scalar(scalar: u64) -> Result<Self> {
        if scalar == 0 {
            return Err(CurveError::InvalidPrivateKey);
        }

        Ok(Self(scalar))
    }

    /// Returns the secret scalar.
    #[inline]
    pub fn scalar(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// A private scalar together with its public point `Q = d·G`.
#[derive(Clone, Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: FieldPoint,
}

impl KeyPair {
    /// Generates a fresh key pair on `domain`.
    ///
    /// The private scalar is drawn uniformly from the units of `[1, n-1]`,
    /// where `n` is the true order of the generator (see [`order`]). A
    /// unit never maps to the point at infinity, and it can sign any
    /// message even when `n` is composite.
    ///
    /// # Errors
    ///
    /// - any error from recovering the order
    /// - [`CurveError::KeyGenerationExhausted`] if no unit was drawn within
    ///   [`MAX_KEYGEN_ATTEMPTS`] tries
    pub fn generate<G: Rng + ?Sized>(rng: &mut G, domain: &Domain) -> Result<Self> {
        let n = order(domain)?;
        let modulus = i64::try_from(n).map_err(|_| {
            CurveError::InvalidParameters(format!("order {n} exceeds the supported range"))
        })?;

        for attempt in 1..=MAX_KEYGEN_ATTEMPTS {
            let d = generate_private_key(rng, n)?;

            if mod_inverse(d as i64, modulus).is_ok() {
                return Self::from_private(PrivateKey(d), domain);
            }

            debug!(attempt, order = n, "private scalar is not a unit, drawing again");
        }

        Err(CurveError::KeyGenerationExhausted {
            attempts: MAX_KEYGEN_ATTEMPTS,
        })
    }

    /// Derives the key pair of an existing private key.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidPrivateKey`] if `d·G` is the point at
    /// infinity, i.e. `d` is a multiple of the order of `G`.
    pub fn from_private(private: PrivateKey, domain: &Domain) -> Result<Self> {
        let public = public_key(private.scalar(), domain)?;

        if public.is_infinity() {
            return Err(CurveError::InvalidPrivateKey);
        }

        Ok(Self { private, public })
    }

    /// Returns the private key.
    #[inline]
    pub fn private(&self) -> &PrivateKey {
        &self.private
    }

    /// Returns the public point.
    #[inline]
    pub fn public(&self) -> &FieldPoint {
        &self.public
    }

    /// Derives the secret shared with the owner of `peer`.
    pub fn exchange(&self, peer: &FieldPoint, domain: &Domain) -> Result<SharedSecret> {
        shared_secret(self.private.scalar(), peer, domain)
    }
}

/// The group element both parties of a key agreement arrive at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SharedSecret(FieldPoint);

impl SharedSecret {
    /// Returns the shared point.
    #[inline]
    pub fn point(&self) -> &FieldPoint {
        &self.0
    }

    /// Returns the coordinate pair handed to a symmetric cipher as raw key
    /// derivation material.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DegenerateSharedSecret`] if the shared point
    /// is the point at infinity.
    pub fn key_material(&self) -> Result<KeyMaterial> {
        let (x, y) = self.0.coordinates().ok_or(CurveError::DegenerateSharedSecret)?;
        Ok(KeyMaterial { x, y })
    }
}

/// Coordinates of a shared point, used as input keying material.
///
/// This is not a symmetric key. The consumer is responsible for running a
/// key derivation function over it.
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct KeyMaterial {
    /// x-coordinate of the shared point.
    pub x: i64,
    /// y-coordinate of the shared point.
    pub y: i64,
}

impl KeyMaterial {
    /// Big-endian encoding `x || y`.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];

        out[..8].copy_from_slice(&self.x.to_be_bytes());
        out[8..].copy_from_slice(&self.y.to_be_bytes());

        out
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial(..)")
    }
}

/// Draws a private scalar uniformly from `[1, order-1]`.
///
/// The randomness source is injected. Any [`Rng`] works; a seeded
/// generator gives reproducible keys.
///
/// # Errors
///
/// Returns [`CurveError::InvalidParameters`] if `order < 2`.
pub fn generate_private_key<G: Rng + ?Sized>(rng: &mut G, order: u64) -> Result<u64> {
    if order < 2 {
        return Err(CurveError::InvalidParameters(format!(
            "order must be at least 2, got {order}"
        )));
    }

    Ok(rng.random_range(1..order))
}

/// Computes the public point `Q = d·G`.
pub fn public_key(private: u64, domain: &Domain) -> Result<FieldPoint> {
    domain.mul_generator(private)
}

/// Computes the shared point `d·Q_peer`.
///
/// For key pairs `(dA, QA)` and `(dB, QB)` on the same domain,
/// `shared_secret(dA, QB) == shared_secret(dB, QA)`.
///
/// The peer point is used as given. See [`shared_secret_checked`] for a
/// variant that enforces curve membership first.
pub fn shared_secret(private: u64, peer: &FieldPoint, domain: &Domain) -> Result<SharedSecret> {
    Ok(SharedSecret(domain.curve().scalar_mul(private, peer)?))
}

/// Like [`shared_secret`], but rejects peer points that are the point at
/// infinity or do not satisfy the curve equation.
///
/// # Errors
///
/// Returns [`CurveError::Domain`] for an invalid peer point.
pub fn shared_secret_checked(private: u64, peer: &FieldPoint, domain: &Domain) -> Result<SharedSecret> {
    if let Point::Infinity = peer {
        return Err(CurveError::Domain("peer point is the point at infinity".into()));
    }

    if !domain.curve().is_on_curve(peer) {
        return Err(CurveError::Domain(format!("peer point {peer} is not on the curve")));
    }

    shared_secret(private, peer, domain)
}
