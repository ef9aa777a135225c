//! ECDSA-shaped signing and verification over a small curve.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::digest::{MessageDigest, RollingChecksum};
use super::order::order;
use crate::curve::{Domain, FieldPoint};
use crate::error::{CurveError, Result};
use crate::field::{mod_inverse, reduce};

/// Maximum number of nonces tried by [`sign`] before giving up.
pub const MAX_SIGNING_ATTEMPTS: usize = 64;

/// A signature `(r, s)`.
///
/// A well-formed signature has `0 < r < n` and `0 < s < n` where `n` is
/// the order of the generator. No validation is performed at
/// construction; [`verify`] rejects out-of-range components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// x-coordinate of `k·G`, reduced modulo `n`.
    pub r: u64,
    /// `k⁻¹·(z + r·d) mod n`.
    pub s: u64,
}

impl Signature {
    /// Constructs a signature from its components.
    #[inline]
    pub fn new(r: u64, s: u64) -> Self {
        Self { r, s }
    }
}

/// Signs `message` with the private scalar `private`.
///
/// Uses the default [`RollingChecksum`] digest. See [`sign_with_digest`].
pub fn sign<G: Rng + ?Sized>(
    message: &[u8],
    private: u64,
    domain: &Domain,
    rng: &mut G,
) -> Result<Signature> {
    sign_with_digest(message, private, domain, rng, &RollingChecksum)
}

/// Signs `message` with the private scalar `private` and a custom digest.
///
/// # Algorithm
///
/// With `n` the order of `G` (see [`order`]) and `z = H(m) mod n`, each
/// attempt:
///
/// 1. draws a nonce `k` uniformly from `[1, n-1]`
/// 2. computes `k·G` and `r = x(k·G) mod n`
/// 3. computes `s = k⁻¹·(z + r·d) mod n`
///
/// An attempt is degenerate, and retried with a fresh nonce, when `k·G`
/// is infinity, `r = 0`, `s = 0`, or, for a composite recovered order,
/// when `k` or `s` is not invertible modulo `n`.
///
/// The private scalar is reduced modulo `n`, which leaves `Q = d·G`
/// unchanged.
///
/// # Errors
///
/// - [`CurveError::InvalidPrivateKey`] if `d ≡ 0 (mod n)`
/// - [`CurveError::SigningExhausted`] after [`MAX_SIGNING_ATTEMPTS`]
///   degenerate attempts
/// - any error from recovering the order
pub fn sign_with_digest<G, D>(
    message: &[u8],
    private: u64,
    domain: &Domain,
    rng: &mut G,
    digest: &D,
) -> Result<Signature>
where
    G: Rng + ?Sized,
    D: MessageDigest + ?Sized,
{
    let n = order(domain)?;
    let d = private % n;

    if d == 0 {
        return Err(CurveError::InvalidPrivateKey);
    }

    let z = digest.digest(message) % n;

    for attempt in 1..=MAX_SIGNING_ATTEMPTS {
        let k = rng.random_range(1..n);

        if let Some(signature) = attempt_signature(z, d, k, n, domain)? {
            return Ok(signature);
        }

        debug!(attempt, "degenerate signature component, retrying with a fresh nonce");
    }

    warn!(
        attempts = MAX_SIGNING_ATTEMPTS,
        order = n,
        "no usable nonce found while signing"
    );

    Err(CurveError::SigningExhausted {
        attempts: MAX_SIGNING_ATTEMPTS,
    })
}

/// Runs a single signing attempt with a caller-chosen nonce.
///
/// Returns `Ok(None)` when the nonce yields a degenerate signature and
/// another nonce must be drawn. This is the deterministic core of
/// [`sign_with_digest`], exposed for reproducible test vectors.
///
/// # Errors
///
/// Same as [`sign_with_digest`], minus exhaustion.
pub fn sign_with_nonce<D>(
    message: &[u8],
    private: u64,
    nonce: u64,
    domain: &Domain,
    digest: &D,
) -> Result<Option<Signature>>
where
    D: MessageDigest + ?Sized,
{
    let n = order(domain)?;
    let d = private % n;

    if d == 0 {
        return Err(CurveError::InvalidPrivateKey);
    }

    let z = digest.digest(message) % n;

    attempt_signature(z, d, nonce % n, n, domain)
}

fn signed_order(n: u64) -> Result<i64> {
    i64::try_from(n)
        .map_err(|_| CurveError::InvalidParameters(format!("order {n} exceeds i64::MAX")))
}

fn attempt_signature(z: u64, d: u64, k: u64, n: u64, domain: &Domain) -> Result<Option<Signature>> {
    if k == 0 {
        return Ok(None);
    }

    let Some(x) = domain.mul_generator(k)?.x() else {
        return Ok(None);
    };

    let modulus = signed_order(n)?;
    let r = reduce(x, modulus);
    if r == 0 {
        return Ok(None);
    }

    let Ok(k_inv) = mod_inverse(k as i64, modulus) else {
        return Ok(None);
    };

    let e = (i128::from(z) + i128::from(r) * i128::from(d)) % i128::from(n);
    let s = (i128::from(k_inv) * e % i128::from(n)) as i64;

    if s == 0 || mod_inverse(s, modulus).is_err() {
        return Ok(None);
    }

    Ok(Some(Signature::new(r as u64, s as u64)))
}

/// Verifies `signature` over `message` against the public point `public`.
///
/// Uses the default [`RollingChecksum`] digest. See [`verify_with_digest`].
pub fn verify(message: &[u8], signature: &Signature, public: &FieldPoint, domain: &Domain) -> bool {
    verify_with_digest(message, signature, public, domain, &RollingChecksum)
}

/// Verifies `signature` over `message` with a custom digest.
///
/// # Algorithm
///
/// - reject if `r` or `s` is outside `(0, n)`
/// - `w = s⁻¹ mod n`, `u1 = z·w mod n`, `u2 = r·w mod n`
/// - `X = u1·G + u2·Q`
/// - reject if `X = ∞`, accept iff `x(X) mod n = r`
///
/// Verification never fails with an error: malformed, out-of-range or
/// forged signatures and tampered messages all yield `false`.
pub fn verify_with_digest<D>(
    message: &[u8],
    signature: &Signature,
    public: &FieldPoint,
    domain: &Domain,
    digest: &D,
) -> bool
where
    D: MessageDigest + ?Sized,
{
    check_signature(message, signature, public, domain, digest).unwrap_or(false)
}

fn check_signature<D>(
    message: &[u8],
    signature: &Signature,
    public: &FieldPoint,
    domain: &Domain,
    digest: &D,
) -> Result<bool>
where
    D: MessageDigest + ?Sized,
{
    let n = order(domain)?;
    let Signature { r, s } = *signature;

    if r == 0 || r >= n || s == 0 || s >= n {
        return Ok(false);
    }

    let modulus = signed_order(n)?;
    let w = mod_inverse(s as i64, modulus)? as u64;
    let z = digest.digest(message) % n;

    let u1 = ((u128::from(z) * u128::from(w)) % u128::from(n)) as u64;
    let u2 = ((u128::from(r) * u128::from(w)) % u128::from(n)) as u64;

    let curve = domain.curve();
    let point = curve.add(&domain.mul_generator(u1)?, &curve.scalar_mul(u2, public)?)?;

    match point.x() {
        None => Ok(false),
        Some(x) => Ok(reduce(x, modulus) as u64 == r),
    }
}
