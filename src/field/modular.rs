//! Integer arithmetic modulo `m`.
//!
//! All functions operate on explicit inputs and return canonical residues
//! in `[0, m)`. Products are widened to `i128` before reduction so that
//! any modulus below `2^62` is safe.

use crate::error::{CurveError, Result};

/// Returns the canonical non-negative residue of `n` modulo `m`.
///
/// Unlike the `%` operator, the result is always in `[0, m)`, including
/// for negative `n`.
///
/// `m` must be positive.
#[inline]
pub fn reduce(n: i64, m: i64) -> i64 {
    n.rem_euclid(m)
}

/// Multiplies two residues modulo `m` without overflow.
#[inline]
pub(crate) fn mul_mod(a: i64, b: i64, m: i64) -> i64 {
    (i128::from(a) * i128::from(b)).rem_euclid(i128::from(m)) as i64
}

/// Computes the multiplicative inverse of `a` modulo `m`.
///
/// # Returns
///
/// The unique `x` in `[0, m)` such that `a·x ≡ 1 (mod m)`.
///
/// # Errors
///
/// Returns [`CurveError::NoInverse`] if `gcd(a, m) ≠ 1` or if `m` is not
/// positive. For a prime `m` this only happens when `a ≡ 0`.
///
/// # Implementation details
///
/// Uses the iterative extended Euclidean algorithm, tracking only the
/// Bézout coefficient of `a`.
pub fn mod_inverse(a: i64, m: i64) -> Result<i64> {
    if m <= 0 {
        return Err(CurveError::NoInverse { value: a, modulus: m });
    }

    let (mut old_r, mut r) = (reduce(a, m), m);
    let (mut old_s, mut s) = (1i64, 0i64);

    while r != 0 {
        let q = old_r / r;

        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return Err(CurveError::NoInverse { value: a, modulus: m });
    }

    Ok(reduce(old_s, m))
}

/// Computes `base^exp mod m` by binary exponentiation.
///
/// The exponent is scanned from the least significant bit, squaring the
/// running base at each step and multiplying it into the accumulator
/// whenever the bit is set.
pub fn mod_pow(base: i64, exp: u64, m: i64) -> i64 {
    if m == 1 {
        return 0;
    }

    let mut result = 1;
    let mut base = reduce(base, m);
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }

        base = mul_mod(base, base, m);
        exp >>= 1;
    }

    result
}

/// Returns `true` if `n` is a square modulo the prime `p`.
///
/// Zero counts as a residue. For odd `p` this is Euler's criterion:
///
/// ```text
/// n^((p-1)/2) ≡ 1 (mod p)
/// ```
pub fn is_quadratic_residue(n: i64, p: i64) -> bool {
    let n = reduce(n, p);

    if n == 0 || p == 2 {
        return true;
    }

    mod_pow(n, ((p - 1) / 2) as u64, p) == 1
}

/// Computes the square roots of `n` modulo the prime `p`.
///
/// # Returns
///
/// - an empty vector if `n` is not a quadratic residue
/// - `[n mod 2]` if `p = 2`
/// - `[0]` if `n ≡ 0`
/// - `[r, p - r]` otherwise, with `r ≠ p - r`
///
/// # Implementation details
///
/// When `p ≡ 3 (mod 4)` the root is given in closed form by
/// `n^((p+1)/4)`. Otherwise the general Tonelli–Shanks loop is used.
pub fn mod_sqrt(n: i64, p: i64) -> Vec<i64> {
    let n = reduce(n, p);

    if p == 2 {
        return vec![n];
    }

    if n == 0 {
        return vec![0];
    }

    if !is_quadratic_residue(n, p) {
        return Vec::new();
    }

    let root = if p % 4 == 3 {
        Some(mod_pow(n, ((p + 1) / 4) as u64, p))
    } else {
        tonelli_shanks(n, p)
    };

    match root {
        Some(r) => vec![r, p - r],
        None => Vec::new(),
    }
}

/// General Tonelli–Shanks for a non-zero quadratic residue `n` modulo an
/// odd prime `p`.
///
/// Writes `p - 1 = s·2^e` with `s` odd, picks a non-residue `q`, and
/// maintains the invariant `x² ≡ n·b (mod p)` while driving the order of
/// `b` down to one.
fn tonelli_shanks(n: i64, p: i64) -> Option<i64> {
    let mut s = p - 1;
    let mut e = 0u32;
    while s % 2 == 0 {
        s /= 2;
        e += 1;
    }

    let mut q = 2;
    while is_quadratic_residue(q, p) {
        q += 1;
    }

    let mut x = mod_pow(n, ((s + 1) / 2) as u64, p);
    let mut b = mod_pow(n, s as u64, p);
    let mut g = mod_pow(q, s as u64, p);
    let mut r = e;

    loop {
        // Least m such that b^(2^m) = 1.
        let mut t = b;
        let mut m = 0;
        while t != 1 {
            t = mul_mod(t, t, p);
            m += 1;

            if m == r {
                return None;
            }
        }

        if m == 0 {
            return Some(x);
        }

        let gs = mod_pow(g, 1u64 << (r - m - 1), p);

        g = mul_mod(gs, gs, p);
        x = mul_mod(x, gs, p);
        b = mul_mod(b, g, p);
        r = m;
    }
}

/// Primality test by trial division.
///
/// Adequate for the small moduli accepted by curve parameter validation.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    if n % 2 == 0 {
        return n == 2;
    }

    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }

    true
}
