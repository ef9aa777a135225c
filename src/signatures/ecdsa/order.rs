//! Order of the base point.

use tracing::warn;

use crate::curve::Domain;
use crate::error::{CurveError, Result};

/// Returns the order of the generator of `domain`.
///
/// If the stated order `n` annihilates the generator (`n·G = ∞`) it is
/// returned as is. Otherwise the true order is recovered by adding `G` to
/// itself until the point at infinity is reached, within the Hasse bound
///
/// ```text
/// p + 2·⌈√p⌉ + 10
/// ```
///
/// additions. This compensates for misconfigured parameters instead of
/// signing with an order the generator does not have.
///
/// # Errors
///
/// Returns [`CurveError::OrderNotFound`] if infinity is not reached within
/// the bound.
pub fn order(domain: &Domain) -> Result<u64> {
    let stated = domain.order();
    let g = domain.generator();
    let curve = domain.curve();

    if curve.scalar_mul(stated, g)?.is_infinity() {
        return Ok(stated);
    }

    let bound = search_bound(domain.modulus());
    warn!(
        stated,
        bound, "stated order does not annihilate the generator, recovering it"
    );

    let mut acc = *g;
    let mut count = 1u64;

    while count <= bound {
        if acc.is_infinity() {
            return Ok(count);
        }

        acc = curve.add(&acc, g)?;
        count += 1;
    }

    Err(CurveError::OrderNotFound { bound })
}

fn search_bound(p: i64) -> u64 {
    let p = p as u64;

    let mut root = (p as f64).sqrt() as u64;
    while root * root < p {
        root += 1;
    }

    p + 2 * root + 10
}
