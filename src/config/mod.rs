//! Configuration.
//!
//! This module holds the caller-facing description of a curve and the
//! resource policy applied when enumerating its points.
//!
//! - [`CurveParameters`]
//!   Coefficients, modulus, base point, stated order and arithmetic mode.
//!   Parameters can be built from [`Default`] with `with_*` methods or
//!   loaded from JSON, and are validated before any curve or domain is
//!   derived from them.
//!
//! - [`SamplingLimits`]
//!   Bounds on the number of abscissae scanned by point enumeration.
//!
//! Both types derive `serde` traits so that the surrounding application
//! can persist or transmit them unchanged.

mod params;
mod sampling;

pub use params::{Arithmetic, CurveParameters};
pub use sampling::SamplingLimits;
