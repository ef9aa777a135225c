//! Curve point enumeration.
//!
//! Given an x-coordinate, this module returns the valid y-coordinates on
//! a curve, and it can list or count the full point set.
//!
//! Prime-field enumeration is exact: every `x` in `[0, p)` is scanned and
//! its square roots are extracted with Tonelli–Shanks. For large moduli
//! the scan is strided according to [`SamplingLimits`], which trades
//! completeness for bounded work. Real-mode enumeration samples a bounded
//! interval and is therefore approximate, not exhaustive.
//!
//! [`SamplingLimits`]: crate::config::SamplingLimits

mod core;

pub use self::core::{PointSet, all_points, count_points, enumerate_parameters, y_values_for_x};
