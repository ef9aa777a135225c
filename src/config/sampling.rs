//! Resource limits for point enumeration.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, Result};

/// Bounds on how many x-coordinates point enumeration scans.
///
/// Prime-field enumeration is exhaustive up to `max_field_columns`
/// abscissae and evenly strided above it. Real-mode enumeration samples
/// `[real_start, real_end]` at `real_step`, widening the step so that at
/// most `max_real_samples` abscissae are scanned. Its result is an
/// approximation of the continuous curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingLimits {
    /// Largest number of field abscissae scanned.
    pub max_field_columns: u64,
    /// Largest number of real abscissae scanned.
    pub max_real_samples: u64,
    /// Start of the real sampling interval.
    pub real_start: f64,
    /// End of the real sampling interval (inclusive).
    pub real_end: f64,
    /// Distance between consecutive real samples.
    pub real_step: f64,
}

impl Default for SamplingLimits {
    /// 4096 field columns; at most 4096 real samples on `[-10, 10]`
    /// every `0.05`.
    fn default() -> Self {
        Self {
            max_field_columns: 4096,
            max_real_samples: 4096,
            real_start: -10.0,
            real_end: 10.0,
            real_step: 0.05,
        }
    }
}

impl SamplingLimits {
    /// Sets the maximum number of field abscissae.
    pub fn with_max_field_columns(mut self, columns: u64) -> Self {
        self.max_field_columns = columns;
        self
    }

    /// Sets the maximum number of real abscissae.
    pub fn with_max_real_samples(mut self, samples: u64) -> Self {
        self.max_real_samples = samples;
        self
    }

    /// Sets the real sampling interval and step.
    pub fn with_real_range(mut self, start: f64, end: f64, step: f64) -> Self {
        self.real_start = start;
        self.real_end = end;
        self.real_step = step;
        self
    }

    /// Checks that the limits describe a non-empty scan.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameters`] if no field column or real
    /// sample is allowed, the real step is not positive, or the interval is
    /// reversed or unbounded.
    pub fn validate(&self) -> Result<()> {
        if self.max_field_columns == 0 {
            return Err(CurveError::InvalidParameters(
                "max_field_columns must be positive".into(),
            ));
        }

        if self.max_real_samples == 0 {
            return Err(CurveError::InvalidParameters(
                "max_real_samples must be positive".into(),
            ));
        }

        if !self.real_step.is_finite() || self.real_step <= 0.0 {
            return Err(CurveError::InvalidParameters(format!(
                "real_step must be positive, got {}",
                self.real_step
            )));
        }

        if !self.real_start.is_finite() || !self.real_end.is_finite() {
            return Err(CurveError::InvalidParameters(format!(
                "real interval [{}, {}] is not finite",
                self.real_start, self.real_end
            )));
        }

        if !(self.real_end - self.real_start).is_finite() || self.real_end < self.real_start {
            return Err(CurveError::InvalidParameters(format!(
                "real interval [{}, {}] is reversed or too wide",
                self.real_start, self.real_end
            )));
        }

        Ok(())
    }
}
