//! Error types shared by every module of the crate.
//!
//! Only genuinely invalid algebraic preconditions surface as errors.
//! Soft failures stay in-band: a non-residue yields an empty root set,
//! and a malformed or forged signature makes verification return `false`.

use thiserror::Error;

/// Result type for curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;

/// Errors that can occur during curve arithmetic and protocol operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A value lies outside the domain of the active arithmetic, e.g. a
    /// real-mode division by zero or a point that is not on the curve.
    #[error("domain error: {0}")]
    Domain(String),

    /// The value shares a common factor with the modulus.
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse {
        /// Value that was asked to be inverted.
        value: i64,
        /// Modulus of the inversion.
        modulus: i64,
    },

    /// Curve parameters failed validation.
    #[error("invalid curve parameters: {0}")]
    InvalidParameters(String),

    /// The private scalar is zero modulo the group order.
    #[error("private key must be a non-zero scalar modulo the group order")]
    InvalidPrivateKey,

    /// The base point did not return to infinity within the search bound.
    #[error("order of the base point not found within {bound} additions")]
    OrderNotFound {
        /// Number of additions attempted.
        bound: u64,
    },

    /// Every signing attempt produced a degenerate signature component.
    #[error("signing failed after {attempts} attempts")]
    SigningExhausted {
        /// Number of nonces tried.
        attempts: usize,
    },

    /// No usable private scalar was drawn.
    #[error("key generation failed after {attempts} attempts")]
    KeyGenerationExhausted {
        /// Number of scalars drawn.
        attempts: usize,
    },

    /// Key agreement produced the point at infinity.
    #[error("shared secret is the point at infinity")]
    DegenerateSharedSecret,

    /// The operation is only defined for the given arithmetic mode.
    #[error("operation requires {0} arithmetic")]
    UnsupportedMode(&'static str),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
