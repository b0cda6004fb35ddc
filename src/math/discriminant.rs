//! Discriminant evaluation and sign classification.
//!
//! ## Purpose
//!
//! This module computes the discriminant d = b² − 4ac of a quadratic and
//! classifies its sign against an absolute tolerance. The classification
//! decides which closed-form root formula applies.
//!
//! ## Design notes
//!
//! * **Plain arithmetic**: d is computed in ordinary floating point, with no
//!   compensated summation. Cancellation error when b² ≈ 4ac is accepted.
//! * **Absolute tolerance**: The threshold is compared against d directly,
//!   not against a quantity scaled to coefficient magnitude.
//! * **Inclusive edges**: d exactly at ±tolerance classifies as
//!   Positive/Negative; only the open interval (−tol, +tol) is treated as zero.
//!
//! ## Key concepts
//!
//! * **Positive**: two distinct real roots.
//! * **Zero**: one repeated real root (within tolerance of d = 0).
//! * **Negative**: a complex-conjugate pair.
//!
//! ## Invariants
//!
//! * `classify` is total for finite d and any positive tolerance.
//! * Exactly one class is returned for every input.
//!
//! ## Non-goals
//!
//! * This module does not evaluate root formulas.
//! * This module does not validate the tolerance (see the engine validator).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::coefficients::Coefficients;

// ============================================================================
// Constants
// ============================================================================

/// Default absolute threshold below which the discriminant is treated as zero.
///
/// Absorbs floating-point rounding around d = 0 so near-repeated roots are
/// reported as repeated rather than as a spurious distinct or complex pair.
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1.0e-6;

// ============================================================================
// Discriminant
// ============================================================================

/// Compute the discriminant d = b² − 4ac.
#[inline]
pub fn discriminant<T: Float>(coeffs: &Coefficients<T>) -> T {
    let four = T::from(4.0).unwrap_or_else(|| T::one() + T::one() + T::one() + T::one());
    coeffs.b * coeffs.b - four * coeffs.a * coeffs.c
}

// ============================================================================
// Classification
// ============================================================================

/// Sign class of the discriminant under an absolute tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscriminantClass {
    /// d ≥ +tolerance: two distinct real roots.
    Positive,

    /// |d| < tolerance: one repeated real root.
    Zero,

    /// d ≤ −tolerance: complex-conjugate pair.
    Negative,
}

impl DiscriminantClass {
    /// Classify a discriminant value against an absolute tolerance.
    ///
    /// The edges are inclusive: d = +tolerance is `Positive` and
    /// d = −tolerance is `Negative`.
    #[inline]
    pub fn classify<T: Float>(d: T, zero_tolerance: T) -> Self {
        if d >= zero_tolerance {
            Self::Positive
        } else if d <= -zero_tolerance {
            Self::Negative
        } else {
            Self::Zero
        }
    }

    /// Get the name of the class.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Zero => "Zero",
            Self::Negative => "Negative",
        }
    }
}
