//! Closed-form root formulas for the quadratic equation.
//!
//! ## Purpose
//!
//! This module evaluates the classical quadratic formula for each
//! discriminant regime, plus the policy governing degenerate (a = 0) input.
//!
//! ## Design notes
//!
//! * **Unstabilized**: Both distinct roots come from the unmodified formula
//!   (−b ± √d) / (2a). The numerically-stabilized variant (computing one
//!   root and deriving the other via c / (a·x₁)) is deliberately not used.
//! * **Magnitude under the radical**: In the complex regime the imaginary
//!   magnitude is √|d| / (2a); the radical is never evaluated on a
//!   negative argument.
//! * **No guards**: These functions assume classification has already
//!   happened and do not re-check the discriminant's sign or `a`.
//!
//! ## Invariants
//!
//! * `distinct_real_roots` returns (larger-formula root, smaller-formula root)
//!   in the order (−b + √d, −b − √d) over 2a; for a > 0 the first is the
//!   greater root.
//! * `conjugate_pair` returns the pair as (real part, imaginary magnitude);
//!   the roots are re ± i·im.
//!
//! ## Non-goals
//!
//! * This module does not classify the discriminant.
//! * This module does not validate input.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::coefficients::Coefficients;

// ============================================================================
// Degenerate-Input Policy
// ============================================================================

/// Policy for handling a degenerate leading coefficient (a = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Return [`QuadraticError::DegenerateLeadingCoefficient`] before any
    /// formula is evaluated.
    ///
    /// This is the default.
    ///
    /// [`QuadraticError::DegenerateLeadingCoefficient`]: crate::prelude::QuadraticError
    #[default]
    Reject,

    /// Evaluate the formulas anyway and let IEEE-754 division by zero
    /// produce infinities or NaNs, matching the original library.
    Propagate,
}

impl DegeneratePolicy {
    /// Get the name of the policy.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Reject => "Reject",
            Self::Propagate => "Propagate",
        }
    }
}

// ============================================================================
// Root Formulas
// ============================================================================

/// Two distinct real roots for d > 0: (−b ± √d) / (2a).
#[inline]
pub fn distinct_real_roots<T: Float>(coeffs: &Coefficients<T>, d: T) -> (T, T) {
    let two_a = two_a(coeffs);
    let sqrt_d = d.sqrt();

    let first = (-coeffs.b + sqrt_d) / two_a;
    let second = (-coeffs.b - sqrt_d) / two_a;

    (first, second)
}

/// The repeated real root for d ≈ 0: −b / (2a).
#[inline]
pub fn repeated_real_root<T: Float>(coeffs: &Coefficients<T>) -> T {
    -coeffs.b / two_a(coeffs)
}

/// The conjugate pair for d < 0, as (real part, imaginary magnitude).
///
/// The roots are r ± i·w with r = −b / (2a) and w = √|d| / (2a).
#[inline]
pub fn conjugate_pair<T: Float>(coeffs: &Coefficients<T>, d: T) -> (T, T) {
    let two_a = two_a(coeffs);

    let re = -coeffs.b / two_a;
    let im = d.abs().sqrt() / two_a;

    (re, im)
}

#[inline]
fn two_a<T: Float>(coeffs: &Coefficients<T>) -> T {
    coeffs.a + coeffs.a
}
