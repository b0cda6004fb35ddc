//! Input validation for solver configuration and coefficients.
//!
//! ## Purpose
//!
//! This module provides validation functions for solver configuration
//! parameters and input coefficients. It checks finiteness, tolerance
//! bounds, and degenerate input per the configured policy.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Finite Checks**: Coefficients must be finite (no NaN/Inf).
//! * **Degenerate Input**: a = 0 is rejected or allowed per [`DegeneratePolicy`].
//! * **Parameter Bounds**: Tolerance must be positive and finite.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct invalid inputs.
//! * This module does not perform the root computation itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::formulas::DegeneratePolicy;
use crate::primitives::coefficients::Coefficients;
use crate::primitives::errors::QuadraticError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for solver configuration and input coefficients.
///
/// Provides static methods returning `Result<(), QuadraticError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that all coefficients are finite.
    pub fn validate_coefficients<T: Float>(
        coeffs: &Coefficients<T>,
    ) -> Result<(), QuadraticError> {
        for (name, value) in [("a", coeffs.a), ("b", coeffs.b), ("c", coeffs.c)] {
            if !value.is_finite() {
                return Err(QuadraticError::NonFiniteCoefficient {
                    name,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    /// Validate the leading coefficient against the degenerate-input policy.
    ///
    /// Under `Propagate` this always succeeds; a = 0 then flows through the
    /// formulas as IEEE division by zero.
    pub fn validate_leading_coefficient<T: Float>(
        a: T,
        policy: DegeneratePolicy,
    ) -> Result<(), QuadraticError> {
        if policy == DegeneratePolicy::Reject && a == T::zero() {
            return Err(QuadraticError::DegenerateLeadingCoefficient);
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the discriminant classification tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), QuadraticError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(QuadraticError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), QuadraticError> {
        if let Some(param) = duplicate_param {
            return Err(QuadraticError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
