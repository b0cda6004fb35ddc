//! High-level API for quadratic solving.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder pattern for configuring the solver, plus the flat
//! positional function preserved from the original C library.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Quadratic::new()` → setters → `.build()` →
//!   [`QuadraticSolver`] → `.solve(a, b, c)`.
//! * **Compatibility**: [`solve_quadratic_eq`] keeps the original
//!   (code, 4-slot array) surface with the original permissive semantics.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::solver::roots_for;
use crate::engine::validator::Validator;
use crate::math::discriminant::discriminant;

// Publicly re-exported types
pub use crate::algorithms::formulas::DegeneratePolicy;
pub use crate::engine::output::{QuadraticResult, RootClassification, Roots};
pub use crate::engine::solver::QuadraticSolver;
pub use crate::math::discriminant::DEFAULT_ZERO_TOLERANCE;
pub use crate::primitives::coefficients::Coefficients;
pub use crate::primitives::errors::QuadraticError;

// ============================================================================
// Quadratic Builder
// ============================================================================

/// Fluent builder for configuring a [`QuadraticSolver`].
#[derive(Debug, Clone, Copy)]
pub struct QuadraticBuilder<T> {
    /// Absolute tolerance for discriminant classification.
    pub zero_tolerance: Option<T>,

    /// Policy for degenerate (a = 0) input.
    pub degenerate_policy: Option<DegeneratePolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for QuadraticBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> QuadraticBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            zero_tolerance: None,
            degenerate_policy: None,
            duplicate_param: None,
        }
    }

    /// Set the absolute tolerance for discriminant classification.
    ///
    /// Defaults to [`DEFAULT_ZERO_TOLERANCE`] (1e-6).
    pub fn zero_tolerance(mut self, tolerance: T) -> Self {
        if self.zero_tolerance.is_some() {
            self.duplicate_param = Some("zero_tolerance");
        }
        self.zero_tolerance = Some(tolerance);
        self
    }

    /// Set the policy for degenerate (a = 0) input.
    ///
    /// Defaults to [`DegeneratePolicy::Reject`].
    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        if self.degenerate_policy.is_some() {
            self.duplicate_param = Some("degenerate_policy");
        }
        self.degenerate_policy = Some(policy);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the solver, validating the configuration.
    pub fn build(self) -> Result<QuadraticSolver<T>, QuadraticError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let zero_tolerance = match self.zero_tolerance {
            Some(tol) => tol,
            None => T::from(DEFAULT_ZERO_TOLERANCE).unwrap_or_else(T::epsilon),
        };

        // Validate tolerance
        Validator::validate_tolerance(zero_tolerance)?;

        Ok(QuadraticSolver {
            zero_tolerance,
            degenerate_policy: self.degenerate_policy.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Flat Compatibility Interface
// ============================================================================

/// Solve ax² + bx + c = 0 through the original positional interface.
///
/// Returns `(result_code, roots)` where `result_code` is 0 for the real
/// cases (distinct or repeated, undifferentiated) and 1 for the complex
/// case, and `roots` uses the original slot layout:
///
/// * Distinct real: `[x1, x2, 0, 0]`
/// * Repeated real: `[x, x, 0, 0]`
/// * Complex: `[re, im, re, -im]` for the pair re ± i·im
///
/// This function performs no validation: a = 0 produces IEEE-754
/// infinities or NaNs rather than an error, exactly as the original
/// library did. New callers should prefer the builder API, which returns
/// the three-way [`Roots`] classification and rejects degenerate input
/// by default.
pub fn solve_quadratic_eq<T: Float>(coeffs: &[T; 3]) -> (u8, [T; 4]) {
    let coeffs = Coefficients::from(*coeffs);
    let tol = T::from(DEFAULT_ZERO_TOLERANCE).unwrap_or_else(T::epsilon);

    let d = discriminant(&coeffs);
    let roots = roots_for(&coeffs, d, tol);

    (roots.classification().code(), roots.to_slots())
}
