//! Configured solver and solve orchestration.
//!
//! ## Purpose
//!
//! This module provides the execution path for a solve: validate the
//! coefficients, classify the discriminant, evaluate the matching closed
//! form, and package the result.
//!
//! ## Design notes
//!
//! * **Pure**: A solve is a single-shot, side-effect-free computation over
//!   stack-local values; the solver holds configuration only and is safe to
//!   share across threads.
//! * **Delegation**: Formulas live in the algorithms layer, classification
//!   in the math layer; this module only sequences them.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Solve flow**: validate → discriminant → classify → formula → result.
//! * **Degenerate policy**: a = 0 is rejected or propagated per configuration.
//!
//! ## Invariants
//!
//! * The returned `Roots` variant always matches the discriminant class
//!   under the configured tolerance.
//! * Configuration is validated at build time; `solve` only validates data.
//!
//! ## Non-goals
//!
//! * This module does not expose the builder API (see the api layer).
//! * This module does not handle batches of equations.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::formulas::{
    conjugate_pair, distinct_real_roots, repeated_real_root, DegeneratePolicy,
};
use crate::engine::output::{QuadraticResult, Roots};
use crate::engine::validator::Validator;
use crate::math::discriminant::{discriminant, DiscriminantClass};
use crate::primitives::coefficients::Coefficients;
use crate::primitives::errors::QuadraticError;

// ============================================================================
// Quadratic Solver
// ============================================================================

/// Configured quadratic solver.
///
/// Construct via [`QuadraticBuilder::build`], which validates the
/// configuration.
///
/// [`QuadraticBuilder::build`]: crate::prelude::Quadratic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticSolver<T> {
    /// Absolute tolerance for discriminant classification.
    pub(crate) zero_tolerance: T,

    /// Policy for degenerate (a = 0) input.
    pub(crate) degenerate_policy: DegeneratePolicy,
}

impl<T: Float> QuadraticSolver<T> {
    /// Get the configured classification tolerance.
    #[inline]
    pub fn zero_tolerance(&self) -> T {
        self.zero_tolerance
    }

    /// Get the configured degenerate-input policy.
    #[inline]
    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate_policy
    }

    // ========================================================================
    // Solving
    // ========================================================================

    /// Solve ax² + bx + c = 0.
    pub fn solve(&self, a: T, b: T, c: T) -> Result<QuadraticResult<T>, QuadraticError> {
        self.solve_coefficients(Coefficients::new(a, b, c))
    }

    /// Solve for a prepared coefficient triple.
    pub fn solve_coefficients(
        &self,
        coeffs: Coefficients<T>,
    ) -> Result<QuadraticResult<T>, QuadraticError> {
        Validator::validate_coefficients(&coeffs)?;
        Validator::validate_leading_coefficient(coeffs.a, self.degenerate_policy)?;

        let d = discriminant(&coeffs);
        let roots = roots_for(&coeffs, d, self.zero_tolerance);

        Ok(QuadraticResult {
            coefficients: coeffs,
            discriminant: d,
            zero_tolerance: self.zero_tolerance,
            roots,
        })
    }
}

// ============================================================================
// Root Selection
// ============================================================================

/// Classify the discriminant and evaluate the matching closed form.
pub(crate) fn roots_for<T: Float>(coeffs: &Coefficients<T>, d: T, zero_tolerance: T) -> Roots<T> {
    match DiscriminantClass::classify(d, zero_tolerance) {
        DiscriminantClass::Positive => {
            let (first, second) = distinct_real_roots(coeffs, d);
            Roots::RealDistinct { first, second }
        }
        DiscriminantClass::Zero => Roots::RealRepeated {
            root: repeated_real_root(coeffs),
        },
        DiscriminantClass::Negative => {
            let (re, im) = conjugate_pair(coeffs, d);
            Roots::ComplexConjugate { re, im }
        }
    }
}
