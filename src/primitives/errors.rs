//! Error types for quadratic solving operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring or
//! running the solver, covering input validation and parameter constraints.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending coefficient).
//! * **Deferred**: Builder errors are caught during configuration and reported at build time.
//! * **No-std**: Variants avoid heap allocation so the type works without `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Non-finite coefficients, degenerate leading coefficient.
//! 2. **Parameter validation**: Invalid classification tolerance.
//! 3. **Builder constraints**: Parameters set more than once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors are reported as `f64` regardless of the solver's float type.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for quadratic solving operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticError {
    /// A coefficient is NaN or infinite.
    NonFiniteCoefficient {
        /// Which coefficient ("a", "b", or "c").
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The leading coefficient is zero, so the equation is not quadratic.
    ///
    /// Returned only under [`DegeneratePolicy::Reject`]; the `Propagate`
    /// policy lets IEEE-754 division by zero flow through instead.
    ///
    /// [`DegeneratePolicy::Reject`]: crate::prelude::DegeneratePolicy
    DegenerateLeadingCoefficient,

    /// Classification tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for QuadraticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NonFiniteCoefficient { name, value } => {
                write!(f, "Non-finite coefficient: {name}={value}")
            }
            Self::DegenerateLeadingCoefficient => {
                write!(
                    f,
                    "Degenerate equation: leading coefficient a is zero (not a quadratic)"
                )
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for QuadraticError {}
