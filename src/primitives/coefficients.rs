//! Coefficient triple for a quadratic polynomial.
//!
//! ## Purpose
//!
//! This module provides the `Coefficients` value type representing
//! ax² + bx + c, together with evaluation of the polynomial at real and
//! complex points. Evaluation exists so callers (and tests) can verify
//! returned roots by substitution.
//!
//! ## Design notes
//!
//! * **Value semantics**: `Copy` type, stack-local, no ownership concerns.
//! * **Horner form**: Real evaluation uses Horner's scheme, (a·x + b)·x + c.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The triple is immutable after construction.
//! * No constraint on `a` is enforced here; degenerate input handling is the
//!   solver's responsibility.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness (see the engine validator).
//! * This module does not compute roots or the discriminant.

// External dependencies
use num_traits::Float;

// ============================================================================
// Coefficients
// ============================================================================

/// Ordered coefficient triple (a, b, c) representing ax² + bx + c.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<T> {
    /// Quadratic coefficient (must be nonzero for the equation to be quadratic).
    pub a: T,

    /// Linear coefficient.
    pub b: T,

    /// Constant term.
    pub c: T,
}

impl<T: Float> Coefficients<T> {
    /// Create a coefficient triple from its parts.
    #[inline]
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate the polynomial at a real point using Horner's scheme.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        (self.a * x + self.b) * x + self.c
    }

    /// Evaluate the polynomial at a complex point re + i·im.
    ///
    /// Returns the real and imaginary parts of a·z² + b·z + c. Used to
    /// verify conjugate-pair roots by substitution:
    ///
    /// ```text
    /// z² = (re² - im²) + i·(2·re·im)
    /// ```
    pub fn evaluate_complex(&self, re: T, im: T) -> (T, T) {
        let sq_re = re * re - im * im;
        let sq_im = (re + re) * im;

        let out_re = self.a * sq_re + self.b * re + self.c;
        let out_im = self.a * sq_im + self.b * im;

        (out_re, out_im)
    }
}

impl<T: Float> From<[T; 3]> for Coefficients<T> {
    /// Convert from the positional `[a, b, c]` layout.
    #[inline]
    fn from(coeffs: [T; 3]) -> Self {
        Self::new(coeffs[0], coeffs[1], coeffs[2])
    }
}
