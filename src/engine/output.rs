//! Output types and result structures for quadratic solving.
//!
//! ## Purpose
//!
//! This module defines the three-way root classification, the `Roots` tagged
//! union carrying only the fields relevant to each case, and the
//! `QuadraticResult` struct that packages a complete solve.
//!
//! ## Design notes
//!
//! * **Tagged union**: `Roots` replaces the original flat 4-slot array whose
//!   positional meaning changed per branch; the legacy layout survives only
//!   behind [`Roots::to_slots`].
//! * **Three-way tag**: `RealDistinct` and `RealRepeated` are distinct
//!   variants; the original undifferentiated 0/1 wire code survives only
//!   behind [`RootClassification::code`].
//! * **Ergonomics**: `QuadraticResult` implements `Display` for
//!   human-readable output.
//!
//! ## Invariants
//!
//! * `ComplexConjugate` stores the pair as (re, im) with roots re ± i·im;
//!   both roots share the same real part by construction.
//! * `to_slots` reproduces the original positional layout exactly,
//!   including zero-filled unused slots.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::coefficients::Coefficients;

// ============================================================================
// Classification
// ============================================================================

/// Three-way classification of a quadratic's roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootClassification {
    /// Discriminant above tolerance: two distinct real roots.
    RealDistinct,

    /// Discriminant within tolerance of zero: one repeated real root.
    RealRepeated,

    /// Discriminant below negative tolerance: complex-conjugate pair.
    ComplexConjugate,
}

impl RootClassification {
    /// Get the name of the classification.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RealDistinct => "RealDistinct",
            Self::RealRepeated => "RealRepeated",
            Self::ComplexConjugate => "ComplexConjugate",
        }
    }

    /// Returns `true` for the real-valued cases.
    #[inline]
    pub const fn is_real(&self) -> bool {
        !matches!(self, Self::ComplexConjugate)
    }

    /// Legacy wire code: 0 for both real cases, 1 for the complex case.
    ///
    /// The original library did not distinguish distinct from repeated real
    /// roots in its return code; callers needing that distinction should
    /// match on the classification itself.
    #[inline]
    pub const fn code(&self) -> u8 {
        match self {
            Self::RealDistinct | Self::RealRepeated => 0,
            Self::ComplexConjugate => 1,
        }
    }
}

// ============================================================================
// Roots
// ============================================================================

/// Roots of a quadratic, carrying only the fields relevant to each case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots<T> {
    /// Two distinct real roots, in formula order (−b + √d then −b − √d, over 2a).
    RealDistinct {
        /// Root from the `+√d` branch.
        first: T,
        /// Root from the `−√d` branch.
        second: T,
    },

    /// One repeated real root.
    RealRepeated {
        /// The repeated root −b / (2a).
        root: T,
    },

    /// Complex-conjugate pair re ± i·im.
    ComplexConjugate {
        /// Shared real part of both roots.
        re: T,
        /// Imaginary magnitude of the first root; the second root's is negated.
        im: T,
    },
}

impl<T: Float> Roots<T> {
    /// Get the classification tag for these roots.
    #[inline]
    pub const fn classification(&self) -> RootClassification {
        match self {
            Self::RealDistinct { .. } => RootClassification::RealDistinct,
            Self::RealRepeated { .. } => RootClassification::RealRepeated,
            Self::ComplexConjugate { .. } => RootClassification::ComplexConjugate,
        }
    }

    /// Flatten into the legacy positional 4-slot layout.
    ///
    /// * Distinct real: `[x1, x2, 0, 0]`
    /// * Repeated real: `[x, x, 0, 0]`
    /// * Complex: `[re, im, re, -im]` for the pair re ± i·im
    pub fn to_slots(&self) -> [T; 4] {
        let zero = T::zero();
        match *self {
            Self::RealDistinct { first, second } => [first, second, zero, zero],
            Self::RealRepeated { root } => [root, root, zero, zero],
            Self::ComplexConjugate { re, im } => [re, im, re, -im],
        }
    }
}

// ============================================================================
// Result Structure
// ============================================================================

/// Complete output of a quadratic solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticResult<T> {
    /// The coefficients that were solved.
    pub coefficients: Coefficients<T>,

    /// The discriminant b² − 4ac.
    pub discriminant: T,

    /// The absolute tolerance used to classify the discriminant.
    pub zero_tolerance: T,

    /// The computed roots.
    pub roots: Roots<T>,
}

impl<T: Float> QuadraticResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Get the computed roots.
    #[inline]
    pub fn roots(&self) -> &Roots<T> {
        &self.roots
    }

    /// Get the root classification.
    #[inline]
    pub fn classification(&self) -> RootClassification {
        self.roots.classification()
    }

    /// Legacy wire code (0 = real, 1 = complex), per the original library.
    #[inline]
    pub fn result_code(&self) -> u8 {
        self.classification().code()
    }

    /// Largest residual magnitude over the returned roots.
    ///
    /// Substitutes each root back into ax² + bx + c and returns the largest
    /// absolute value (complex residuals by modulus). Near zero for
    /// well-conditioned inputs.
    pub fn max_residual(&self) -> T {
        match self.roots {
            Roots::RealDistinct { first, second } => {
                let r1 = self.coefficients.evaluate(first).abs();
                let r2 = self.coefficients.evaluate(second).abs();
                r1.max(r2)
            }
            Roots::RealRepeated { root } => self.coefficients.evaluate(root).abs(),
            Roots::ComplexConjugate { re, im } => {
                // Conjugate symmetry: both roots have the same residual modulus.
                let (res_re, res_im) = self.coefficients.evaluate_complex(re, im);
                (res_re * res_re + res_im * res_im).sqrt()
            }
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for QuadraticResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let c = &self.coefficients;
        writeln!(f, "Quadratic: {}x^2 + {}x + {} = 0", c.a, c.b, c.c)?;
        writeln!(f, "  Discriminant:   {}", self.discriminant)?;
        writeln!(f, "  Classification: {}", self.classification().name())?;
        writeln!(f)?;

        writeln!(f, "Roots:")?;
        match self.roots {
            Roots::RealDistinct { first, second } => {
                writeln!(f, "  x1 = {}", first)?;
                writeln!(f, "  x2 = {}", second)?;
            }
            Roots::RealRepeated { root } => {
                writeln!(f, "  x1 = x2 = {}", root)?;
            }
            Roots::ComplexConjugate { re, im } => {
                writeln!(f, "  x1 = {} + {}i", re, im)?;
                writeln!(f, "  x2 = {} - {}i", re, im)?;
            }
        }

        Ok(())
    }
}
