#![cfg(feature = "dev")]
//! Tests for the coefficient primitive.
//!
//! These tests verify the `Coefficients` value type:
//! - Construction from parts and from the positional array layout
//! - Horner evaluation at real points
//! - Complex-point evaluation used for residual verification
//!
//! ## Test Organization
//!
//! 1. **Construction** - Constructors and conversions
//! 2. **Real Evaluation** - Horner scheme values
//! 3. **Complex Evaluation** - Real/imaginary residual parts

use approx::assert_relative_eq;

use quadroots::internals::primitives::coefficients::Coefficients;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test construction from parts and from the positional array.
#[test]
fn test_construction() {
    let from_parts = Coefficients::new(1.0, -2.0, -3.0);
    let from_array = Coefficients::from([1.0, -2.0, -3.0]);

    assert_eq!(from_parts, from_array);
    assert_eq!(from_parts.a, 1.0);
    assert_eq!(from_parts.b, -2.0);
    assert_eq!(from_parts.c, -3.0);
}

// ============================================================================
// Real Evaluation Tests
// ============================================================================

/// Test Horner evaluation at known points.
#[test]
fn test_evaluate_real_points() {
    // x^2 - 2x - 3
    let coeffs = Coefficients::new(1.0, -2.0, -3.0);

    assert_relative_eq!(coeffs.evaluate(0.0), -3.0);
    assert_relative_eq!(coeffs.evaluate(1.0), -4.0);
    assert_relative_eq!(coeffs.evaluate(3.0), 0.0);
    assert_relative_eq!(coeffs.evaluate(-1.0), 0.0);
}

/// Test evaluation with a non-unit leading coefficient.
#[test]
fn test_evaluate_scaled() {
    // 2x^2 + 3x - 9
    let coeffs = Coefficients::new(2.0, 3.0, -9.0);

    assert_relative_eq!(coeffs.evaluate(1.5), 0.0);
    assert_relative_eq!(coeffs.evaluate(-3.0), 0.0);
    assert_relative_eq!(coeffs.evaluate(0.0), -9.0);
}

// ============================================================================
// Complex Evaluation Tests
// ============================================================================

/// Test complex evaluation reduces to real evaluation on the real axis.
#[test]
fn test_evaluate_complex_real_axis() {
    let coeffs = Coefficients::new(1.0, -2.0, -3.0);

    let (re, im) = coeffs.evaluate_complex(3.0, 0.0);
    assert_relative_eq!(re, coeffs.evaluate(3.0));
    assert_relative_eq!(im, 0.0);
}

/// Test complex evaluation at a known complex root.
#[test]
fn test_evaluate_complex_at_root() {
    // x^2 + 2x + 3 has roots -1 ± i*sqrt(2)
    let coeffs = Coefficients::new(1.0, 2.0, 3.0);

    let (re, im) = coeffs.evaluate_complex(-1.0, 2.0_f64.sqrt());
    assert_relative_eq!(re, 0.0, epsilon = 1e-12);
    assert_relative_eq!(im, 0.0, epsilon = 1e-12);
}

/// Test complex evaluation at a non-root point.
#[test]
fn test_evaluate_complex_off_root() {
    // x^2 + 1 at z = i gives 0; at z = 2i gives -3
    let coeffs = Coefficients::new(1.0, 0.0, 1.0);

    let (re, im) = coeffs.evaluate_complex(0.0, 1.0);
    assert_relative_eq!(re, 0.0);
    assert_relative_eq!(im, 0.0);

    let (re, im) = coeffs.evaluate_complex(0.0, 2.0);
    assert_relative_eq!(re, -3.0);
    assert_relative_eq!(im, 0.0);
}
