//! # quadroots — Closed-Form Quadratic Equation Solving for Rust
//!
//! Solve ax² + bx + c = 0 in closed form, with numerically-tolerant
//! classification of the discriminant into the three root regimes:
//! two distinct real roots, one repeated real root, or a
//! complex-conjugate pair.
//!
//! ## Quick Start
//!
//! ```rust
//! use quadroots::prelude::*;
//!
//! // Build the solver
//! let solver = Quadratic::new()
//!     .zero_tolerance(1e-6)       // Discriminant classification threshold
//!     .degenerate_policy(Reject)  // Error out when a == 0
//!     .build()?;
//!
//! // x^2 - 2x - 3 = 0 has roots 3 and -1
//! let result = solver.solve(1.0, -2.0, -3.0)?;
//!
//! match result.roots() {
//!     Roots::RealDistinct { first, second } => {
//!         assert_eq!(*first, 3.0);
//!         assert_eq!(*second, -1.0);
//!     }
//!     _ => unreachable!(),
//! }
//!
//! println!("{}", result);
//! # Result::<(), QuadraticError>::Ok(())
//! ```
//!
//! ```text
//! Quadratic: 1x^2 + -2x + -3 = 0
//!   Discriminant:   16
//!   Classification: RealDistinct
//!
//! Roots:
//!   x1 = 3
//!   x2 = -1
//! ```
//!
//! ## Complex roots
//!
//! A negative discriminant yields a conjugate pair r ± i·w, carried as a
//! dedicated variant rather than packed into positional slots:
//!
//! ```rust
//! use quadroots::prelude::*;
//!
//! let solver = Quadratic::new().build()?;
//!
//! // x^2 + 2x + 3 = 0 has roots -1 ± i*sqrt(2)
//! let result = solver.solve(1.0f64, 2.0, 3.0)?;
//! assert_eq!(result.classification(), RootClassification::ComplexConjugate);
//!
//! if let Roots::ComplexConjugate { re, im } = result.roots() {
//!     assert!((re + 1.0).abs() < 1e-12);
//!     assert!((im - 2.0_f64.sqrt()).abs() < 1e-12);
//! }
//! # Result::<(), QuadraticError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `solve` returns `Result<QuadraticResult<T>, QuadraticError>`.
//!
//! - **`Ok(QuadraticResult<T>)`**: the discriminant, classification, and roots.
//! - **`Err(QuadraticError)`**: non-finite coefficients, a degenerate leading
//!   coefficient under the `Reject` policy, or invalid configuration.
//!
//! The `?` operator is idiomatic, but explicit handling also works:
//!
//! ```rust
//! use quadroots::prelude::*;
//!
//! let solver = Quadratic::new().build()?;
//!
//! match solver.solve(0.0, 2.0, 1.0) {
//!     Ok(result) => println!("{}", result),
//!     Err(e) => eprintln!("Solving failed: {}", e),
//! }
//! # Result::<(), QuadraticError>::Ok(())
//! ```
//!
//! ## Flat compatibility interface
//!
//! The positional interface of the original C library is preserved for
//! callers that want the raw (code, slots) shape:
//!
//! ```rust
//! use quadroots::prelude::*;
//!
//! let (code, roots) = solve_quadratic_eq(&[1.0, -2.0, -3.0]);
//! assert_eq!(code, 0);
//! assert_eq!(roots[0], 3.0);
//! assert_eq!(roots[1], -1.0);
//! ```
//!
//! Note that the flat interface does not validate its input: a = 0
//! propagates IEEE-754 infinities/NaNs exactly as the original did.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! quadroots = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` coefficients to reduce footprint where precision allows.
//!
//! ## Numerical notes
//!
//! * The discriminant b² − 4ac is computed in plain floating point; the
//!   usual cancellation error when b² ≈ 4ac is accepted by design.
//! * Root formulas are the unmodified closed forms, not the
//!   numerically-stabilized variants.
//! * Classification uses a fixed absolute tolerance (default 1e-6), not a
//!   threshold scaled to coefficient magnitude.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - data structures and shared error types.
mod primitives;

// Layer 2: Math - discriminant evaluation and classification.
mod math;

// Layer 3: Algorithms - closed-form root formulas.
mod algorithms;

// Layer 4: Engine - solver orchestration, validation, and output types.
mod engine;

// High-level fluent API for quadratic solving.
mod api;

// Standard quadroots prelude.
pub mod prelude {
    pub use crate::api::{
        solve_quadratic_eq, Coefficients,
        DegeneratePolicy::{self, Propagate, Reject},
        QuadraticBuilder as Quadratic, QuadraticError, QuadraticResult, QuadraticSolver,
        RootClassification, Roots, DEFAULT_ZERO_TOLERANCE,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
