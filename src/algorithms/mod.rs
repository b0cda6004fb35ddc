//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the closed-form root formulas for each discriminant
//! regime, plus the policy governing degenerate (a = 0) input.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Closed-form root formulas and degenerate-input policy.
pub mod formulas;
