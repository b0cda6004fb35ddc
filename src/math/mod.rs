//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical core of quadratic solving:
//! - Discriminant evaluation (b² − 4ac)
//! - Tolerance-based classification of the discriminant's sign
//!
//! These are reusable mathematical building blocks with no orchestration logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Discriminant evaluation and sign classification.
pub mod discriminant;
