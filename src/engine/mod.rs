//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the solving process by coordinating between
//! primitives (coefficients, errors), math (discriminant classification),
//! and algorithms (root formulas). It owns validation and the output types.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Configured solver and solve orchestration.
pub mod solver;

/// Validation utilities.
pub mod validator;

/// Output types for solving operations.
pub mod output;
