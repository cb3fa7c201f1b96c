//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the fit by coordinating between the math layer
//! (transform, sums), the algorithms layer (solver), and the evaluation layer
//! (diagnostics). It validates inputs, runs the pipeline, and assembles the
//! immutable result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for trend fitting.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for trend-fitting operations.
pub mod output;
