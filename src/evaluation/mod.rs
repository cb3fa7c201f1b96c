//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates high-level statistical metrics from the fitted
//! coefficients and the shared regression sums:
//! - Variance decomposition (regression / residual / total sums of squares)
//! - Goodness-of-fit metrics (R², correlation, F-statistic)
//! - Coefficient standard errors and residual standard deviation
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Goodness-of-fit diagnostics.
pub mod diagnostics;
