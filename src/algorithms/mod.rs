//! Layer 3: Algorithms
//!
//! This layer implements the core least-squares logic: single-pass sum
//! accumulation (scalar and SIMD-specialized) and the closed-form solve for
//! both the unconstrained and the through-origin model. It contains the
//! "business logic" of the fit but is orchestrated by the engine layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Least-squares accumulation and solving.
pub mod solver;
