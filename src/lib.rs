//! # trendfit — Least-Squares Trend Fitting for Rust
//!
//! A small, fast least-squares curve-fitting engine supporting **linear**
//! (`y = m·x + b`) and log-linearized **exponential** (`y = b·e^(m·x)`)
//! models, with a full battery of goodness-of-fit diagnostics: sums of
//! squares, R², correlation, standard errors, F-statistic, and residual
//! standard deviation.
//!
//! ## What does it do?
//!
//! Given paired numeric series (x, y), the engine fits the requested curve
//! family by ordinary least squares — optionally constrained through the
//! origin — and returns a single immutable [`prelude::TrendResult`] holding
//! the coefficients, every diagnostic, and a point-prediction function.
//! Fitting is a pure function of its inputs: one linear pass to accumulate
//! sums, a constant-time closed-form solve, no iteration, no shared state.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use trendfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.2, 3.9, 6.1, 8.0, 9.8];
//!
//! // Build the model
//! let model = Trend::new().build()?;
//!
//! // Fit the model to the data
//! let fit = model.fit(&x, &y)?;
//!
//! assert!(fit.diagnostics.r_squared > 0.99);
//! println!("{}", fit);
//! # Result::<(), TrendError>::Ok(())
//! ```
//!
//! ### Exponential Growth
//!
//! ```rust
//! use trendfit::prelude::*;
//!
//! let x: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0];
//! let y = vec![2.0, 4.0, 8.0, 16.0];
//!
//! // Fit y = b·e^(m·x) by regressing ln(y) on x
//! let model = Trend::new().family(Exponential).build()?;
//! let fit = model.fit(&x, &y)?;
//!
//! // Predictions are back-transformed to the original scale
//! let next = fit.predict(4.0);
//! assert!((next - 32.0).abs() < 1e-9);
//! # Result::<(), TrendError>::Ok(())
//! ```
//!
//! ### Forcing the Intercept to Zero
//!
//! ```rust
//! use trendfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0];
//! let y = vec![2.0, 4.0, 6.0];
//!
//! let model = Trend::new().through_origin().build()?;
//! let fit = model.fit(&x, &y)?;
//!
//! assert_eq!(fit.intercept, 0.0);
//! # Result::<(), TrendError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! The `fit` method returns a `Result<TrendResult<T>, TrendError>`.
//!
//! - **`Ok(TrendResult<T>)`**: Coefficients, diagnostics, and prediction.
//! - **`Err(TrendError)`**: A typed failure (e.g., mismatched input
//!   lengths, non-positive y under the exponential family, zero x-variance).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use trendfit::prelude::*;
//! # let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! # let y = vec![2.2, 3.9, 6.1, 8.0, 9.8];
//!
//! let model = Trend::new().build()?;
//! let fit = model.fit(&x, &y)?;
//! # Result::<(), TrendError>::Ok(())
//! ```
//!
//! But you can also handle results explicitly:
//!
//! ```rust
//! use trendfit::prelude::*;
//! # let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! # let y = vec![2.2, 3.9, 6.1, 8.0, 9.8];
//!
//! let model = Trend::new().build()?;
//!
//! match model.fit(&x, &y) {
//!     Ok(fit) => {
//!         println!("slope = {}, intercept = {}", fit.slope, fit.intercept);
//!     }
//!     Err(e) => {
//!         eprintln!("Fitting failed: {}", e);
//!     }
//! }
//! # Result::<(), TrendError>::Ok(())
//! ```
//!
//! Floating-point boundary cases are **values**, not errors: a perfect fit
//! reports an infinite F-statistic, zero total variance reports R² = 1.0,
//! and statistics undefined at zero residual degrees of freedom (two-point
//! fits) are reported as `None`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! trendfit = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` inputs to reduce memory footprint; the engine allocates only
//! transient buffers sized to the input length.
//!
//! ## References
//!
//! - Draper, N. R. & Smith, H. (1998). "Applied Regression Analysis", 3rd ed.
//! - Eisenhauer, J. G. (2003). "Regression through the Origin"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types and data carriers.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - least-squares accumulation and solving.
mod algorithms;

// Layer 4: Evaluation - goodness-of-fit diagnostics.
mod evaluation;

// Layer 5: Engine - validation, orchestration, and output.
mod engine;

// High-level fluent API for trend fitting.
mod api;

// Standard trendfit prelude.
pub mod prelude {
    pub use crate::api::{
        CurveFamily,
        CurveFamily::{Exponential, Linear},
        Diagnostics, OlsSolver, TrendBuilder as Trend, TrendError, TrendModel, TrendResult,
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
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
