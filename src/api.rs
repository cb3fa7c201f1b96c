//! High-level API for trend fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the engine.
//! It implements a fluent builder pattern for configuring the curve family
//! and the intercept constraint, and a model type that runs the fit.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration errors are deferred and reported at `build()`.
//! * **Reusable**: A built [`TrendModel`] is immutable and may fit any number
//!   of datasets, concurrently if desired.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Trend::new()` → configuration methods →
//!   `.build()` → [`TrendModel::fit`].
//! * **Duplicate detection**: Setting the same parameter twice is rejected at
//!   `build()` rather than silently keeping the last value.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{FitConfig, TrendExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::solver::OlsSolver;
pub use crate::engine::output::TrendResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::transform::CurveFamily;
pub use crate::primitives::errors::TrendError;

// ============================================================================
// Trend Builder
// ============================================================================

/// Fluent builder for configuring a trend fit.
#[derive(Debug, Clone, Default)]
pub struct TrendBuilder {
    /// Curve family to fit.
    pub family: Option<CurveFamily>,

    /// Constrain the intercept to zero.
    pub through_origin: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl TrendBuilder {
    /// Create a new builder with default settings (linear, free intercept).
    pub fn new() -> Self {
        Self {
            family: None,
            through_origin: None,
            duplicate_param: None,
        }
    }

    /// Set the curve family.
    pub fn family(mut self, family: CurveFamily) -> Self {
        if self.family.is_some() {
            self.duplicate_param = Some("family");
        }
        self.family = Some(family);
        self
    }

    /// Constrain the fit through the origin (intercept forced to zero; the
    /// multiplicative constant forced to one for the exponential family).
    pub fn through_origin(mut self) -> Self {
        if self.through_origin.is_some() {
            self.duplicate_param = Some("through_origin");
        }
        self.through_origin = Some(true);
        self
    }

    /// Build the model.
    pub fn build(self) -> Result<TrendModel, TrendError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(TrendModel {
            config: FitConfig {
                family: self.family.unwrap_or_default(),
                through_origin: self.through_origin.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Trend Model
// ============================================================================

/// Configured trend-fitting model.
#[derive(Debug, Clone, Copy)]
pub struct TrendModel {
    config: FitConfig,
}

impl TrendModel {
    /// Fit the model to the provided paired data.
    ///
    /// Each call is a pure function of its inputs: identical inputs yield
    /// identical results, and independent calls may run concurrently.
    pub fn fit<T: Float + OlsSolver>(
        &self,
        x: &[T],
        y: &[T],
    ) -> Result<TrendResult<T>, TrendError> {
        TrendExecutor::run_with_config(x, y, self.config)
    }

    /// The configuration this model was built with.
    pub fn config(&self) -> FitConfig {
        self.config
    }
}
