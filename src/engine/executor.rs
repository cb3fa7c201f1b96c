//! Execution engine for trend-fitting operations.
//!
//! ## Purpose
//!
//! This module provides the executor that orchestrates a fit: it validates
//! the inputs, conditions the data through the curve-family transform,
//! accumulates the regression sums in a single pass, solves the closed-form
//! least-squares system, derives the diagnostics, and assembles the
//! immutable result.
//!
//! ## Design notes
//!
//! * **Pure**: Each run is a pure function of its inputs with no shared
//!   mutable state; concurrent use from multiple threads needs no
//!   synchronization.
//! * **Bounded**: One linear pass over the data plus constant-time solving;
//!   no iterative convergence loop.
//! * **Generic over `Float` types** to support f32 and f64.
//!
//! ## Invariants
//!
//! * Inputs reaching the transform are finite, equal-length, and within the
//!   family's domain.
//! * The result is constructed once and never mutated.
//!
//! ## Non-goals
//!
//! * This module does not flatten or filter caller inputs (dispatch-layer
//!   responsibility, outside the engine).
//! * This module does not provide public-facing result formatting.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::solver::{regression_sums, LeastSquaresFit, OlsSolver};
use crate::engine::output::TrendResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::transform::CurveFamily;
use crate::primitives::errors::TrendError;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a single fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitConfig {
    /// Curve family to fit.
    pub family: CurveFamily,

    /// Constrain the intercept to zero (regression through the origin).
    pub through_origin: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless executor for trend fits.
pub struct TrendExecutor;

impl TrendExecutor {
    /// Run a fit with the given configuration.
    ///
    /// # Errors
    ///
    /// * Input validation failures (empty, mismatched, too few, non-finite).
    /// * [`TrendError::NonPositiveValue`] for the exponential family's
    ///   domain violation.
    /// * [`TrendError::ZeroXVariance`] when the system is unsolvable.
    pub fn run_with_config<T: Float + OlsSolver>(
        x: &[T],
        y: &[T],
        config: FitConfig,
    ) -> Result<TrendResult<T>, TrendError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_family_domain(config.family, y)?;

        let series = config.family.linearize(x, y);
        let sums = regression_sums(series.x(), series.y());

        let fit = LeastSquaresFit::solve(&sums, config.through_origin)?;
        let diagnostics = Diagnostics::compute(&sums, &fit, config.through_origin);

        Ok(TrendResult {
            family: config.family,
            through_origin: config.through_origin,
            n: sums.n,
            slope: fit.slope,
            intercept: fit.intercept,
            diagnostics,
        })
    }
}
