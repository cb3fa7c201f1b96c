//! Regression sums and centered moments.
//!
//! ## Purpose
//!
//! This module defines [`RegressionSums`], the derived scalars shared by the
//! least-squares solver and the diagnostics calculator: raw sums (Σx, Σy,
//! Σx², Σy², Σxy), means, and mean-centered moments (Sxx, Syy, Sxy).
//!
//! ## Design notes
//!
//! * **Single source**: Computed once per fit and shared read-only downstream.
//! * **Raw and centered**: Raw sums feed the through-origin branch; centered
//!   moments feed the unconstrained branch. Both derive from one pass.
//! * **Clamping**: Sxx and Syy are sums of squares; floating-point
//!   cancellation can drive the derived form slightly negative, so both are
//!   clamped to zero.
//!
//! ## Invariants
//!
//! * `sxx >= 0`, `syy >= 0`, `sum_xx >= 0`, `sum_yy >= 0`.
//! * All fields describe the same accumulation pass; the struct is immutable.
//!
//! ## Non-goals
//!
//! * This module does not accumulate from slices (the solver layer owns the
//!   accumulation loops, including the SIMD-specialized ones).

// External dependencies
use num_traits::Float;

// ============================================================================
// Regression Sums
// ============================================================================

/// Sums and moments of a paired series, computed in a single pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionSums<T> {
    /// Number of (x, y) pairs.
    pub n: usize,

    /// Σx.
    pub sum_x: T,

    /// Σy.
    pub sum_y: T,

    /// Σx² (raw, uncentered).
    pub sum_xx: T,

    /// Σy² (raw, uncentered).
    pub sum_yy: T,

    /// Σx·y (raw, uncentered).
    pub sum_xy: T,

    /// Mean of x.
    pub mean_x: T,

    /// Mean of y.
    pub mean_y: T,

    /// Sxx = Σ(x − mean x)².
    pub sxx: T,

    /// Syy = Σ(y − mean y)².
    pub syy: T,

    /// Sxy = Σ(x − mean x)(y − mean y).
    pub sxy: T,
}

impl<T: Float> RegressionSums<T> {
    /// Derive means and centered moments from raw accumulated sums.
    pub fn from_raw(n: usize, sum_x: T, sum_y: T, sum_xx: T, sum_yy: T, sum_xy: T) -> Self {
        let n_t = T::from(n).unwrap_or(T::one());

        let mean_x = sum_x / n_t;
        let mean_y = sum_y / n_t;

        let sxx = (sum_xx - sum_x * sum_x / n_t).max(T::zero());
        let syy = (sum_yy - sum_y * sum_y / n_t).max(T::zero());
        let sxy = sum_xy - sum_x * sum_y / n_t;

        Self {
            n,
            sum_x,
            sum_y,
            sum_xx,
            sum_yy,
            sum_xy,
            mean_x,
            mean_y,
            sxx,
            syy,
            sxy,
        }
    }
}
