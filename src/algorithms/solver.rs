//! Least-Squares Solver
//!
//! ## Purpose
//!
//! This module provides the core data types and logic for ordinary
//! least-squares fitting, including:
//! - Generic and SIMD-optimized accumulation of regression sums.
//! - The closed-form solve for slope and intercept, unconstrained or
//!   constrained through the origin.
//!
//! ## Key concepts
//!
//! * **Single pass**: All five raw sums (Σx, Σy, Σx², Σy², Σxy) are
//!   accumulated in one traversal; everything downstream derives from them.
//! * **Degeneracy**: Zero variance in x makes the slope undefined; the solve
//!   reports this as a typed failure rather than dividing by zero.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// Internal dependencies
use crate::math::sums::RegressionSums;
use crate::primitives::errors::TrendError;

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar accumulation of raw regression sums (generic Float).
#[inline]
pub fn accumulate_ols_scalar<T: Float>(x: &[T], y: &[T]) -> (T, T, T, T, T) {
    let n = x.len();
    if n == 0 {
        return (T::zero(), T::zero(), T::zero(), T::zero(), T::zero());
    }

    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xx = T::zero();
    let mut sum_yy = T::zero();
    let mut sum_xy = T::zero();

    for i in 0..n {
        let x_val = x[i];
        let y_val = y[i];

        sum_x = sum_x + x_val;
        sum_y = sum_y + y_val;
        sum_xx = sum_xx + x_val * x_val;
        sum_yy = sum_yy + y_val * y_val;
        sum_xy = sum_xy + x_val * y_val;
    }

    (sum_x, sum_y, sum_xx, sum_yy, sum_xy)
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized accumulation of raw regression sums (f64).
#[inline]
pub fn accumulate_ols_simd_f64(x: &[f64], y: &[f64]) -> (f64, f64, f64, f64, f64) {
    let n = x.len();
    if n == 0 {
        return (0.0, 0.0, 0.0, 0.0, 0.0);
    }

    let mut i = 0;
    let mut s_x = f64x2::splat(0.0);
    let mut s_y = f64x2::splat(0.0);
    let mut s_xx = f64x2::splat(0.0);
    let mut s_yy = f64x2::splat(0.0);
    let mut s_xy = f64x2::splat(0.0);

    unsafe {
        while i + 2 <= n {
            let x_val = f64x2::new([*x.get_unchecked(i), *x.get_unchecked(i + 1)]);
            let y_val = f64x2::new([*y.get_unchecked(i), *y.get_unchecked(i + 1)]);

            s_x += x_val;
            s_y += y_val;
            s_xx += x_val * x_val;
            s_yy += y_val * y_val;
            s_xy += x_val * y_val;

            i += 2;
        }
    }

    let mut a_x = s_x.reduce_add();
    let mut a_y = s_y.reduce_add();
    let mut a_xx = s_xx.reduce_add();
    let mut a_yy = s_yy.reduce_add();
    let mut a_xy = s_xy.reduce_add();

    unsafe {
        while i < n {
            let x_val = *x.get_unchecked(i);
            let y_val = *y.get_unchecked(i);

            a_x += x_val;
            a_y += y_val;
            a_xx += x_val * x_val;
            a_yy += y_val * y_val;
            a_xy += x_val * y_val;

            i += 1;
        }
    }

    (a_x, a_y, a_xx, a_yy, a_xy)
}

/// SIMD-optimized accumulation of raw regression sums (f32).
#[inline]
pub fn accumulate_ols_simd_f32(x: &[f32], y: &[f32]) -> (f32, f32, f32, f32, f32) {
    let n = x.len();
    if n == 0 {
        return (0.0, 0.0, 0.0, 0.0, 0.0);
    }

    let mut i = 0;
    let mut s_x = f32x8::splat(0.0);
    let mut s_y = f32x8::splat(0.0);
    let mut s_xx = f32x8::splat(0.0);
    let mut s_yy = f32x8::splat(0.0);
    let mut s_xy = f32x8::splat(0.0);

    unsafe {
        while i + 8 <= n {
            let x_val = f32x8::new([
                *x.get_unchecked(i),
                *x.get_unchecked(i + 1),
                *x.get_unchecked(i + 2),
                *x.get_unchecked(i + 3),
                *x.get_unchecked(i + 4),
                *x.get_unchecked(i + 5),
                *x.get_unchecked(i + 6),
                *x.get_unchecked(i + 7),
            ]);
            let y_val = f32x8::new([
                *y.get_unchecked(i),
                *y.get_unchecked(i + 1),
                *y.get_unchecked(i + 2),
                *y.get_unchecked(i + 3),
                *y.get_unchecked(i + 4),
                *y.get_unchecked(i + 5),
                *y.get_unchecked(i + 6),
                *y.get_unchecked(i + 7),
            ]);

            s_x += x_val;
            s_y += y_val;
            s_xx += x_val * x_val;
            s_yy += y_val * y_val;
            s_xy += x_val * y_val;

            i += 8;
        }
    }

    let mut a_x = s_x.reduce_add();
    let mut a_y = s_y.reduce_add();
    let mut a_xx = s_xx.reduce_add();
    let mut a_yy = s_yy.reduce_add();
    let mut a_xy = s_xy.reduce_add();

    unsafe {
        while i < n {
            let x_val = *x.get_unchecked(i);
            let y_val = *y.get_unchecked(i);

            a_x += x_val;
            a_y += y_val;
            a_xx += x_val * x_val;
            a_yy += y_val * y_val;
            a_xy += x_val * y_val;

            i += 1;
        }
    }

    (a_x, a_y, a_xx, a_yy, a_xy)
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for type-specific accumulation of regression sums.
pub trait OlsSolver: Float {
    /// Accumulate raw sums (Σx, Σy, Σx², Σy², Σxy) in a single pass.
    #[inline]
    fn accumulate_ols(x: &[Self], y: &[Self]) -> (Self, Self, Self, Self, Self) {
        accumulate_ols_scalar(x, y)
    }
}

impl OlsSolver for f64 {
    #[inline]
    fn accumulate_ols(x: &[f64], y: &[f64]) -> (f64, f64, f64, f64, f64) {
        accumulate_ols_simd_f64(x, y)
    }
}

impl OlsSolver for f32 {
    #[inline]
    fn accumulate_ols(x: &[f32], y: &[f32]) -> (f32, f32, f32, f32, f32) {
        accumulate_ols_simd_f32(x, y)
    }
}

/// Accumulate a paired series into [`RegressionSums`].
pub fn regression_sums<T: Float + OlsSolver>(x: &[T], y: &[T]) -> RegressionSums<T> {
    let (sum_x, sum_y, sum_xx, sum_yy, sum_xy) = T::accumulate_ols(x, y);
    RegressionSums::from_raw(x.len(), sum_x, sum_y, sum_xx, sum_yy, sum_xy)
}

// ============================================================================
// Least-Squares Fit
// ============================================================================

/// Fitted coefficients of the linearized model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeastSquaresFit<T: Float> {
    /// Slope (beta_1).
    pub slope: T,

    /// Intercept (beta_0); exactly zero for through-origin fits.
    pub intercept: T,
}

impl<T: Float> LeastSquaresFit<T> {
    /// Predict the linear-scale y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Solve the closed-form least-squares system.
    ///
    /// Unconstrained: `slope = Sxy / Sxx`, `intercept = ȳ − slope·x̄`.
    /// Through origin: `slope = Σxy / Σx²`, `intercept = 0`.
    ///
    /// # Errors
    ///
    /// [`TrendError::ZeroXVariance`] when the x-variance (or Σx² for the
    /// through-origin model) vanishes and the slope is undefined.
    pub fn solve(sums: &RegressionSums<T>, through_origin: bool) -> Result<Self, TrendError> {
        if through_origin {
            if sums.sum_xx <= T::zero() {
                return Err(TrendError::ZeroXVariance);
            }

            return Ok(Self {
                slope: sums.sum_xy / sums.sum_xx,
                intercept: T::zero(),
            });
        }

        if sums.sxx <= degenerate_tolerance(sums.sum_xx) {
            return Err(TrendError::ZeroXVariance);
        }

        let slope = sums.sxy / sums.sxx;
        let intercept = sums.mean_y - slope * sums.mean_x;

        Ok(Self { slope, intercept })
    }
}

/// Tolerance below which the centered x-variance counts as zero.
///
/// Identical x-values cancel to a residue on the order of `epsilon · Σx²`,
/// so the relative term scales with the magnitude of the data.
#[inline]
fn degenerate_tolerance<T: Float>(sum_xx: T) -> T {
    let abs_tol = T::from(1e-12).unwrap_or(T::epsilon());
    let rel_tol = T::epsilon() * sum_xx;
    abs_tol.max(rel_tol)
}
