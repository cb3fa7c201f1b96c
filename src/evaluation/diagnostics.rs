//! Goodness-of-fit diagnostics for trend fits.
//!
//! ## Purpose
//!
//! This module derives the full diagnostic battery from the regression sums
//! and the fitted coefficients: variance decomposition, coefficient of
//! determination, correlation, degrees of freedom, residual standard
//! deviation, coefficient standard errors, and the F-statistic.
//!
//! ## Design notes
//!
//! * **Sums-driven**: Every statistic derives from [`RegressionSums`] and the
//!   fitted slope; no second pass over the data is needed.
//! * **Branch-aware**: The through-origin model uses raw (uncentered) sums of
//!   squares and `n − 1` residual degrees of freedom; the unconstrained model
//!   uses mean-centered sums and `n − 2`.
//! * **Boundary values, not faults**: Zero total variance yields R² = 1.0;
//!   zero residual variance yields an infinite F-statistic; zero residual
//!   degrees of freedom yields `None` for every statistic that divides by it.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `ss_regression + ss_residual == ss_total` up to floating-point rounding.
//! * `ss_residual >= 0` (clamped against floating-point artifacts).
//! * `r_squared` is in `[0, 1]` and equals `correlation²`.
//!
//! ## Non-goals
//!
//! * This module does not perform the fit itself.
//! * This module does not provide p-values or formal hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::solver::LeastSquaresFit;
use crate::math::sums::RegressionSums;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for assessing trend-fit quality.
///
/// Statistics that are undefined at zero residual degrees of freedom are
/// `Option`-valued: `None` means "not computable", and an infinite
/// `f_statistic` marks a perfect fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Sum of squares explained by the regression.
    pub ss_regression: T,

    /// Residual (unexplained) sum of squares.
    pub ss_residual: T,

    /// Total sum of squares (Syy, or Σy² for through-origin fits).
    pub ss_total: T,

    /// Coefficient of determination (R²).
    pub r_squared: T,

    /// Correlation coefficient, signed by the slope.
    pub correlation: T,

    /// Residual degrees of freedom (n − 2, or n − 1 for through-origin fits).
    pub residual_df: usize,

    /// Residual standard deviation, `sqrt(ss_residual / residual_df)`.
    pub residual_sd: Option<T>,

    /// Standard error of the slope.
    pub slope_std_err: Option<T>,

    /// Standard error of the intercept (`None` for through-origin fits,
    /// whose intercept is not estimated).
    pub intercept_std_err: Option<T>,

    /// F-statistic of the regression; infinite for a perfect fit.
    pub f_statistic: Option<T>,
}

impl<T: Float> Diagnostics<T> {
    /// Number of fitted parameters in the unconstrained model (slope + intercept).
    const UNCONSTRAINED_PARAMS: usize = 2;

    /// Number of fitted parameters in the through-origin model (slope only).
    const THROUGH_ORIGIN_PARAMS: usize = 1;

    // ========================================================================
    // Main Computation
    // ========================================================================

    /// Derive all diagnostics from the regression sums and fitted coefficients.
    pub fn compute(
        sums: &RegressionSums<T>,
        fit: &LeastSquaresFit<T>,
        through_origin: bool,
    ) -> Self {
        // The through-origin model decomposes raw sums of squares; the
        // unconstrained model decomposes mean-centered ones.
        let (x_spread, ss_total, params) = if through_origin {
            (sums.sum_xx, sums.sum_yy, Self::THROUGH_ORIGIN_PARAMS)
        } else {
            (sums.sxx, sums.syy, Self::UNCONSTRAINED_PARAMS)
        };

        let ss_regression = fit.slope * fit.slope * x_spread;
        // Residuals cannot be negative in exact arithmetic.
        let ss_residual = (ss_total - ss_regression).max(T::zero());

        // All y identical and perfectly predicted: explicitly 1, not 0/0.
        let r_squared = if ss_total > T::zero() {
            (ss_regression / ss_total).min(T::one())
        } else {
            T::one()
        };

        let correlation = if fit.slope < T::zero() {
            -r_squared.sqrt()
        } else {
            r_squared.sqrt()
        };

        let residual_df = sums.n.saturating_sub(params);

        if residual_df == 0 {
            return Self {
                ss_regression,
                ss_residual,
                ss_total,
                r_squared,
                correlation,
                residual_df,
                residual_sd: None,
                slope_std_err: None,
                intercept_std_err: None,
                f_statistic: None,
            };
        }

        let df_t = T::from(residual_df).unwrap_or(T::one());
        let residual_variance = ss_residual / df_t;
        let residual_sd = residual_variance.sqrt();

        let slope_std_err = residual_sd / x_spread.sqrt();

        let intercept_std_err = if through_origin {
            None
        } else {
            let n_t = T::from(sums.n).unwrap_or(T::one());
            let leverage = T::one() / n_t + sums.mean_x * sums.mean_x / sums.sxx;
            Some(residual_sd * leverage.sqrt())
        };

        let f_statistic = if ss_residual > T::zero() {
            ss_regression / residual_variance
        } else {
            T::infinity()
        };

        Self {
            ss_regression,
            ss_residual,
            ss_total,
            r_squared,
            correlation,
            residual_df,
            residual_sd: Some(residual_sd),
            slope_std_err: Some(slope_std_err),
            intercept_std_err,
            f_statistic: Some(f_statistic),
        }
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Whether the residual sum of squares vanished (perfect fit).
    pub fn is_perfect_fit(&self) -> bool {
        self.ss_residual == T::zero()
    }

    /// Whether the DF-dependent statistics could be computed.
    pub fn has_standard_errors(&self) -> bool {
        self.slope_std_err.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Goodness of Fit:")?;
        writeln!(f, "  R²:            {:.6}", self.r_squared)?;
        writeln!(f, "  Correlation:   {:.6}", self.correlation)?;
        writeln!(f, "  SS regression: {:.6}", self.ss_regression)?;
        writeln!(f, "  SS residual:   {:.6}", self.ss_residual)?;
        writeln!(f, "  SS total:      {:.6}", self.ss_total)?;
        writeln!(f, "  Residual DF:   {}", self.residual_df)?;

        if let Some(sd) = self.residual_sd {
            writeln!(f, "  Residual SD:   {:.6}", sd)?;
        }
        if let Some(se) = self.slope_std_err {
            writeln!(f, "  Slope SE:      {:.6}", se)?;
        }
        if let Some(se) = self.intercept_std_err {
            writeln!(f, "  Intercept SE:  {:.6}", se)?;
        }
        if let Some(fs) = self.f_statistic {
            writeln!(f, "  F-statistic:   {:.4}", fs)?;
        }

        Ok(())
    }
}
