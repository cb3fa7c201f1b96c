//! Output types and result structures for trend-fitting operations.
//!
//! ## Purpose
//!
//! This module defines the `TrendResult` struct which encapsulates all
//! outputs from a fit: the fitted coefficients, the full diagnostic battery,
//! and the point-prediction function.
//!
//! ## Design notes
//!
//! * **Immutable**: Constructed once per fit, never mutated.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Scale**: For the exponential family, `slope` and `intercept` (and all
//!   diagnostics) are reported on the log-linear scale; `predict` and
//!   `growth_base` map back to the original scale.
//!
//! ## Key concepts
//!
//! * **Prediction**: `predict(x0)` evaluates the fitted curve at `x0`,
//!   back-transformed through the family's inverse.
//! * **Optional statistics**: Diagnostics undefined at zero residual degrees
//!   of freedom are `None` rather than NaN.
//!
//! ## Invariants
//!
//! * `intercept` is exactly zero for through-origin fits.
//! * `n >= 2`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond point prediction.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::transform::CurveFamily;

// ============================================================================
// Result Structure
// ============================================================================

/// Immutable output of a trend fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendResult<T> {
    /// Curve family that was fitted.
    pub family: CurveFamily,

    /// Whether the intercept was constrained to zero.
    pub through_origin: bool,

    /// Number of (x, y) pairs used in the fit.
    pub n: usize,

    /// Fitted slope, on the linear (log for exponential) scale.
    pub slope: T,

    /// Fitted intercept, on the linear (log for exponential) scale.
    pub intercept: T,

    /// Goodness-of-fit diagnostics.
    pub diagnostics: Diagnostics<T>,
}

impl<T: Float> TrendResult<T> {
    // ========================================================================
    // Prediction
    // ========================================================================

    /// Evaluate the fitted curve at `x0`.
    ///
    /// Computes `slope·x0 + intercept` and back-transforms through the
    /// family's inverse (identity for linear, `exp` for exponential). Pure
    /// function of the fitted parameters.
    #[inline]
    pub fn predict(&self, x0: T) -> T {
        self.family.invert(self.intercept + self.slope * x0)
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Multiplicative constant `b` of the exponential model `y = b·e^(m·x)`.
    ///
    /// Returns `None` for the linear family.
    pub fn growth_base(&self) -> Option<T> {
        match self.family {
            CurveFamily::Exponential => Some(self.intercept.exp()),
            CurveFamily::Linear => None,
        }
    }

    /// Whether the residual sum of squares vanished (perfect fit).
    pub fn is_perfect_fit(&self) -> bool {
        self.diagnostics.is_perfect_fit()
    }

    /// Whether the DF-dependent statistics could be computed.
    pub fn has_standard_errors(&self) -> bool {
        self.diagnostics.has_standard_errors()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for TrendResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Trend Fit:")?;
        writeln!(f, "  Family:       {}", self.family)?;
        writeln!(f, "  Data points:  {}", self.n)?;

        match self.family {
            CurveFamily::Linear => {
                writeln!(
                    f,
                    "  Model:        y = {:.6}·x + {:.6}",
                    self.slope, self.intercept
                )?;
            }
            CurveFamily::Exponential => {
                let base = self.intercept.exp();
                writeln!(
                    f,
                    "  Model:        y = {:.6}·e^({:.6}·x)",
                    base, self.slope
                )?;
            }
        }

        if self.through_origin {
            writeln!(f, "  Constraint:   intercept forced to zero")?;
        }
        writeln!(f)?;

        write!(f, "{}", self.diagnostics)?;

        Ok(())
    }
}
