//! Input validation for trend-fitting configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for trend-fitting input data
//! and model preconditions. It checks requirements such as input lengths,
//! finite values, and the curve family's domain constraint.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Structural checks**: Non-empty, matched lengths, at least 2 points.
//! * **Finite checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Domain checks**: The exponential family requires strictly positive y.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the fit itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::transform::CurveFamily;
use crate::primitives::errors::TrendError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for trend-fitting input data and preconditions.
///
/// Provides static methods returning `Result<(), TrendError>` which fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate input arrays for trend fitting.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), TrendError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(TrendError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(TrendError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient points for regression
        if n < 2 {
            return Err(TrendError::TooFewPoints { got: n, min: 2 });
        }

        // Check 4: All values finite (combined loop for cache locality)
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(TrendError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(TrendError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Model Precondition Validation
    // ========================================================================

    /// Validate the curve family's domain constraint on y.
    ///
    /// The exponential family regresses `ln(y)` on x, so every y-value must
    /// be strictly positive; the transform cannot recover from a violation.
    pub fn validate_family_domain<T: Float>(
        family: CurveFamily,
        y: &[T],
    ) -> Result<(), TrendError> {
        if !family.requires_positive_y() {
            return Ok(());
        }

        for (i, &v) in y.iter().enumerate() {
            if v <= T::zero() {
                return Err(TrendError::NonPositiveValue {
                    index: i,
                    value: v.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), TrendError> {
        if let Some(param) = duplicate_param {
            return Err(TrendError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
