//! Curve-family transforms.
//!
//! ## Purpose
//!
//! This module maps a requested curve family onto an ordinary least-squares
//! problem. The linear family is fitted directly; the exponential family
//! `y = b·e^(m·x)` is fitted by regressing `ln(y)` on `x` and inverting
//! predictions through `exp`.
//!
//! ## Design notes
//!
//! * **Pure**: Transforms allocate a conditioned copy; inputs are never mutated.
//! * **Generics**: All computations are generic over `Float` types.
//! * **Preconditions**: The exponential transform requires `y > 0` elementwise;
//!   the engine validator enforces this before the transform runs, since a
//!   violated log cannot be recovered from here.
//!
//! ## Key concepts
//!
//! * **Linearization**: Conditioning (x, y) into a linear-ready [`PairedSeries`].
//! * **Back-transform**: Mapping a fitted value on the linear scale back to
//!   the original scale of the family.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs (responsibility of the validator).
//! * This module does not fit anything (responsibility of the solver).

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::series::PairedSeries;

// ============================================================================
// Curve Family
// ============================================================================

/// Curve family fitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveFamily {
    /// Straight line `y = m·x + b` (default).
    #[default]
    Linear,

    /// Exponential curve `y = b·e^(m·x)`, fitted on the log scale.
    Exponential,
}

impl CurveFamily {
    /// Whether the family constrains y-values to be strictly positive.
    #[inline]
    pub fn requires_positive_y(self) -> bool {
        matches!(self, CurveFamily::Exponential)
    }

    /// Condition (x, y) into a linear-ready paired series.
    ///
    /// Identity copy for [`CurveFamily::Linear`]; elementwise natural log of
    /// y for [`CurveFamily::Exponential`].
    pub fn linearize<T: Float>(self, x: &[T], y: &[T]) -> PairedSeries<T> {
        debug_assert_eq!(
            x.len(),
            y.len(),
            "CurveFamily::linearize: x and y must have the same length"
        );

        let y_linear = match self {
            CurveFamily::Linear => y.to_vec(),
            CurveFamily::Exponential => {
                debug_assert!(
                    y.iter().all(|&v| v > T::zero()),
                    "CurveFamily::linearize: exponential family requires y > 0"
                );
                y.iter().map(|&v| v.ln()).collect()
            }
        };

        PairedSeries::new(x.to_vec(), y_linear)
    }

    /// Map a fitted value on the linear scale back to the family's scale.
    #[inline]
    pub fn invert<T: Float>(self, fitted: T) -> T {
        match self {
            CurveFamily::Linear => fitted,
            CurveFamily::Exponential => fitted.exp(),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CurveFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CurveFamily::Linear => write!(f, "Linear"),
            CurveFamily::Exponential => write!(f, "Exponential"),
        }
    }
}
