#![cfg(feature = "dev")]
//! Tests for regression sums and centered moments.
//!
//! These tests verify the derivation of means and mean-centered moments from
//! raw accumulated sums, including the clamping of sums of squares against
//! floating-point cancellation.
//!
//! ## Test Organization
//!
//! 1. **Derivation** - Means and centered moments from raw sums
//! 2. **Clamping** - Non-negativity of Sxx and Syy
//! 3. **Edge Cases** - Constant series

use approx::assert_relative_eq;

use trendfit::internals::math::sums::RegressionSums;

// ============================================================================
// Derivation Tests
// ============================================================================

/// Test derived moments for a small hand-computed series.
///
/// x = [1, 2, 3], y = [2, 4, 6]: Sxx = 2, Syy = 8, Sxy = 4.
#[test]
fn test_from_raw_hand_computed() {
    // Raw sums for x = [1, 2, 3], y = [2, 4, 6]
    let sums = RegressionSums::from_raw(3, 6.0, 12.0, 14.0, 56.0, 28.0);

    assert_eq!(sums.n, 3);
    assert_relative_eq!(sums.mean_x, 2.0, epsilon = 1e-12);
    assert_relative_eq!(sums.mean_y, 4.0, epsilon = 1e-12);
    assert_relative_eq!(sums.sxx, 2.0, epsilon = 1e-12);
    assert_relative_eq!(sums.syy, 8.0, epsilon = 1e-12);
    assert_relative_eq!(sums.sxy, 4.0, epsilon = 1e-12);
}

/// Test that raw sums are preserved alongside the centered moments.
#[test]
fn test_from_raw_preserves_raw_sums() {
    let sums = RegressionSums::from_raw(3, 6.0, 12.0, 14.0, 56.0, 28.0);

    assert_eq!(sums.sum_x, 6.0);
    assert_eq!(sums.sum_y, 12.0);
    assert_eq!(sums.sum_xx, 14.0);
    assert_eq!(sums.sum_yy, 56.0);
    assert_eq!(sums.sum_xy, 28.0);
}

/// Test a negative covariance survives (Sxy is not clamped).
#[test]
fn test_negative_covariance() {
    // x = [1, 2, 3], y = [6, 4, 2]: Sxy = -4
    let sums = RegressionSums::from_raw(3, 6.0, 12.0, 14.0, 56.0, 20.0);

    assert_relative_eq!(sums.sxy, -4.0, epsilon = 1e-12);
}

// ============================================================================
// Clamping Tests
// ============================================================================

/// Test Sxx and Syy are clamped to zero against cancellation artifacts.
///
/// Raw sums that would derive to a tiny negative centered moment must clamp.
#[test]
fn test_centered_moments_clamped_non_negative() {
    // Constructed so that sum_xx - sum_x^2/n is a small negative number.
    let sums = RegressionSums::from_raw(4, 4.0, 4.0, 4.0 - 1e-13, 4.0 - 1e-13, 4.0);

    assert!(sums.sxx >= 0.0);
    assert!(sums.syy >= 0.0);
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Test a constant series has zero centered moments.
#[test]
fn test_constant_series() {
    // x = [2, 2, 2], y = [5, 5, 5]
    let sums = RegressionSums::from_raw(3, 6.0, 15.0, 12.0, 75.0, 30.0);

    assert_relative_eq!(sums.sxx, 0.0, epsilon = 1e-12);
    assert_relative_eq!(sums.syy, 0.0, epsilon = 1e-12);
    assert_relative_eq!(sums.sxy, 0.0, epsilon = 1e-12);
    assert_relative_eq!(sums.mean_x, 2.0, epsilon = 1e-12);
    assert_relative_eq!(sums.mean_y, 5.0, epsilon = 1e-12);
}
