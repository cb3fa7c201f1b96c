//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage of the trend-fitting API. The prelude should provide a
//! one-stop import for common functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Usage** - Types can be used without qualification
//! 3. **Builder Pattern** - Complete workflows work with prelude imports

use trendfit::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that the prelude exports all necessary types for basic usage.
#[test]
fn test_prelude_imports() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];

    // Verify Trend (TrendBuilder) and the fit entry point are useable
    let result = Trend::new().build().unwrap().fit(&x, &y);

    assert!(result.is_ok(), "Basic fit should work with prelude imports");
}

/// Test CurveFamily variants are available.
///
/// Verifies that the curve-family variants are exported unqualified.
#[test]
fn test_prelude_curve_family() {
    let _ = Trend::new().family(Linear);
    let _ = Trend::new().family(Exponential);
    let _ = CurveFamily::default();
}

/// Test complete workflow with prelude.
///
/// Verifies that a complete fit workflow works with only prelude imports.
#[test]
fn test_prelude_complete_workflow() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![1.0, 3.0, 5.0, 7.0, 9.0, 11.0];

    let fit: TrendResult<f64> = Trend::new()
        .family(Linear)
        .build()
        .unwrap()
        .fit(&x, &y)
        .expect("Complete workflow should succeed");

    assert_eq!(fit.n, x.len());
    assert!(fit.has_standard_errors());

    // Diagnostics type is reachable through the prelude
    let diag: Diagnostics<f64> = fit.diagnostics;
    assert!(diag.r_squared > 0.99);
}

/// Test error types are available.
///
/// Verifies that error handling works with prelude imports.
#[test]
fn test_prelude_error_handling() {
    let x: Vec<f64> = vec![];
    let y: Vec<f64> = vec![];

    let result = Trend::new().build().unwrap().fit(&x, &y);

    // Should be able to match on error types from prelude
    assert!(matches!(result, Err(TrendError::EmptyInput)));
}
