#![cfg(feature = "dev")]
//! Tests for iterative sigma clipping.
//!
//! These tests verify the outlier-rejection primitive behind the
//! sigma-clip continuum estimator:
//! - Clean data passes through unchanged
//! - Outliers are rejected and iteration continues to convergence
//! - Degenerate inputs (constant, tiny) terminate safely
//!
//! ## Test Organization
//!
//! 1. **Pass-Through** - No rejection on clean data
//! 2. **Rejection** - Single and multi-pass clipping
//! 3. **Degenerate Inputs** - Constant and short arrays

use continuum::internals::math::sigclip::sigma_clip;

// ============================================================================
// Pass-Through Tests
// ============================================================================

/// Test that data without outliers is fully retained.
#[test]
fn test_clean_data_retained() {
    let samples = vec![1.0f64, 1.1, 0.9, 1.05, 0.95];
    let retained = sigma_clip(&samples, 3.0);
    assert_eq!(retained, samples);
}

/// Test that output preserves input order.
#[test]
fn test_retained_order() {
    let samples = vec![0.3f64, 0.1, 0.2, 100.0, 0.15];
    let retained = sigma_clip(&samples, 1.8);
    assert_eq!(retained, vec![0.3, 0.1, 0.2, 0.15]);
}

// ============================================================================
// Rejection Tests
// ============================================================================

/// Test rejection of a single extreme outlier.
#[test]
fn test_single_outlier_rejected() {
    let samples = vec![0.0f64, 0.0, 0.0, 0.0, 0.0, 100.0];
    let retained = sigma_clip(&samples, 1.8);
    assert_eq!(retained, vec![0.0; 5]);
}

/// Test multi-pass clipping: a moderate outlier survives the first pass
/// and is rejected once the extreme one is gone.
#[test]
fn test_iterates_to_convergence() {
    let mut samples = vec![0.0f64; 20];
    for (i, s) in samples.iter_mut().enumerate() {
        *s = (i as f64 - 9.5) * 0.01; // tight cluster around 0
    }
    samples.push(5.0);
    samples.push(80.0);

    let retained = sigma_clip(&samples, 1.8);
    assert_eq!(retained.len(), 20);
    assert!(retained.iter().all(|&v| v.abs() < 1.0));
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Test constant data is returned unchanged (zero sigma is converged).
#[test]
fn test_constant_data() {
    let samples = vec![2.5f64; 6];
    let retained = sigma_clip(&samples, 1.8);
    assert_eq!(retained, samples);
}

/// Test single-element and empty arrays terminate immediately.
#[test]
fn test_tiny_arrays() {
    let one = vec![7.0f64];
    assert_eq!(sigma_clip(&one, 1.8), one);

    let none: Vec<f64> = vec![];
    assert_eq!(sigma_clip(&none, 1.8), none);
}
