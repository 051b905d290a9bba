#![cfg(feature = "dev")]
//! Tests for the descriptive statistics routines.
//!
//! These tests verify the scalar statistics underlying the estimators:
//! - Arithmetic mean and population standard deviation
//! - Quickselect-based median for odd and even lengths
//! - Interpolated percentile, including the percentile-50/median identity
//!
//! ## Test Organization
//!
//! 1. **Moments** - Mean and standard deviation
//! 2. **Median** - Odd/even lengths, unsorted input
//! 3. **Percentile** - Interpolation and boundary values

use approx::assert_relative_eq;

use continuum::internals::math::stats;

// ============================================================================
// Moments Tests
// ============================================================================

/// Test the arithmetic mean on a simple array.
#[test]
fn test_mean_basic() {
    let vals = vec![1.0f64, 2.0, 3.0, 4.0];
    assert_relative_eq!(stats::mean(&vals), 2.5, epsilon = 1e-12);
}

/// Test the population standard deviation (divides by n).
#[test]
fn test_std_dev_population() {
    let vals = vec![1.0f64, 2.0, 3.0, 4.0];
    // Variance = (2.25 + 0.25 + 0.25 + 2.25) / 4 = 1.25
    assert_relative_eq!(stats::std_dev(&vals), 1.25f64.sqrt(), epsilon = 1e-12);
}

/// Test that constant input has zero sigma.
#[test]
fn test_std_dev_constant() {
    let vals = vec![3.3f64; 7];
    assert_relative_eq!(stats::std_dev(&vals), 0.0, epsilon = 1e-12);
}

/// Test empty input returns zero rather than NaN.
#[test]
fn test_moments_empty() {
    let vals: Vec<f64> = vec![];
    assert_eq!(stats::mean(&vals), 0.0);
    assert_eq!(stats::std_dev(&vals), 0.0);
}

// ============================================================================
// Median Tests
// ============================================================================

/// Test the median for odd-length input.
#[test]
fn test_median_odd() {
    let vals = vec![5.0f64, 1.0, 3.0];
    assert_relative_eq!(stats::median(&vals), 3.0, epsilon = 1e-12);
}

/// Test the median for even-length input averages the middle pair.
#[test]
fn test_median_even() {
    let vals = vec![4.0f64, 1.0, 3.0, 2.0];
    assert_relative_eq!(stats::median(&vals), 2.5, epsilon = 1e-12);
}

/// Test the median is robust to an extreme outlier.
#[test]
fn test_median_with_outlier() {
    let vals = vec![1.0f64, 2.0, 3.0, 1000.0];
    assert_relative_eq!(stats::median(&vals), 2.5, epsilon = 1e-12);
}

/// Test the in-place median does not require sorted input.
#[test]
fn test_median_inplace_unsorted() {
    let mut vals = vec![9.0f64, 0.0, 5.0, 7.0, 2.0];
    assert_relative_eq!(stats::median_inplace(&mut vals), 5.0, epsilon = 1e-12);
}

// ============================================================================
// Percentile Tests
// ============================================================================

/// Test percentile boundary values.
#[test]
fn test_percentile_boundaries() {
    let vals = vec![3.0f64, 1.0, 5.0, 2.0, 4.0];
    assert_relative_eq!(stats::percentile(&vals, 0.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(stats::percentile(&vals, 100.0), 5.0, epsilon = 1e-12);
}

/// Test percentile linear interpolation between order statistics.
#[test]
fn test_percentile_interpolation() {
    let vals = vec![1.0f64, 2.0, 3.0, 4.0, 5.0];
    // Rank = 0.10 * 4 = 0.4 => 1.0 + 0.4 * (2.0 - 1.0)
    assert_relative_eq!(stats::percentile(&vals, 10.0), 1.4, epsilon = 1e-12);
    // Rank = 0.25 * 4 = 1.0 => exactly the second value
    assert_relative_eq!(stats::percentile(&vals, 25.0), 2.0, epsilon = 1e-12);
}

/// Test percentile 50 reproduces the median for odd and even lengths.
#[test]
fn test_percentile_50_is_median() {
    let odd = vec![7.0f64, 1.0, 4.0, 9.0, 2.0];
    assert_relative_eq!(
        stats::percentile(&odd, 50.0),
        stats::median(&odd),
        epsilon = 1e-12
    );

    let even = vec![8.0f64, 3.0, 6.0, 1.0];
    assert_relative_eq!(
        stats::percentile(&even, 50.0),
        stats::median(&even),
        epsilon = 1e-12
    );
}

/// Test percentile of a single-element array.
#[test]
fn test_percentile_single() {
    let vals = vec![42.0f64];
    assert_relative_eq!(stats::percentile(&vals, 73.0), 42.0, epsilon = 1e-12);
}
