#![cfg(feature = "dev")]
//! Tests for the Gaussian kernel density estimation routines.
//!
//! These tests verify the fixed-bandwidth KDE used to locate the mode of
//! the flux distribution:
//! - Uniform inclusive grid construction
//! - Density evaluation and mode location
//! - First-index tie-break on the density argmax
//!
//! ## Test Organization
//!
//! 1. **Grid Construction** - Endpoints, spacing, point count
//! 2. **Density Evaluation** - Mode location, positivity, bandwidth effect
//! 3. **Argmax** - Tie-breaking

use approx::assert_relative_eq;

use continuum::internals::math::kde;

// ============================================================================
// Grid Construction Tests
// ============================================================================

/// Test the uniform grid hits both endpoints with the requested count.
#[test]
fn test_uniform_grid_endpoints() {
    let grid = kde::uniform_grid(-1.0f64, 3.0, 100);

    assert_eq!(grid.len(), 100);
    assert_relative_eq!(grid[0], -1.0, epsilon = 1e-12);
    assert_relative_eq!(grid[99], 3.0, epsilon = 1e-12);
}

/// Test the uniform grid is equally spaced.
#[test]
fn test_uniform_grid_spacing() {
    let grid = kde::uniform_grid(0.0f64, 1.0, 5);

    assert_eq!(grid.len(), 5);
    for pair in grid.windows(2) {
        assert_relative_eq!(pair[1] - pair[0], 0.25, epsilon = 1e-12);
    }
}

// ============================================================================
// Density Evaluation Tests
// ============================================================================

/// Test the density peaks at a dense cluster.
///
/// Verifies that the mode of the KDE lands on the cluster, not on the
/// sparse outliers.
#[test]
fn test_density_peaks_at_cluster() {
    let mut samples = vec![1.0f64; 50];
    samples.extend_from_slice(&[3.0, 3.1, 3.2]);

    let grid = kde::uniform_grid(0.0f64, 4.0, 100);
    let density = kde::density_on_grid(&samples, 0.1, &grid);
    let mode = grid[kde::argmax(&density)];

    assert!((mode - 1.0).abs() < 0.1, "mode {mode} should be near 1.0");
}

/// Test the density is non-negative everywhere.
#[test]
fn test_density_non_negative() {
    let samples = vec![0.0f64, 0.5, 2.0];
    let grid = kde::uniform_grid(-1.0f64, 3.0, 50);
    let density = kde::density_on_grid(&samples, 0.3, &grid);

    assert_eq!(density.len(), grid.len());
    for &d in &density {
        assert!(d >= 0.0 && d.is_finite());
    }
}

/// Test determinism: identical inputs give identical densities.
#[test]
fn test_density_deterministic() {
    let samples = vec![0.3f64, 0.9, 1.4, 2.2];
    let grid = kde::uniform_grid(0.0f64, 3.0, 40);

    let a = kde::density_on_grid(&samples, 0.2, &grid);
    let b = kde::density_on_grid(&samples, 0.2, &grid);
    assert_eq!(a, b);
}

/// Test a narrower bandwidth sharpens the density around the samples.
#[test]
fn test_bandwidth_controls_smoothing() {
    let samples = vec![1.0f64; 10];
    let grid = kde::uniform_grid(0.0f64, 2.0, 101);

    let narrow = kde::density_on_grid(&samples, 0.05, &grid);
    let wide = kde::density_on_grid(&samples, 0.5, &grid);

    // Away from the cluster (x = 0.5, 25 grid steps from the peak), the
    // narrow kernel contributes essentially nothing.
    assert!(narrow[25] < 1e-6);
    assert!(wide[25] > 0.1);
}

// ============================================================================
// Argmax Tests
// ============================================================================

/// Test that ties on the density grid resolve to the lowest index.
#[test]
fn test_argmax_first_tie() {
    let density = vec![1.0f64, 3.0, 3.0, 2.0];
    assert_eq!(kde::argmax(&density), 1);
}

/// Test argmax on a single-element density.
#[test]
fn test_argmax_single() {
    let density = vec![0.7f64];
    assert_eq!(kde::argmax(&density), 0);
}
