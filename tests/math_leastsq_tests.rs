#![cfg(feature = "dev")]
//! Tests for the Levenberg-Marquardt Gaussian peak fit.
//!
//! These tests verify the nonlinear least-squares minimizer behind the
//! Gaussian continuum estimator:
//! - Parameter recovery on noiseless Gaussian data
//! - Convergence from an offset initial guess
//! - Explicit non-convergence reporting
//!
//! ## Test Organization
//!
//! 1. **Model Evaluation** - The Gaussian peak formula
//! 2. **Parameter Recovery** - Exact and perturbed data
//! 3. **Failure Reporting** - Non-convergence surfaces as an error

use approx::assert_relative_eq;

use continuum::internals::math::leastsq::{fit_gaussian, GaussianModel};
use continuum::internals::primitives::errors::ContinuumError;

/// Noiseless samples of a Gaussian peak on a uniform x-grid.
fn gaussian_data(amplitude: f64, center: f64, width: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let lo = center - 4.0 * width;
    let hi = center + 4.0 * width;
    let step = (hi - lo) / (n - 1) as f64;

    let model = GaussianModel {
        amplitude,
        center,
        width,
    };
    let x: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| model.eval(xi)).collect();
    (x, y)
}

// ============================================================================
// Model Evaluation Tests
// ============================================================================

/// Test the Gaussian peak formula at characteristic points.
#[test]
fn test_model_eval() {
    let model = GaussianModel {
        amplitude: 2.0f64,
        center: 1.0,
        width: 0.5,
    };

    // Peak value at the center
    assert_relative_eq!(model.eval(1.0), 2.0, epsilon = 1e-12);

    // One sigma away: amplitude * exp(-0.5)
    assert_relative_eq!(model.eval(1.5), 2.0 * (-0.5f64).exp(), epsilon = 1e-12);

    // Symmetry about the center
    assert_relative_eq!(model.eval(0.3), model.eval(1.7), epsilon = 1e-12);
}

// ============================================================================
// Parameter Recovery Tests
// ============================================================================

/// Test recovery of the generating parameters from noiseless data.
#[test]
fn test_fit_recovers_exact_parameters() {
    let (x, y) = gaussian_data(10.0, 2.0, 0.5, 41);

    let init = GaussianModel {
        amplitude: 8.0f64,
        center: 1.7,
        width: 0.8,
    };
    let fit = fit_gaussian(&x, &y, init).expect("fit should converge");

    assert_relative_eq!(fit.amplitude, 10.0, epsilon = 1e-4);
    assert_relative_eq!(fit.center, 2.0, epsilon = 1e-4);
    assert_relative_eq!(fit.width.abs(), 0.5, epsilon = 1e-4);
}

/// Test convergence from a further offset starting guess.
#[test]
fn test_fit_from_offset_guess() {
    let (x, y) = gaussian_data(5.0, -1.0, 1.5, 61);

    let init = GaussianModel {
        amplitude: 1.0f64,
        center: 0.5,
        width: 3.0,
    };
    let fit = fit_gaussian(&x, &y, init).expect("fit should converge");

    assert_relative_eq!(fit.center, -1.0, epsilon = 1e-3);
    assert_relative_eq!(fit.width.abs(), 1.5, epsilon = 1e-3);
}

/// Test that a zero starting width is nudged rather than dividing by zero.
#[test]
fn test_fit_zero_initial_width() {
    let (x, y) = gaussian_data(4.0, 0.0, 1.0, 41);

    let init = GaussianModel {
        amplitude: 4.0f64,
        center: 0.2,
        width: 0.0,
    };
    let fit = fit_gaussian(&x, &y, init).expect("fit should converge");
    assert_relative_eq!(fit.center, 0.0, epsilon = 1e-3);
}

/// Test determinism: identical inputs yield identical fits.
#[test]
fn test_fit_deterministic() {
    let (x, y) = gaussian_data(3.0, 1.0, 0.7, 31);
    let init = GaussianModel {
        amplitude: 2.0f64,
        center: 0.8,
        width: 1.0,
    };

    let a = fit_gaussian(&x, &y, init).unwrap();
    let b = fit_gaussian(&x, &y, init).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Failure Reporting Tests
// ============================================================================

/// Test that non-finite data surfaces as non-convergence.
///
/// Verifies that the fit never returns the unconverged initial guess as if
/// it were an estimate.
#[test]
fn test_fit_reports_non_convergence() {
    let x = vec![0.0f64, 1.0, 2.0, 3.0];
    let y = vec![f64::NAN; 4];

    let init = GaussianModel {
        amplitude: 1.0f64,
        center: 1.5,
        width: 1.0,
    };
    match fit_gaussian(&x, &y, init) {
        Err(ContinuumError::FitDidNotConverge { iterations }) => assert!(iterations >= 1),
        other => panic!("expected FitDidNotConverge, got {other:?}"),
    }
}
