//! Tests for the prelude module.
//!
//! Verifies that a single glob import brings in every name needed to run
//! the full estimator battery.

use continuum::prelude::*;

/// Test the prelude exposes the estimators, output types, and errors.
#[test]
fn test_prelude_provides_full_api() {
    let flux = vec![
        4.0f64, 4.2, 4.4, 4.6, 4.8, 5.0, 5.0, 5.2, 5.4, 5.6, 5.8, 6.0,
    ];
    let rms = 0.2;

    let (hist, win): (Histogram<f64>, FluxWindow<f64>) =
        windowed_histogram(&flux, rms).unwrap();
    assert!(hist.len() >= 1);
    assert!(win.contains(hist.peak_index()));

    let _: f64 = histogram_max(&flux, rms).unwrap();
    let m: CentralEstimate<f64> = mean(&flux, rms).unwrap();
    let _: CentralEstimate<f64> = median(&flux, rms).unwrap();
    let _: f64 = percentile(&flux, 25.0).unwrap();
    let _: f64 = kde_max(&flux, rms).unwrap();
    let g: GaussianEstimate<f64> = gaussian_fit(&flux, rms).unwrap();
    let c: ClippedEstimate<f64> = sigma_clip(&flux, rms).unwrap();
    let _: ClippedEstimate<f64> = sigma_clip_with_threshold(&flux, rms, 2.0).unwrap();

    assert!(m.full > 4.0 && m.full < 6.0);
    assert!(g.width >= 0.0);
    assert!(matches!(
        c.correction,
        BiasCorrection::None | BiasCorrection::Emission | BiasCorrection::Absorption
    ));
    assert!(DEFAULT_CLIP_THRESHOLD > 0.0);

    // Error and classification types are importable too
    let err: ContinuumError = histogram_max(&[] as &[f64], rms).unwrap_err();
    assert_eq!(err, ContinuumError::EmptyFlux);
    assert_eq!(AsymmetryClass::classify(0.5f64), AsymmetryClass::Symmetric);
}
