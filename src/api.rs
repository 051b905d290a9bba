//! High-level API for continuum level determination.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: seven pure estimator
//! functions and the windowed histogram builder they are built on. Each
//! function validates its inputs and delegates to the engine.
//!
//! ## Design notes
//!
//! * **Pure fan-out**: Every function is stateless and idempotent; calls
//!   share no cache and may run concurrently over different arrays.
//! * **Validated**: The flux array and scalar parameters are checked
//!   fail-fast before any computation.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Windowed estimators**: `histogram_max`, `mean`, `median`, and
//!   `gaussian_fit` build the peak-centered histogram window internally;
//!   `percentile`, `kde_max`, and `sigma_clip` work on the raw array.
//! * **Noise coupling**: The RMS noise scalar drives the histogram bin
//!   resolution, the KDE bandwidth, and the sigma-clip bias threshold.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms;
use crate::engine::estimators;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::window::{AsymmetryClass, FluxWindow};
pub use crate::engine::output::{BiasCorrection, CentralEstimate, ClippedEstimate, GaussianEstimate};
pub use crate::primitives::errors::ContinuumError;
pub use crate::primitives::histogram::Histogram;

// ============================================================================
// Constants
// ============================================================================

/// Default sigma-clipping rejection threshold, in standard deviations.
pub const DEFAULT_CLIP_THRESHOLD: f64 = 1.8;

// ============================================================================
// Windowed Histogram Builder
// ============================================================================

/// Build the flux histogram and its peak-centered window.
///
/// The histogram spans `[min(flux), max(flux)]` with
/// `floor(spread / (2 * rms_noise))` equal-width bins; the window is
/// derived from the distribution's tail asymmetry as described in
/// [`algorithms::window`](crate::algorithms::window).
///
/// # Errors
///
/// * [`ContinuumError::EmptyFlux`] for an empty array.
/// * [`ContinuumError::InvalidNumericValue`] for NaN/Inf samples.
/// * [`ContinuumError::InvalidNoise`] for non-positive noise.
/// * [`ContinuumError::FlatFlux`] when the flux spread is below the
///   resolution of a single bin.
/// * [`ContinuumError::DegenerateWindow`] when the fallback window leaves
///   the histogram.
pub fn windowed_histogram<T: Float>(
    flux: &[T],
    rms_noise: T,
) -> Result<(Histogram<T>, FluxWindow<T>), ContinuumError> {
    Validator::validate_flux(flux)?;
    Validator::validate_noise(rms_noise)?;
    algorithms::window::build(flux, rms_noise)
}

// ============================================================================
// Estimators
// ============================================================================

/// Continuum as the flux at the maximum of the histogram distribution.
///
/// Ties between bins resolve to the lowest-flux bin.
pub fn histogram_max<T: Float>(flux: &[T], rms_noise: T) -> Result<T, ContinuumError> {
    Validator::validate_flux(flux)?;
    Validator::validate_noise(rms_noise)?;
    estimators::histogram_max(flux, rms_noise)
}

/// Continuum as the arithmetic mean of the distribution, over the full
/// array and over the peak-centered window.
pub fn mean<T: Float>(flux: &[T], rms_noise: T) -> Result<CentralEstimate<T>, ContinuumError> {
    Validator::validate_flux(flux)?;
    Validator::validate_noise(rms_noise)?;
    estimators::mean(flux, rms_noise)
}

/// Continuum as the median of the distribution, over the full array and
/// over the peak-centered window.
pub fn median<T: Float>(flux: &[T], rms_noise: T) -> Result<CentralEstimate<T>, ContinuumError> {
    Validator::validate_flux(flux)?;
    Validator::validate_noise(rms_noise)?;
    estimators::median(flux, rms_noise)
}

/// Continuum as the interpolated percentile of the full flux array.
///
/// # Errors
///
/// * [`ContinuumError::InvalidPercentile`] for a percentile outside
///   [0, 100].
pub fn percentile<T: Float>(flux: &[T], pct: T) -> Result<T, ContinuumError> {
    Validator::validate_flux(flux)?;
    Validator::validate_percentile(pct)?;
    Ok(estimators::percentile(flux, pct))
}

/// Continuum as the mode of a Gaussian kernel density estimate with
/// bandwidth `rms_noise / 10`.
///
/// The density is evaluated on a 100-point grid spanning the flux range;
/// ties resolve to the lowest grid point. Deterministic for identical
/// inputs.
pub fn kde_max<T: Float>(flux: &[T], rms_noise: T) -> Result<T, ContinuumError> {
    Validator::validate_flux(flux)?;
    Validator::validate_noise(rms_noise)?;
    Ok(estimators::kde_max(flux, rms_noise))
}

/// Continuum and noise as the center and 1-sigma width of a Gaussian
/// fitted to the histogram, both for the full histogram and for the
/// windowed sub-histogram.
///
/// # Errors
///
/// All builder errors, plus [`ContinuumError::FitDidNotConverge`] when the
/// least-squares minimizer stalls.
pub fn gaussian_fit<T: Float>(
    flux: &[T],
    rms_noise: T,
) -> Result<GaussianEstimate<T>, ContinuumError> {
    Validator::validate_flux(flux)?;
    Validator::validate_noise(rms_noise)?;
    estimators::gaussian_fit(flux, rms_noise)
}

/// Continuum and noise from iterative sigma clipping with the default
/// rejection threshold of [`DEFAULT_CLIP_THRESHOLD`] standard deviations.
///
/// Applies the asymmetric bias correction for emission- and
/// absorption-dominated spectra; the returned estimate records which
/// branch fired.
pub fn sigma_clip<T: Float>(
    flux: &[T],
    rms_noise: T,
) -> Result<ClippedEstimate<T>, ContinuumError> {
    sigma_clip_with_threshold(flux, rms_noise, T::from(DEFAULT_CLIP_THRESHOLD).unwrap())
}

/// [`sigma_clip`] with a caller-supplied rejection threshold.
pub fn sigma_clip_with_threshold<T: Float>(
    flux: &[T],
    rms_noise: T,
    threshold: T,
) -> Result<ClippedEstimate<T>, ContinuumError> {
    Validator::validate_flux(flux)?;
    Validator::validate_noise(rms_noise)?;
    Validator::validate_threshold(threshold)?;
    Ok(estimators::sigma_clip(flux, rms_noise, threshold))
}
