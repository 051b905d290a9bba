//! The battery of continuum estimators.
//!
//! ## Purpose
//!
//! This module implements the seven continuum estimators on top of the
//! windowed histogram builder and the math layer. Each estimator embodies a
//! different statistical definition of "central value of the flux
//! distribution".
//!
//! ## Design notes
//!
//! * **Stateless fan-out**: Estimators share no state and never call each
//!   other; those that need the peak-centered window invoke the builder
//!   independently.
//! * **Validated inputs**: The public API layer validates the flux array
//!   and scalar parameters before entry; estimators only surface the
//!   histogram and fit errors they can produce themselves.
//! * **Preserved heuristic**: The sigma-clip bias correction is an
//!   empirical rule from spectral-line practice; it is reproduced exactly,
//!   asymmetries included.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Full vs windowed**: Mean, median, and the Gaussian fit report both a
//!   full-array statistic and one restricted to the peak-centered window;
//!   the windowed variant is the line-resistant estimate.
//! * **Windowed seeding**: Both Gaussian fits (full and windowed) are
//!   seeded from the windowed moments, which start the minimizer near the
//!   continuum peak even when lines dominate the full histogram.
//!
//! ## Invariants
//!
//! * Given identical inputs, every estimator returns identical outputs; no
//!   estimator introduces randomness or hidden state.
//! * A non-converged Gaussian fit surfaces as an error, never as a value.
//!
//! ## Non-goals
//!
//! * This module does not validate raw inputs (see `engine::validator`).
//! * This module does not orchestrate estimator selection or fallback.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::window;
use crate::engine::output::{BiasCorrection, CentralEstimate, ClippedEstimate, GaussianEstimate};
use crate::math::kde;
use crate::math::leastsq::{fit_gaussian, GaussianModel};
use crate::math::sigclip;
use crate::math::stats;
use crate::primitives::errors::ContinuumError;

// ============================================================================
// Constants
// ============================================================================

/// Number of grid points the KDE is evaluated on.
const KDE_GRID_POINTS: usize = 100;

/// The KDE bandwidth is the RMS noise divided by this factor.
const KDE_BANDWIDTH_DIVISOR: f64 = 10.0;

// ============================================================================
// Histogram Maximum
// ============================================================================

/// Continuum as the bin-center flux at the histogram maximum.
pub fn histogram_max<T: Float>(flux: &[T], rms_noise: T) -> Result<T, ContinuumError> {
    let (hist, _window) = window::build(flux, rms_noise)?;
    Ok(hist.centers[hist.peak_index()])
}

// ============================================================================
// Mean
// ============================================================================

/// Continuum as the arithmetic mean, over the full array and over the
/// peak-centered window.
pub fn mean<T: Float>(flux: &[T], rms_noise: T) -> Result<CentralEstimate<T>, ContinuumError> {
    let (_hist, win) = window::build(flux, rms_noise)?;
    Ok(CentralEstimate {
        full: stats::mean(flux),
        windowed: stats::mean(&win.flux),
    })
}

// ============================================================================
// Median
// ============================================================================

/// Continuum as the median, over the full array and over the peak-centered
/// window.
pub fn median<T: Float>(flux: &[T], rms_noise: T) -> Result<CentralEstimate<T>, ContinuumError> {
    let (_hist, win) = window::build(flux, rms_noise)?;
    Ok(CentralEstimate {
        full: stats::median(flux),
        windowed: stats::median(&win.flux),
    })
}

// ============================================================================
// Percentile
// ============================================================================

/// Continuum as the interpolated percentile of the full flux array.
///
/// Does not build the histogram; works directly on the sample order
/// statistics.
pub fn percentile<T: Float>(flux: &[T], pct: T) -> T {
    stats::percentile(flux, pct)
}

// ============================================================================
// KDE Maximum
// ============================================================================

/// Continuum as the mode of a Gaussian kernel density estimate with
/// bandwidth `rms_noise / 10`, located on a 100-point grid spanning the
/// flux range.
pub fn kde_max<T: Float>(flux: &[T], rms_noise: T) -> T {
    let bandwidth = rms_noise / T::from(KDE_BANDWIDTH_DIVISOR).unwrap();

    let mut lo = flux[0];
    let mut hi = flux[0];
    for &f in &flux[1..] {
        if f < lo {
            lo = f;
        }
        if f > hi {
            hi = f;
        }
    }

    let grid = kde::uniform_grid(lo, hi, KDE_GRID_POINTS);
    let density = kde::density_on_grid(flux, bandwidth, &grid);
    grid[kde::argmax(&density)]
}

// ============================================================================
// Gaussian Fit
// ============================================================================

/// Continuum and noise as the center and width of a Gaussian fitted to the
/// histogram, once against the full histogram and once against the
/// windowed sub-histogram.
///
/// Both fits are seeded from the windowed moments: the full-histogram fit
/// starts at the continuum peak rather than at whatever a line feature
/// would suggest.
pub fn gaussian_fit<T: Float>(
    flux: &[T],
    rms_noise: T,
) -> Result<GaussianEstimate<T>, ContinuumError> {
    let (hist, win) = window::build(flux, rms_noise)?;

    let peak_count = hist.counts[hist.peak_index()];
    let init = GaussianModel {
        amplitude: T::from(peak_count).unwrap(),
        center: stats::mean(&win.flux),
        width: stats::std_dev(&win.flux),
    };

    let full_counts: Vec<T> = hist.counts.iter().map(|&c| T::from(c).unwrap()).collect();
    let full = fit_gaussian(&hist.centers, &full_counts, init)?;

    let win_counts: Vec<T> = win.counts.iter().map(|&c| T::from(c).unwrap()).collect();
    let windowed = fit_gaussian(&win.centers, &win_counts, init)?;

    Ok(GaussianEstimate {
        center: full.center,
        width: full.width.abs(),
        windowed_center: windowed.center,
        windowed_width: windowed.width.abs(),
    })
}

// ============================================================================
// Sigma Clip
// ============================================================================

/// Continuum and noise from iterative sigma clipping, with the asymmetric
/// bias correction for emission- and absorption-dominated spectra.
///
/// When clipping pulls the mean down by more than one RMS noise level, the
/// spectrum is emission-dominated and one clipped sigma is subtracted from
/// the clipped mean; the absorption case mirrors this. The noise output is
/// always the clipped sigma.
pub fn sigma_clip<T: Float>(flux: &[T], rms_noise: T, threshold: T) -> ClippedEstimate<T> {
    let retained = sigclip::sigma_clip(flux, threshold);

    let clipped_mean = stats::mean(&retained);
    let clipped_sigma = stats::std_dev(&retained);
    let raw_mean = stats::mean(flux);

    let shift = raw_mean - clipped_mean;
    let (value, correction) = if shift > rms_noise {
        (clipped_mean - clipped_sigma, BiasCorrection::Emission)
    } else if shift < -rms_noise {
        (clipped_mean + clipped_sigma, BiasCorrection::Absorption)
    } else {
        (clipped_mean, BiasCorrection::None)
    };

    ClippedEstimate {
        flux: value,
        noise: clipped_sigma,
        correction,
    }
}
