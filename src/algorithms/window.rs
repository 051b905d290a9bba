//! Adaptive histogram windowing around the flux distribution peak.
//!
//! ## Purpose
//!
//! This module converts a raw flux distribution into a peak-centered
//! sub-range: it builds a histogram whose resolution is tied to the noise
//! level, classifies the distribution's asymmetry from where its zero-count
//! edges fall relative to the peak, and derives an asymmetric bin window
//! from that classification.
//!
//! ## Design notes
//!
//! * **Noise-driven bins**: The bin count is `floor(spread / (2 * rms))`;
//!   coarser noise yields fewer, wider bins. A spread below the resolution
//!   of a single bin is an error, never a silent 0-bin histogram.
//! * **Asymmetric window**: An emission-dominated distribution has its
//!   zero-count envelope stretched to the right of the peak, so the window
//!   reaches further left (8 bins) than right (4 bins) to stay on the
//!   continuum; absorption mirrors this, and the symmetric case takes 5
//!   bins each side.
//! * **Threshold tie-break**: A ratio exactly at 0.66 classifies as
//!   emission-dominated and exactly at 0.33 as absorption-dominated; the
//!   symmetric branch covers the open interval between them.
//! * **Degenerate fallback**: When fewer than 3 bins land in the window, a
//!   fixed 5-bin window is forced around the first selected bin. A fallback
//!   that would leave the histogram raises
//!   [`ContinuumError::DegenerateWindow`] rather than clamping or wrapping.
//!
//! ## Key concepts
//!
//! * **Zero-count edges**: The nearest empty bin on each side of the peak
//!   (or the histogram edge when none exists) bounds the populated core of
//!   the distribution.
//! * **Emission/absorption ratio**: The right edge distance over the total
//!   edge distance, in [0, 1]. Large values mean the distribution extends
//!   farther right of the peak (emission-like tail).
//!
//! ## Invariants
//!
//! * The window always contains the peak index.
//! * The window spans at least 3 bins.
//! * `flux` holds exactly the samples whose value lies in the final
//!   `[lower, upper]` interval, selected from the original array by value.
//!
//! ## Non-goals
//!
//! * This module does not validate the flux array or noise scalar (done by
//!   the engine validator before entry).
//! * This module does not compute continuum statistics over the window.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ContinuumError;
use crate::primitives::histogram::Histogram;

// ============================================================================
// Constants
// ============================================================================

/// Ratio at or above which a distribution is emission-dominated.
const EMISSION_THRESHOLD: f64 = 0.66;

/// Ratio at or below which a distribution is absorption-dominated.
const ABSORPTION_THRESHOLD: f64 = 0.33;

/// Minimum number of bins a usable window must span.
const MIN_WINDOW_BINS: usize = 3;

/// Half-width (in bins) of the forced fallback window.
const FALLBACK_HALF_WIDTH: usize = 2;

// ============================================================================
// Asymmetry Classification
// ============================================================================

/// Classification of the flux distribution's tail asymmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsymmetryClass {
    /// Distribution extends farther right of the peak (positive excursions).
    EmissionDominated,

    /// Distribution extends farther left of the peak (negative excursions).
    AbsorptionDominated,

    /// No dominant tail on either side.
    Symmetric,
}

impl AsymmetryClass {
    /// Classify from the emission/absorption ratio.
    ///
    /// Boundary values resolve to the asymmetric branches: exactly 0.66 is
    /// emission-dominated, exactly 0.33 absorption-dominated.
    pub fn classify<T: Float>(ratio: T) -> Self {
        if ratio >= T::from(EMISSION_THRESHOLD).unwrap() {
            Self::EmissionDominated
        } else if ratio <= T::from(ABSORPTION_THRESHOLD).unwrap() {
            Self::AbsorptionDominated
        } else {
            Self::Symmetric
        }
    }

    /// Window half-widths `(left, right)` from the peak, in bin units.
    ///
    /// The window reaches away from the dominant tail: an emission tail on
    /// the right pushes the window left, and vice versa.
    pub const fn half_widths(&self) -> (f64, f64) {
        match self {
            Self::EmissionDominated => (8.0, 4.0),
            Self::AbsorptionDominated => (4.0, 8.0),
            Self::Symmetric => (5.0, 5.0),
        }
    }

    /// Get the name of the classification.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EmissionDominated => "EmissionDominated",
            Self::AbsorptionDominated => "AbsorptionDominated",
            Self::Symmetric => "Symmetric",
        }
    }
}

// ============================================================================
// Flux Window
// ============================================================================

/// Peak-centered sub-window of a flux histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct FluxWindow<T> {
    /// Left window boundary (inclusive bin index).
    pub left: usize,

    /// Right window boundary (inclusive bin index).
    pub right: usize,

    /// Bin centers of the windowed sub-histogram.
    pub centers: Vec<T>,

    /// Bin counts of the windowed sub-histogram.
    pub counts: Vec<usize>,

    /// Flux samples whose value lies in the window's flux interval,
    /// in input order.
    pub flux: Vec<T>,

    /// Tail asymmetry classification the window was derived from.
    pub asymmetry: AsymmetryClass,

    /// Emission/absorption ratio in [0, 1].
    pub ratio: T,
}

impl<T> FluxWindow<T> {
    /// Whether the window contains the given bin index.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.left <= idx && idx <= self.right
    }

    /// Number of bins in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// Windows always span at least [`MIN_WINDOW_BINS`] bins.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

// ============================================================================
// Windowed Histogram Builder
// ============================================================================

/// Build the full flux histogram and its peak-centered window.
///
/// The caller guarantees a non-empty, finite flux array and a strictly
/// positive noise scalar; both are enforced upstream by the validator.
pub fn build<T: Float>(
    flux: &[T],
    rms_noise: T,
) -> Result<(Histogram<T>, FluxWindow<T>), ContinuumError> {
    debug_assert!(!flux.is_empty(), "build: flux must be non-empty");
    debug_assert!(rms_noise > T::zero(), "build: rms_noise must be positive");

    // Step 1: noise-driven bin count.
    let (lo, hi) = min_max(flux);
    let spread = hi - lo;
    let min_spread = (T::one() + T::one()) * rms_noise;
    let n_bins = (spread / min_spread)
        .floor()
        .to_usize()
        .unwrap_or(0);
    if n_bins < 1 {
        return Err(ContinuumError::FlatFlux {
            spread: spread.to_f64().unwrap_or(f64::NAN),
            min_spread: min_spread.to_f64().unwrap_or(f64::NAN),
        });
    }

    // Step 2-3: histogram and peak.
    let hist = Histogram::from_samples(flux, n_bins);
    let peak = hist.peak_index();

    // Step 4: zero-count edges on each side of the peak.
    let left_edge = hist.zero_edge_left(peak);
    let right_edge = hist.zero_edge_right(peak);

    // Step 5: how lopsided the zero-count envelope is around the peak.
    let right_dist = right_edge - peak;
    let left_dist = peak - left_edge;
    let total = right_dist + left_dist;
    let ratio = if total == 0 {
        // Peak pinned against both edges; no tail information either way.
        T::from(0.5).unwrap()
    } else {
        T::from(right_dist).unwrap() / T::from(total).unwrap()
    };

    // Step 6: classification and flux-space window bounds.
    let asymmetry = AsymmetryClass::classify(ratio);
    let (half_left, half_right) = asymmetry.half_widths();
    let peak_center = hist.centers[peak];
    let width = hist.bin_width();
    let mut lower = peak_center - T::from(half_left).unwrap() * width;
    let mut upper = peak_center + T::from(half_right).unwrap() * width;

    // Step 7: contiguous run of bins whose center falls inside the bounds.
    // The peak center is always inside, so the run is non-empty.
    let mut first = peak;
    while first > 0 && hist.centers[first - 1] >= lower {
        first -= 1;
    }
    let mut last = peak;
    while last + 1 < n_bins && hist.centers[last + 1] <= upper {
        last += 1;
    }

    // Step 8: degenerate-window fallback.
    if last - first + 1 < MIN_WINDOW_BINS {
        if first < FALLBACK_HALF_WIDTH || first + FALLBACK_HALF_WIDTH >= n_bins {
            return Err(ContinuumError::DegenerateWindow {
                first,
                bins: n_bins,
            });
        }
        last = first + FALLBACK_HALF_WIDTH;
        first -= FALLBACK_HALF_WIDTH;
        lower = hist.centers[first];
        upper = hist.centers[last];
    }

    // Step 9: flux samples selected by value against the final interval.
    let mut selected = Vec::new();
    for &f in flux {
        if f >= lower && f <= upper {
            selected.push(f);
        }
    }

    let window = FluxWindow {
        left: first,
        right: last,
        centers: hist.centers[first..=last].to_vec(),
        counts: hist.counts[first..=last].to_vec(),
        flux: selected,
        asymmetry,
        ratio,
    };

    Ok((hist, window))
}

// ============================================================================
// Helpers
// ============================================================================

/// Minimum and maximum of a non-empty slice.
fn min_max<T: Float>(vals: &[T]) -> (T, T) {
    let mut lo = vals[0];
    let mut hi = vals[0];
    for &v in &vals[1..] {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    (lo, hi)
}
