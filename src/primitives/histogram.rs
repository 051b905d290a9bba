//! Equal-width histogram over a flux array.
//!
//! ## Purpose
//!
//! This module provides the histogram primitive that underlies the windowed
//! continuum estimators: equal-width binning of a sample array over its full
//! range, with peak and zero-count queries.
//!
//! ## Design notes
//!
//! * **Bin centers**: Bins are stored by center value (edge midpoints),
//!   ascending and equally spaced, so the window derivation can work in
//!   flux units directly.
//! * **Closed upper edge**: Samples equal to the range maximum land in the
//!   last bin rather than forming a phantom overflow bin.
//! * **First-index peak**: When several bins tie for the maximum count, the
//!   lowest-flux bin wins, via a plain linear scan.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `centers` and `counts` have the same length.
//! * `counts` sums to the number of input samples.
//! * `bin_width` is strictly positive.
//!
//! ## Non-goals
//!
//! * This module does not choose the bin count (done by the window builder).
//! * This module does not validate the input array (done by the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Histogram
// ============================================================================

/// Equal-width histogram of a one-dimensional sample array.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<T> {
    /// Bin center values, ascending and equally spaced.
    pub centers: Vec<T>,

    /// Sample count per bin, aligned 1:1 with `centers`.
    pub counts: Vec<usize>,

    /// Width of each bin in flux units.
    bin_width: T,
}

impl<T: Float> Histogram<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Bin `samples` into `n_bins` equal-width bins spanning
    /// `[min(samples), max(samples)]`.
    ///
    /// The caller guarantees a non-empty array with positive spread and
    /// `n_bins >= 1`; both are enforced upstream by the validator and the
    /// window builder.
    pub fn from_samples(samples: &[T], n_bins: usize) -> Self {
        debug_assert!(n_bins >= 1, "from_samples: n_bins must be at least 1");
        debug_assert!(!samples.is_empty(), "from_samples: samples must be non-empty");

        let mut lo = samples[0];
        let mut hi = samples[0];
        for &s in &samples[1..] {
            if s < lo {
                lo = s;
            }
            if s > hi {
                hi = s;
            }
        }

        let n_t = T::from(n_bins).unwrap();
        let bin_width = (hi - lo) / n_t;

        let mut counts = vec![0usize; n_bins];
        for &s in samples {
            let mut idx = ((s - lo) / bin_width)
                .floor()
                .to_usize()
                .unwrap_or(n_bins - 1);
            // The range maximum belongs to the last bin.
            if idx >= n_bins {
                idx = n_bins - 1;
            }
            counts[idx] += 1;
        }

        let half = bin_width / T::from(2.0).unwrap();
        let mut centers = Vec::with_capacity(n_bins);
        for i in 0..n_bins {
            centers.push(lo + bin_width * T::from(i).unwrap() + half);
        }

        Self {
            centers,
            counts,
            bin_width,
        }
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of bins.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the histogram has no bins.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Width of each bin in flux units.
    #[inline]
    pub fn bin_width(&self) -> T {
        self.bin_width
    }

    /// Index of the histogram maximum.
    ///
    /// When several bins tie for the maximum count, the lowest index
    /// (lowest flux) is returned.
    pub fn peak_index(&self) -> usize {
        let mut peak = 0;
        let mut best = self.counts[0];
        for (i, &c) in self.counts.iter().enumerate().skip(1) {
            if c > best {
                best = c;
                peak = i;
            }
        }
        peak
    }

    /// Highest zero-count bin index at or below `peak`, or 0 when the
    /// distribution touches the lower edge of the range.
    pub fn zero_edge_left(&self, peak: usize) -> usize {
        let mut i = peak;
        loop {
            if self.counts[i] == 0 {
                return i;
            }
            if i == 0 {
                return 0;
            }
            i -= 1;
        }
    }

    /// Lowest zero-count bin index at or above `peak`, or the last index
    /// when the distribution touches the upper edge of the range.
    pub fn zero_edge_right(&self, peak: usize) -> usize {
        let last = self.len() - 1;
        let mut i = peak;
        while i <= last {
            if self.counts[i] == 0 {
                return i;
            }
            i += 1;
        }
        last
    }
}
