//! Basic descriptive statistics.
//!
//! ## Purpose
//!
//! This module provides the scalar statistics the estimators are built
//! from: arithmetic mean, population standard deviation, median, and
//! interpolated percentile.
//!
//! ## Design notes
//!
//! * **Quickselect**: The median uses `select_nth_unstable_by` for O(n)
//!   performance instead of a full sort.
//! * **Population sigma**: `std` divides by `n`, not `n - 1`; the windowed
//!   estimators treat the sample set as the full population of interest.
//! * **Linear interpolation**: `percentile` interpolates between the two
//!   nearest order statistics, so percentile 50 reproduces the median.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * All functions are deterministic and side-effect free.
//! * Empty input returns zero rather than NaN; callers validate emptiness
//!   before reaching this layer.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs.
//! * This module does not implement robust (outlier-resistant) statistics;
//!   see `math::sigclip` for iterative rejection.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Moments
// ============================================================================

/// Arithmetic mean of `vals`.
pub fn mean<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let mut sum = T::zero();
    for &v in vals {
        sum = sum + v;
    }
    sum / T::from(vals.len()).unwrap()
}

/// Population standard deviation of `vals` (divides by `n`).
pub fn std_dev<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let m = mean(vals);
    let mut sum_sq = T::zero();
    for &v in vals {
        let d = v - m;
        sum_sq = sum_sq + d * d;
    }
    (sum_sq / T::from(vals.len()).unwrap()).sqrt()
}

// ============================================================================
// Order Statistics
// ============================================================================

/// Median of `vals`, computed in-place using Quickselect.
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;

    if n % 2 == 0 {
        // Even length: average of the two middle values
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        let upper = vals[mid];

        // Largest value in the lower half
        let mut lower = vals[0];
        let mut i = 1;
        while i < mid {
            if vals[i] > lower {
                lower = vals[i];
            }
            i += 1;
        }

        (lower + upper) / T::from(2.0).unwrap()
    } else {
        // Odd length: middle value
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        vals[mid]
    }
}

/// Median of `vals` without mutating the input.
pub fn median<T: Float>(vals: &[T]) -> T {
    let mut scratch: Vec<T> = vals.to_vec();
    median_inplace(&mut scratch)
}

/// Interpolated percentile of `vals` at `pct` in [0, 100].
///
/// Uses the linear interpolation convention: the target order statistic is
/// `pct / 100 * (n - 1)`, interpolated between its two neighbors. The
/// caller guarantees `pct` is in range and `vals` is non-empty.
pub fn percentile<T: Float>(vals: &[T], pct: T) -> T {
    debug_assert!(!vals.is_empty(), "percentile: vals must be non-empty");

    let mut sorted: Vec<T> = vals.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let hundred = T::from(100.0).unwrap();
    let rank = pct / hundred * T::from(n - 1).unwrap();
    let lo = rank.floor();
    let frac = rank - lo;
    let lo_idx = lo.to_usize().unwrap_or(0).min(n - 1);
    let hi_idx = (lo_idx + 1).min(n - 1);

    sorted[lo_idx] + (sorted[hi_idx] - sorted[lo_idx]) * frac
}
