//! Iterative sigma clipping.
//!
//! ## Purpose
//!
//! This module provides iterative outlier rejection: samples further than a
//! threshold number of standard deviations from the running mean are
//! discarded, and the statistics recomputed, until the retained set
//! stabilizes.
//!
//! ## Design notes
//!
//! * **Mean-centered**: Each pass recomputes mean and population sigma of
//!   the retained set; rejection is symmetric about the mean.
//! * **To convergence**: Iteration stops only when a pass rejects nothing.
//!   The retained set shrinks strictly on every other pass, so termination
//!   is guaranteed.
//! * **Zero sigma**: A retained set with zero sigma is fully converged
//!   (every sample equals the mean) and is returned as-is.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The retained set is a subset of the input and is never empty for
//!   non-empty input.
//! * Output order follows input order.
//!
//! ## Non-goals
//!
//! * This module does not apply the emission/absorption bias correction
//!   (done by the sigma-clip estimator).
//! * This module does not validate the threshold (done by the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::stats::{mean, std_dev};

// ============================================================================
// Sigma Clipping
// ============================================================================

/// Iteratively reject samples beyond `threshold` standard deviations from
/// the running mean, to convergence.
///
/// Returns the retained samples in input order.
pub fn sigma_clip<T: Float>(samples: &[T], threshold: T) -> Vec<T> {
    let mut retained: Vec<T> = samples.to_vec();

    loop {
        if retained.len() <= 1 {
            return retained;
        }

        let center = mean(&retained);
        let sigma = std_dev(&retained);
        if sigma <= T::zero() {
            return retained;
        }

        let bound = threshold * sigma;
        let before = retained.len();
        retained.retain(|&v| (v - center).abs() <= bound);

        if retained.len() == before {
            return retained;
        }
    }
}
