//! Error types for continuum determination.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while estimating the
//! continuum level of a flux array, covering input validation, histogram
//! construction, and numerical non-convergence.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending
//!   noise level or the out-of-bounds window index).
//! * **Classed**: Input-validation failures and numerical non-convergence
//!   are distinct variants, so callers can reject bad inputs or fall back
//!   to a different estimator.
//! * **No-std**: Supports `no_std` environments by using `alloc` for
//!   dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, non-finite values, bad noise or
//!    percentile parameters.
//! 2. **Histogram degeneracy**: Flux spread too small for the noise-driven
//!    bin resolution, or a fallback window that leaves the histogram.
//! 3. **Non-convergence**: The Gaussian least-squares fit failed; the
//!    unconverged guess is never returned as if it were an estimate.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for continuum determination operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ContinuumError {
    /// Flux array is empty; every estimator requires at least one sample.
    EmptyFlux,

    /// Flux spread is below the histogram resolution of `2 * rms_noise`,
    /// so no histogram bin can be formed.
    FlatFlux {
        /// Observed flux spread `max - min`.
        spread: f64,
        /// Minimum spread required for a single bin.
        min_spread: f64,
    },

    /// RMS noise must be strictly positive and finite.
    InvalidNoise(f64),

    /// Percentile must lie in the range [0, 100].
    InvalidPercentile(f64),

    /// The degenerate-window fallback would index outside the histogram.
    DegenerateWindow {
        /// First selected bin index the fallback is centered on.
        first: usize,
        /// Number of bins in the histogram.
        bins: usize,
    },

    /// The Gaussian least-squares fit did not converge.
    FitDidNotConverge {
        /// Number of iterations performed before giving up.
        iterations: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ContinuumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyFlux => write!(f, "Flux array is empty"),
            Self::FlatFlux { spread, min_spread } => {
                write!(
                    f,
                    "Flux spread {spread} is below the histogram resolution {min_spread}"
                )
            }
            Self::InvalidNoise(noise) => {
                write!(f, "Invalid RMS noise: {noise} (must be > 0 and finite)")
            }
            Self::InvalidPercentile(pct) => {
                write!(f, "Invalid percentile: {pct} (must be in [0, 100])")
            }
            Self::DegenerateWindow { first, bins } => {
                write!(
                    f,
                    "Degenerate window around bin {first} falls outside the histogram ({bins} bins)"
                )
            }
            Self::FitDidNotConverge { iterations } => {
                write!(
                    f,
                    "Gaussian fit did not converge after {iterations} iterations"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ContinuumError {}
