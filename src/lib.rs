//! # Continuum — continuum level determination for spectral data
//!
//! Statistical determination of the continuum level of a one-dimensional
//! spectral flux array, given the per-channel RMS noise. The crate builds a
//! noise-adaptive histogram of the flux distribution, derives a
//! peak-centered window that excludes emission and absorption features, and
//! offers a battery of seven estimators of the continuum level on top.
//!
//! ## Quick Start
//!
//! ```rust
//! use continuum::prelude::*;
//!
//! // Per-channel flux samples and the known RMS noise level
//! let flux: Vec<f64> = vec![
//!     4.9, 5.1, 5.0, 4.8, 5.2, 5.0, 4.9, 5.1, 5.3, 4.7,
//!     5.0, 4.9, 5.1, 5.0, 8.4, 8.6, 5.0, 4.8, 5.2, 5.1,
//! ];
//! let rms_noise = 0.2;
//!
//! // Continuum as the median of the peak-centered window
//! let estimate = median(&flux, rms_noise)?;
//! assert!((estimate.windowed - 5.0).abs() < 0.5);
//!
//! // Continuum from sigma clipping, with the asymmetry correction
//! let clipped = sigma_clip(&flux, rms_noise)?;
//! println!("continuum = {}, noise = {}", clipped.flux, clipped.noise);
//! # Result::<(), ContinuumError>::Ok(())
//! ```
//!
//! ## Estimators
//!
//! | Function         | Definition of "continuum"                           |
//! |------------------|-----------------------------------------------------|
//! | `histogram_max`  | Flux at the maximum of the histogram                |
//! | `mean`           | Arithmetic mean (full array and windowed)           |
//! | `median`         | Median (full array and windowed)                    |
//! | `percentile`     | Caller-selected percentile of the full array        |
//! | `kde_max`        | Mode of a Gaussian kernel density estimate          |
//! | `gaussian_fit`   | Center of a Gaussian fitted to the histogram        |
//! | `sigma_clip`     | Bias-corrected mean after iterative outlier rejection |
//!
//! Every function is pure and deterministic: identical inputs yield
//! identical outputs, no state is shared between calls, and callers may
//! run estimators concurrently over different arrays.
//!
//! ## Error Handling
//!
//! All entry points return `Result<_, ContinuumError>`. Input-validation
//! failures (empty or non-finite flux, non-positive noise, out-of-range
//! percentile, flux spread below the histogram resolution) are distinct
//! from numerical non-convergence of the Gaussian fit, so callers can
//! reject bad inputs or fall back to a different estimator.
//!
//! ```rust
//! use continuum::prelude::*;
//!
//! let flux = vec![1.0, 1.0, 1.0, 1.0];
//! match median(&flux, 0.3) {
//!     Err(ContinuumError::FlatFlux { .. }) => { /* near-constant spectrum */ }
//!     other => panic!("expected FlatFlux, got {other:?}"),
//! }
//! ```
//!
//! ## References
//!
//! - Sanchez-Monge, A. et al. (2018). "STATCONT: A statistical continuum
//!   level determination method for line-rich sources"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - histogram and error types.
mod primitives;

// Layer 2: Math - pure numerical routines.
mod math;

// Layer 3: Algorithms - adaptive histogram windowing.
mod algorithms;

// Layer 4: Engine - validation, outputs, and the estimators.
mod engine;

// High-level API: the seven estimators and the windowed histogram builder.
mod api;

// Standard continuum prelude.
pub mod prelude {
    pub use crate::api::{
        gaussian_fit, histogram_max, kde_max, mean, median, percentile, sigma_clip,
        sigma_clip_with_threshold, windowed_histogram, AsymmetryClass, BiasCorrection,
        CentralEstimate, ClippedEstimate, ContinuumError, FluxWindow, GaussianEstimate,
        Histogram, DEFAULT_CLIP_THRESHOLD,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
