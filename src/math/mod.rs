//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numerical routines with no domain-specific
//! logic:
//! - Descriptive statistics (mean, sigma, median, percentile)
//! - Gaussian kernel density estimation
//! - Nonlinear least squares for the Gaussian peak model
//! - Iterative sigma clipping
//!
//! These are reusable mathematical building blocks; the continuum-specific
//! decisions (bin counts, window shapes, bias corrections) live above.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Descriptive statistics (mean, sigma, median, percentile).
pub mod stats;

/// Gaussian kernel density estimation.
pub mod kde;

/// Levenberg-Marquardt fit of the Gaussian peak model.
pub mod leastsq;

/// Iterative sigma clipping.
pub mod sigclip;
