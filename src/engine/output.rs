//! Output types for continuum estimation.
//!
//! ## Purpose
//!
//! This module defines the result structs returned by the estimators that
//! produce more than a single scalar: the paired full/windowed central
//! estimates, the double Gaussian fit, and the bias-corrected sigma clip.
//!
//! ## Design notes
//!
//! * **Plain data**: Result structs store values; all computation happens
//!   in the estimators.
//! * **Traceability**: The sigma-clip result records which bias-correction
//!   branch fired, so callers can distinguish an emission correction from
//!   an untouched clipped mean.
//! * **Generics**: Results are generic over the scalar type and impose no
//!   trait bounds of their own.
//!
//! ## Invariants
//!
//! * Gaussian widths are non-negative (reported as 1-sigma noise levels).
//! * Every call produces a fresh, independent result; nothing is cached
//!   across calls.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization logic.

// ============================================================================
// Central Estimates
// ============================================================================

/// Paired continuum estimate from a central statistic (mean or median),
/// over the full flux array and over the peak-centered window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralEstimate<T> {
    /// Statistic over the full flux array.
    pub full: T,

    /// Statistic over the flux samples inside the window.
    pub windowed: T,
}

// ============================================================================
// Gaussian Fit Estimate
// ============================================================================

/// Continuum and noise estimates from the double Gaussian fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianEstimate<T> {
    /// Center of the Gaussian fitted to the full histogram.
    pub center: T,

    /// 1-sigma width of the Gaussian fitted to the full histogram.
    pub width: T,

    /// Center of the Gaussian fitted to the windowed sub-histogram.
    pub windowed_center: T,

    /// 1-sigma width of the Gaussian fitted to the windowed sub-histogram.
    pub windowed_width: T,
}

// ============================================================================
// Sigma-Clip Estimate
// ============================================================================

/// Bias-correction branch applied by the sigma-clip estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiasCorrection {
    /// Clipped mean reported unchanged.
    None,

    /// Emission-dominated: one clipped sigma subtracted from the mean.
    Emission,

    /// Absorption-dominated: one clipped sigma added to the mean.
    Absorption,
}

impl BiasCorrection {
    /// Get the name of the correction branch.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Emission => "Emission",
            Self::Absorption => "Absorption",
        }
    }
}

/// Continuum and noise estimate from iterative sigma clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedEstimate<T> {
    /// Bias-corrected continuum level.
    pub flux: T,

    /// 1-sigma noise of the retained samples.
    pub noise: T,

    /// Which bias-correction branch fired.
    pub correction: BiasCorrection,
}
