//! Input validation for continuum estimation.
//!
//! ## Purpose
//!
//! This module provides validation functions for the flux array and the
//! scalar parameters of the estimators. It checks requirements such as
//! non-empty input, finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like percentile in [0, 100]
//!   and strictly positive noise.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the estimation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ContinuumError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for continuum estimator inputs.
///
/// Provides static methods for validating the flux array and scalar
/// parameters. All methods return `Result<(), ContinuumError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the flux array.
    pub fn validate_flux<T: Float>(flux: &[T]) -> Result<(), ContinuumError> {
        // Check 1: Non-empty array
        if flux.is_empty() {
            return Err(ContinuumError::EmptyFlux);
        }

        // Check 2: All values finite
        for (i, &f) in flux.iter().enumerate() {
            if !f.is_finite() {
                return Err(ContinuumError::InvalidNumericValue(format!(
                    "flux[{}]={}",
                    i,
                    f.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the RMS noise scalar.
    pub fn validate_noise<T: Float>(rms_noise: T) -> Result<(), ContinuumError> {
        if !rms_noise.is_finite() || rms_noise <= T::zero() {
            return Err(ContinuumError::InvalidNoise(
                rms_noise.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the percentile parameter.
    pub fn validate_percentile<T: Float>(pct: T) -> Result<(), ContinuumError> {
        if !pct.is_finite() || pct < T::zero() || pct > T::from(100.0).unwrap() {
            return Err(ContinuumError::InvalidPercentile(
                pct.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the sigma-clipping threshold.
    pub fn validate_threshold<T: Float>(threshold: T) -> Result<(), ContinuumError> {
        if !threshold.is_finite() || threshold <= T::zero() {
            return Err(ContinuumError::InvalidNumericValue(format!(
                "sigma_clip_threshold={}",
                threshold.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }
}
