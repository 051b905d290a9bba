//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the adaptive histogram-windowing algorithm: the
//! noise-driven histogram, the asymmetry classification of the flux
//! distribution, and the peak-centered window derivation the windowed
//! estimators consume.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Adaptive histogram windowing around the distribution peak.
pub mod window;
