//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer hosts input validation, the typed result structs, and the
//! estimator implementations that tie the windowing algorithm and the math
//! layer together.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast input validation.
pub mod validator;

/// Typed result structs.
pub mod output;

/// The battery of continuum estimators.
pub mod estimators;
