//! Foundation types shared by every layer: core geometry records, the
//! crate-wide error type, and deterministic math helpers.

/// Core value types (canvas, fps, segments).
pub mod core;
/// Crate-wide error and result types.
pub mod error;
/// Seedable RNG and angle helpers.
pub mod math;
