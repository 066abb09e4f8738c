// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` assertion macros, which handle floating-point
//! precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Tolerance for geometry that should match "exactly" after a few
/// trigonometric round trips.
pub const GEOMETRY_EPSILON: f64 = 1e-9;
