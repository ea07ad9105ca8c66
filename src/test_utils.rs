// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Offsets, heights and animation frames are `f32`; compare them with the
//! `approx` macros re-exported here rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Epsilon for `f32` values that should match exactly up to rounding.
pub const F32_EPSILON: f32 = 1e-6;
