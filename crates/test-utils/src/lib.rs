//! Shared test utilities for the glacier-viz workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Synthetic coordinate axes, bedrock grids and outline masks
//! - A ready-made glacier visualization context
//! - Approximate float assertions
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, glacier_context};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Assert two numbers are within `epsilon` of each other. NaN never passes.
///
/// ```ignore
/// assert_approx_eq!(arrow.magnitude().unwrap(), 2.0, 1e-9);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right, epsilon) = ($left as f64, $right as f64, $epsilon as f64);
        if !((left - right).abs() <= epsilon) {
            panic!(
                "assertion failed: {} ≈ {} (|diff| = {} > {})",
                left,
                right,
                (left - right).abs(),
                epsilon
            );
        }
    }};
}

/// Macro for approximate equality of 3D points, given as anything indexable
/// by `.x`, `.y`, `.z` (e.g. `nalgebra::Point3`).
///
/// ```ignore
/// assert_point_approx_eq!(point, (5.0, 10.0, 150.0), 1e-9);
/// ```
#[macro_export]
macro_rules! assert_point_approx_eq {
    ($point:expr, ($x:expr, $y:expr, $z:expr), $epsilon:expr) => {{
        let p = $point;
        $crate::assert_approx_eq!(p.x, $x, $epsilon);
        $crate::assert_approx_eq!(p.y, $y, $epsilon);
        $crate::assert_approx_eq!(p.z, $z, $epsilon);
    }};
}
