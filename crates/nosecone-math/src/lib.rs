#![warn(missing_docs)]

//! Math types for the nosecone geometry kernel.
//!
//! Thin wrappers around nalgebra providing the 2D profile-plane types,
//! tolerance constants, and the trapezoidal integration helpers shared by
//! the curve sampler and the metrics engine.

use nalgebra::{Vector2, Vector3};

/// A point in the 2D profile plane (radius, axial position).
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in the 2D profile plane.
pub type Vec2 = Vector2<f64>;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in mm.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-6 mm linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        angular: 1e-9,
    };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two scalar values are effectively equal.
    pub fn values_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Trapezoidal integral of `f` sampled at the (not necessarily uniform)
/// stations `x`.
///
/// `x` and `f` must have equal length; fewer than two samples integrate
/// to zero.
pub fn trapezoid(x: &[f64], f: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), f.len());
    x.windows(2)
        .zip(f.windows(2))
        .map(|(xs, fs)| 0.5 * (fs[0] + fs[1]) * (xs[1] - xs[0]))
        .sum()
}

/// Central finite-difference derivative df/dx at every station.
///
/// One-sided differences at the endpoints, matching `numpy.gradient`
/// behavior on non-uniform grids.
pub fn gradient(x: &[f64], f: &[f64]) -> Vec<f64> {
    debug_assert_eq!(x.len(), f.len());
    let n = x.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let mut out = Vec::with_capacity(n);
    out.push((f[1] - f[0]) / (x[1] - x[0]));
    for i in 1..n - 1 {
        let h1 = x[i] - x[i - 1];
        let h2 = x[i + 1] - x[i];
        // Weighted central difference for non-uniform spacing.
        let d = (f[i + 1] * h1 * h1 - f[i - 1] * h2 * h2 + f[i] * (h2 * h2 - h1 * h1))
            / (h1 * h2 * (h1 + h2));
        out.push(d);
    }
    out.push((f[n - 1] - f[n - 2]) / (x[n - 1] - x[n - 2]));
    out
}

/// Linear interpolation of a sampled function at `x`.
///
/// `xs` must be strictly increasing. Values outside the sampled range
/// clamp to the nearest endpoint.
pub fn lerp_at(xs: &[f64], fs: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), fs.len());
    debug_assert!(!xs.is_empty());
    if x <= xs[0] {
        return fs[0];
    }
    if x >= xs[xs.len() - 1] {
        return fs[fs.len() - 1];
    }
    // partition_point: first index with xs[i] > x
    let hi = xs.partition_point(|&v| v <= x);
    let lo = hi - 1;
    let t = (x - xs[lo]) / (xs[hi] - xs[lo]);
    fs[lo] + t * (fs[hi] - fs[lo])
}
