//! Curve sampler: profile function → ordered polyline.

use std::f64::consts::PI;

use nosecone_math::{lerp_at, Tolerance};
use serde::{Deserialize, Serialize};

use crate::curve::{haack_radius, radius_at};
use crate::{DomainError, ProfileFamily, ProfileSpec};

/// Minimum supported sampling step count.
pub const MIN_STEPS: usize = 8;

/// One sampled point of a profile curve: radius at an axial position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Radius (mm), ≥ 0.
    pub r: f64,
    /// Axial position (mm), measured from the base.
    pub z: f64,
}

/// An ordered sequence of profile points with strictly increasing axial
/// position, from the base (z = 0) to the tip (z = length).
///
/// Invariants, maintained by the sampler: the first point carries the base
/// radius, the last point radius is ≈ 0 unless the profile is explicitly
/// blunt, and no radius is negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<ProfilePoint>,
}

impl Polyline {
    /// Build a polyline from raw points, checking the ordering invariant.
    ///
    /// # Errors
    ///
    /// `DomainError::AxialOutOfRange` if the z sequence is not strictly
    /// increasing, `DomainError::NonPositiveRadius` for negative radii.
    pub fn new(points: Vec<ProfilePoint>) -> Result<Self, DomainError> {
        for pair in points.windows(2) {
            if pair[1].z <= pair[0].z {
                return Err(DomainError::AxialOutOfRange {
                    z: pair[1].z,
                    length: pair[0].z,
                });
            }
        }
        if let Some(p) = points.iter().find(|p| p.r < 0.0) {
            return Err(DomainError::NonPositiveRadius(p.r));
        }
        Ok(Self { points })
    }

    /// The sampled points, base to tip.
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the polyline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First (base) point.
    ///
    /// # Panics
    ///
    /// Panics if the polyline is empty. A hollow solid's cavity polyline
    /// may be empty; check [`Polyline::is_empty`] before calling.
    pub fn first(&self) -> ProfilePoint {
        self.points[0]
    }

    /// Last (tip) point.
    ///
    /// # Panics
    ///
    /// Panics if the polyline is empty; see [`Polyline::first`].
    pub fn last(&self) -> ProfilePoint {
        self.points[self.points.len() - 1]
    }

    /// Axial extent from first to last point.
    pub fn length(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.last().z - self.first().z
    }

    /// Smallest radius over all points.
    pub fn min_radius(&self) -> f64 {
        self.points.iter().map(|p| p.r).fold(f64::INFINITY, f64::min)
    }

    /// Axial positions as a contiguous vector.
    pub fn zs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.z).collect()
    }

    /// Radii as a contiguous vector.
    pub fn radii(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.r).collect()
    }

    /// Linearly interpolated radius at an arbitrary axial position,
    /// clamped to the sampled range.
    pub fn radius_at_z(&self, z: f64) -> f64 {
        lerp_at(&self.zs(), &self.radii(), z)
    }
}

/// Discretize a profile into a polyline of `steps + 1` points.
///
/// The z-parametrized families sample uniformly in z with both endpoints
/// exact. The Von Kármán family samples uniformly in its parameter angle θ,
/// so its z spacing is intentionally non-uniform; the closed-form metrics
/// assume exactly this distribution, so it is never resampled to uniform z.
/// The rounded conical family splits the point budget between the straight
/// taper and the tip arc in proportion to their axial extents.
///
/// # Errors
///
/// `DomainError::TooFewSteps` for `steps < 8`, or any spec validation error.
pub fn sample(spec: &ProfileSpec, steps: usize) -> Result<Polyline, DomainError> {
    if steps < MIN_STEPS {
        return Err(DomainError::TooFewSteps(steps));
    }
    spec.validate()?;

    let tol = Tolerance::DEFAULT;
    let points = match spec.family {
        ProfileFamily::VonKarman => sample_von_karman(spec, steps),
        ProfileFamily::Conical if !tol.is_zero(spec.tip_radius()) => {
            sample_rounded_cone(spec, steps)
        }
        _ => sample_uniform_z(spec, steps)?,
    };
    Polyline::new(points)
}

fn sample_uniform_z(spec: &ProfileSpec, steps: usize) -> Result<Vec<ProfilePoint>, DomainError> {
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let z = if i == steps {
            spec.length
        } else {
            spec.length * i as f64 / steps as f64
        };
        points.push(ProfilePoint {
            r: radius_at(spec, z)?,
            z,
        });
    }
    Ok(points)
}

fn sample_von_karman(spec: &ProfileSpec, steps: usize) -> Vec<ProfilePoint> {
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        // θ runs π → 0; z(θ) = L·(1 + cos θ)/2 runs 0 → L.
        let theta = PI * (steps - i) as f64 / steps as f64;
        let z = if i == steps {
            spec.length
        } else {
            spec.length * (1.0 + theta.cos()) / 2.0
        };
        points.push(ProfilePoint {
            r: haack_radius(spec.base_radius, theta),
            z,
        });
    }
    points
}

fn sample_rounded_cone(spec: &ProfileSpec, steps: usize) -> Vec<ProfilePoint> {
    let t = spec.tip_radius();
    let straight = spec.length - t;

    // Split intervals proportionally; both sections keep at least one.
    let n_arc = ((steps as f64 * t / spec.length).round() as usize).clamp(1, steps - 1);
    let n_straight = steps - n_arc;

    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=n_straight {
        let z = straight * i as f64 / n_straight as f64;
        let r = spec.base_radius + (t - spec.base_radius) * z / straight;
        points.push(ProfilePoint { r, z });
    }
    for j in 1..=n_arc {
        // Quarter circle sampled uniformly in arc angle.
        let theta = (PI / 2.0) * j as f64 / n_arc as f64;
        let z = if j == n_arc {
            spec.length
        } else {
            straight + t * theta.sin()
        };
        points.push(ProfilePoint {
            r: t * theta.cos(),
            z,
        });
    }
    points
}
