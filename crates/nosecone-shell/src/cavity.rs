//! Cavity boundary derivation: inward offset with linear thinning.

use nosecone_math::Tolerance;
use nosecone_profile::{Polyline, ProfilePoint};
use serde::{Deserialize, Serialize};

use crate::{HollowingStrategy, ShellError};

/// Wall thickness policy for hollowing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellSpec {
    /// Wall thickness at the base (mm), > 0.
    pub thickness: f64,
    /// Thinning factor in `(0, 1]`: 1 keeps the thickness uniform, smaller
    /// values taper it linearly toward the tip.
    pub thinning_factor: f64,
}

impl ShellSpec {
    /// Create a validated shell spec.
    pub fn new(thickness: f64, thinning_factor: f64) -> Result<Self, ShellError> {
        let spec = Self {
            thickness,
            thinning_factor,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check the numeric invariants.
    pub fn validate(&self) -> Result<(), ShellError> {
        if !(self.thickness > 0.0) {
            return Err(ShellError::InvalidThickness(self.thickness));
        }
        if !(self.thinning_factor > 0.0 && self.thinning_factor <= 1.0) {
            return Err(ShellError::InvalidThinning(self.thinning_factor));
        }
        Ok(())
    }

    /// Effective wall thickness at axial position `z` of a profile with
    /// the given total length.
    pub fn thickness_at(&self, z: f64, length: f64) -> f64 {
        self.thickness * (1.0 - (1.0 - self.thinning_factor) * z / length)
    }
}

/// A contiguous axial span over which the requested wall policy could not
/// open a cavity and the body was left solid.
///
/// Non-fatal: the shape is still produced, but the caller must be told the
/// geometry deviates from the requested wall policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThinWallWarning {
    /// Start of the solid span (mm).
    pub z_start: f64,
    /// End of the solid span (mm).
    pub z_end: f64,
}

/// Result of cavity derivation: the inner boundary plus any thin-wall spans.
#[derive(Debug, Clone, PartialEq)]
pub struct CavityResult {
    /// Inner (cavity) polyline. Empty when the wall policy leaves no room
    /// for a cavity at all.
    pub inner: Polyline,
    /// Thin-wall spans, in increasing axial order.
    pub warnings: Vec<ThinWallWarning>,
}

/// Derive the cavity boundary from the outer polyline.
///
/// For every outer point `(r, z)` the inner radius is
/// `max(0, r − t(z))` with `t(z)` from [`ShellSpec::thickness_at`]. The
/// strategy controls where the cavity closes: `Ribbed` stops while the
/// remaining wall still exceeds one extra thickness, `Aggressive` runs
/// until the wall clamps to zero. The solid plug above the closure station
/// is a deliberate part of both strategies; a [`ThinWallWarning`] is
/// raised only when the policy leaves no cavity at all, spanning the full
/// profile, and is never silently swallowed.
pub fn build_cavity(
    outer: &Polyline,
    spec: &ShellSpec,
    strategy: HollowingStrategy,
) -> Result<CavityResult, ShellError> {
    spec.validate()?;
    let tol = Tolerance::DEFAULT;
    let length = outer.length();

    let mut inner: Vec<ProfilePoint> = Vec::with_capacity(outer.len());
    for p in outer.points() {
        let t = spec.thickness_at(p.z, length);
        let r_inner = p.r - t;
        let keep = match strategy {
            HollowingStrategy::Ribbed => r_inner > 0.0 && p.r >= 2.0 * t,
            HollowingStrategy::Aggressive => r_inner > 0.0,
        };
        if !keep {
            // Close the cavity with an on-axis point at this station.
            if !inner.is_empty() {
                inner.push(ProfilePoint { r: 0.0, z: p.z });
            }
            break;
        }
        inner.push(ProfilePoint { r: r_inner, z: p.z });
    }

    // A cavity that never opened, or opened only at the base station,
    // cannot be revolved; report it as empty.
    if inner.len() < 2 || inner[0].r < tol.linear {
        inner.clear();
    }

    // The requested wall policy left the whole body solid: the wall could
    // not be honored anywhere, so flag the full span.
    let warnings = if inner.is_empty() && !outer.is_empty() {
        vec![ThinWallWarning {
            z_start: outer.first().z,
            z_end: outer.last().z,
        }]
    } else {
        Vec::new()
    };

    // A blunt outer tip with wall to spare leaves the cavity open at the
    // tip; the hollow builder closes it with an annular cap.
    Ok(CavityResult {
        inner: Polyline::new(inner)?,
        warnings,
    })
}
