#![warn(missing_docs)]

//! Metrics engine: scalar figures of merit integrated from the outer
//! profile.
//!
//! Metrics are computed purely from the sampled profile, independent of
//! shell and rib state, and always at the same sampling resolution as the
//! emitted geometry so the numbers describe the solid that was actually
//! produced.

use std::f64::consts::PI;

use nosecone_math::{gradient, trapezoid};
use nosecone_profile::{sample, DomainError, ProfileSpec};
use serde::Serialize;

/// Scalar comparison metrics for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    /// Enclosed volume of the outer solid (mm³), `∫ π·r(z)² dz`.
    pub volume: f64,
    /// Lateral surface area (mm²), `∫ 2π·r·√(1 + (dr/dz)²) dz`.
    pub surface_area: f64,
    /// Axial center-of-mass offset from the base (mm),
    /// `∫ z·r² dz / ∫ r² dz`.
    pub center_of_mass_offset: f64,
    /// Length over base diameter.
    pub fineness_ratio: f64,
    /// Tip radius over base radius; 0 for a perfectly sharp tip.
    pub tip_bluntness: f64,
}

impl Metrics {
    /// The metrics as plain key/value pairs, in report order.
    pub fn report(&self) -> [(&'static str, f64); 5] {
        [
            ("volume", self.volume),
            ("surface_area", self.surface_area),
            ("center_of_mass_offset", self.center_of_mass_offset),
            ("fineness_ratio", self.fineness_ratio),
            ("tip_bluntness", self.tip_bluntness),
        ]
    }
}

/// Integrate the comparison metrics for one profile at the given sampling
/// resolution.
///
/// `steps` must match the resolution used for the solid geometry; the
/// integrals run on exactly the polyline the builder revolves, including
/// the Von Kármán family's non-uniform axial spacing.
pub fn compute_metrics(spec: &ProfileSpec, steps: usize) -> Result<Metrics, DomainError> {
    let poly = sample(spec, steps)?;
    let zs = poly.zs();
    let radii = poly.radii();

    let r2: Vec<f64> = radii.iter().map(|r| r * r).collect();
    let zr2: Vec<f64> = zs.iter().zip(&r2).map(|(z, r2)| z * r2).collect();
    let drdz = gradient(&zs, &radii);
    let lateral: Vec<f64> = radii
        .iter()
        .zip(&drdz)
        .map(|(r, d)| 2.0 * PI * r * (1.0 + d * d).sqrt())
        .collect();

    let r2_integral = trapezoid(&zs, &r2);
    Ok(Metrics {
        volume: PI * r2_integral,
        surface_area: trapezoid(&zs, &lateral),
        center_of_mass_offset: trapezoid(&zs, &zr2) / r2_integral,
        fineness_ratio: spec.length / (2.0 * spec.base_radius),
        tip_bluntness: spec.tip_radius() / spec.base_radius,
    })
}
