#![warn(missing_docs)]

//! Rib inserter: radial reinforcement webs inside a hollowed solid.
//!
//! Each rib is a thin planar web in a radial plane, spanning from a
//! half-thickness inset off the axis out to just inside the faceted outer
//! surface and from the base up to a height fraction of the profile, plus
//! a flared triangular gusset at the base junction. Ribs are angularly
//! evenly spaced and each one is a closed sub-mesh merged into the hollow
//! solid's boundary.

use std::f64::consts::PI;

use nosecone_math::Tolerance;
use nosecone_revolve::TriangleMesh;
use nosecone_shell::{HollowSolid, HollowingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gusset leg length as a fraction of the profile length.
const GUSSET_RUN: f64 = 0.3;

/// Rib layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RibSpec {
    /// Number of radial webs, > 0.
    pub count: u32,
    /// Web thickness (mm), > 0.
    pub thickness: f64,
    /// Web height as a fraction of the profile length, in `(0, 1]`.
    pub height_fraction: f64,
}

impl RibSpec {
    /// Create a validated rib spec.
    pub fn new(count: u32, thickness: f64, height_fraction: f64) -> Result<Self, RibError> {
        let spec = Self {
            count,
            thickness,
            height_fraction,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check the numeric invariants.
    pub fn validate(&self) -> Result<(), RibError> {
        if self.count == 0 {
            return Err(RibError::InvalidCount);
        }
        if !(self.thickness > 0.0) {
            return Err(RibError::InvalidThickness(self.thickness));
        }
        if !(self.height_fraction > 0.0 && self.height_fraction <= 1.0) {
            return Err(RibError::InvalidHeightFraction(self.height_fraction));
        }
        Ok(())
    }
}

/// Errors from rib insertion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RibError {
    /// Rib count must be at least 1.
    #[error("rib count must be at least 1")]
    InvalidCount,

    /// Rib thickness must be strictly positive.
    #[error("rib thickness must be positive, got {0}")]
    InvalidThickness(f64),

    /// Height fraction must lie in `(0, 1]`.
    #[error("rib height fraction must be in (0, 1], got {0}")]
    InvalidHeightFraction(f64),

    /// Aggressively hollowed solids keep no tip plug for ribs to anchor
    /// into; rib insertion on them is rejected.
    #[error("hollowing strategy forbids internal ribs")]
    StrategyForbidsRibs,

    /// The solid was not hollowed, so there is no cavity to reinforce.
    #[error("solid has no cavity to reinforce")]
    NoCavity,
}

/// Insert `spec.count` radial webs into a hollowed solid.
///
/// Web `i` sits in the radial plane at angle `i · 360° / count`. Its radial
/// extent at height `z` runs from half the web thickness off the axis out
/// to the outer radius inset by `cos(π/facets)`, which keeps the web inside
/// the chords of the faceted outer wall, and it spans the base plane up to
/// `height_fraction` of the profile length. Opposite webs of an even count
/// mirror each other through the axis, so the inner edges must stay off it
/// or their axis faces would coincide. A triangular base gusset with legs
/// of `0.3 ·` length and twice the web thickness flares the base junction
/// of each web.
pub fn insert_ribs(hollow: HollowSolid, spec: &RibSpec) -> Result<HollowSolid, RibError> {
    spec.validate()?;
    if hollow.strategy == HollowingStrategy::Aggressive {
        return Err(RibError::StrategyForbidsRibs);
    }
    if hollow.inner.is_empty() {
        return Err(RibError::NoCavity);
    }

    let tol = Tolerance::DEFAULT;
    let length = hollow.outer.length();
    let h_max = spec.height_fraction * length;
    let inset = (PI / hollow.facets as f64).cos();
    let u_axis = spec.thickness / 2.0;

    // Web profile stations: the outer polyline's stations below the rib
    // top, then the top itself. Stations too narrow to hold the inset web
    // are dropped.
    let mut stations: Vec<(f64, f64)> = hollow
        .outer
        .points()
        .iter()
        .filter(|p| p.z < h_max)
        .map(|p| (p.r * inset, p.z))
        .collect();
    stations.push((hollow.outer.radius_at_z(h_max) * inset, h_max));
    stations.retain(|&(u, _)| u > u_axis + tol.linear);
    if stations.len() < 2 {
        return Err(RibError::NoCavity);
    }

    let gusset_u = (GUSSET_RUN * length).min(stations[0].0);
    let gusset_z = (GUSSET_RUN * length).min(h_max);

    let mut hollow = hollow;
    for i in 0..spec.count {
        let angle = 2.0 * PI * i as f64 / spec.count as f64;
        let rib = build_rib(&stations, angle, spec.thickness, gusset_u, gusset_z);
        hollow.mesh.merge(&rib);
    }
    Ok(hollow)
}

/// Build one closed rib sub-mesh: the web fence plus its base gusset.
fn build_rib(
    stations: &[(f64, f64)],
    angle: f64,
    thickness: f64,
    gusset_u: f64,
    gusset_z: f64,
) -> TriangleMesh {
    let (dx, dy) = (angle.cos(), angle.sin());
    let (nx, ny) = (-angle.sin(), angle.cos());
    let h = thickness / 2.0;
    let mut mesh = TriangleMesh::new();

    // Corner layout per station, in the rib's local (u, v) frame:
    // p0 = (h, -h), p1 = (u, -h), p2 = (u, +h), p3 = (h, +h).
    let vertex = |mesh: &mut TriangleMesh, u: f64, v: f64, z: f64| {
        mesh.push_vertex(u * dx + v * nx, u * dy + v * ny, z)
    };
    let mut rings: Vec<[u32; 4]> = Vec::with_capacity(stations.len());
    for &(u, z) in stations {
        rings.push([
            vertex(&mut mesh, h, -h, z),
            vertex(&mut mesh, u, -h, z),
            vertex(&mut mesh, u, h, z),
            vertex(&mut mesh, h, h, z),
        ]);
    }

    let bottom = rings[0];
    push_quad(&mut mesh, bottom[0], bottom[3], bottom[2], bottom[1]);
    let top = rings[rings.len() - 1];
    push_quad(&mut mesh, top[0], top[1], top[2], top[3]);
    for w in rings.windows(2) {
        let (lo, hi) = (w[0], w[1]);
        for side in 0..4 {
            let a = side;
            let b = (side + 1) % 4;
            push_quad(&mut mesh, lo[a], lo[b], hi[b], hi[a]);
        }
    }

    // Gusset: triangular prism with legs along the radial and axial
    // directions at the web base, flared to twice the web thickness so it
    // protrudes from the web faces. Skipped when the web is too narrow to
    // hold a leg.
    let hg = thickness;
    if gusset_u > h {
        let a0 = vertex(&mut mesh, h, -hg, stations[0].1);
        let b0 = vertex(&mut mesh, gusset_u, -hg, stations[0].1);
        let c0 = vertex(&mut mesh, h, -hg, stations[0].1 + gusset_z);
        let a1 = vertex(&mut mesh, h, hg, stations[0].1);
        let b1 = vertex(&mut mesh, gusset_u, hg, stations[0].1);
        let c1 = vertex(&mut mesh, h, hg, stations[0].1 + gusset_z);
        mesh.push_triangle(a0, b0, c0);
        mesh.push_triangle(a1, c1, b1);
        push_quad(&mut mesh, a0, a1, b1, b0);
        push_quad(&mut mesh, b0, b1, c1, c0);
        push_quad(&mut mesh, c0, c1, a1, a0);
    }

    mesh
}

fn push_quad(mesh: &mut TriangleMesh, a: u32, b: u32, c: u32, d: u32) {
    mesh.push_triangle(a, b, c);
    mesh.push_triangle(a, c, d);
}

#[cfg(test)]
mod tests {
    use super::*;
    use nosecone_profile::{sample, ProfileFamily, ProfileSpec};
    use nosecone_revolve::build_solid;
    use nosecone_shell::{build_hollow, ShellSpec};

    fn hollow_cone(strategy: HollowingStrategy) -> HollowSolid {
        let spec = ProfileSpec::new(ProfileFamily::Conical, 100.0, 50.0, 0.0).unwrap();
        let outer = sample(&spec, 60).unwrap();
        let solid = build_solid(&outer, 0.0, 50.0, 120).unwrap();
        let shell = ShellSpec::new(5.0, 1.0).unwrap();
        build_hollow(solid, &shell, strategy, None).unwrap()
    }

    #[test]
    fn test_ribs_add_expected_volume() {
        let hollow = hollow_cone(HollowingStrategy::Ribbed);
        let before = hollow.mesh.volume();
        let spec = RibSpec::new(6, 1.0, 0.8).unwrap();
        let ribbed = insert_ribs(hollow, &spec).unwrap();

        // Each web: thickness · ∫ (u(z) − 0.5) dz over [0, 80] with
        // u(z) = cos(π/120)·50·(1 − z/100) and the half-thickness axis
        // inset, plus the 29.5×30 double-width gusset prism (web/gusset
        // overlap double-counts, as merge does)
        let inset = (PI / 120.0).cos();
        let web = 1.0 * (inset * 50.0 * (80.0 - 80.0 * 80.0 / 200.0) - 0.5 * 80.0);
        let gusset = 0.5 * 29.5 * 30.0 * 2.0;
        let expected = 6.0 * (web + gusset);
        let delta = ribbed.mesh.volume() - before;
        assert!(
            (delta - expected).abs() / expected < 0.02,
            "expected ~{expected:.0}, got {delta:.0}"
        );
    }

    #[test]
    fn test_even_angular_spacing() {
        let hollow = hollow_cone(HollowingStrategy::Ribbed);
        let base_triangles = hollow.mesh.num_triangles();
        let spec = RibSpec::new(4, 1.0, 0.5).unwrap();
        let ribbed = insert_ribs(hollow, &spec).unwrap();

        // Four ribs at 0°, 90°, 180°, 270°: per rib, the set of vertices
        // rotated a quarter turn must appear in the next rib
        let per_rib = (ribbed.mesh.num_triangles() - base_triangles) / 4;
        assert!(per_rib > 0);
        let rib_verts: Vec<[f64; 3]> = (0..ribbed.mesh.num_vertices() as u32)
            .map(|i| ribbed.mesh.vertex(i))
            .collect();
        let v = rib_verts[rib_verts.len() - 1];
        let rotated = [-v[1], v[0], v[2]];
        assert!(
            rib_verts
                .iter()
                .any(|w| (w[0] - rotated[0]).abs() < 1e-4
                    && (w[1] - rotated[1]).abs() < 1e-4
                    && (w[2] - rotated[2]).abs() < 1e-4),
            "no quarter-turn image for {v:?}"
        );
    }

    #[test]
    fn test_opposite_webs_stay_apart() {
        // Two webs mirror each other through the axis; their axis-side
        // faces must be separated by a full thickness, never coincident
        let hollow = hollow_cone(HollowingStrategy::Ribbed);
        let before = hollow.mesh.num_vertices();
        let spec = RibSpec::new(2, 1.0, 0.8).unwrap();
        let ribbed = insert_ribs(hollow, &spec).unwrap();

        let extra = ribbed.mesh.num_vertices() - before;
        assert_eq!(extra % 2, 0);
        let per_rib = extra / 2;
        let first: Vec<[f64; 3]> = (before..before + per_rib)
            .map(|i| ribbed.mesh.vertex(i as u32))
            .collect();
        let second: Vec<[f64; 3]> = (before + per_rib..before + extra)
            .map(|i| ribbed.mesh.vertex(i as u32))
            .collect();
        for a in &first {
            for b in &second {
                let d2 = (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2);
                assert!(d2.sqrt() > 0.9, "webs touch: {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_aggressive_hollowing_rejects_ribs() {
        let hollow = hollow_cone(HollowingStrategy::Aggressive);
        let spec = RibSpec::new(6, 1.0, 0.8).unwrap();
        assert!(matches!(
            insert_ribs(hollow, &spec),
            Err(RibError::StrategyForbidsRibs)
        ));
    }

    #[test]
    fn test_unhollowed_solid_rejected() {
        let spec = ProfileSpec::new(ProfileFamily::Conical, 100.0, 50.0, 0.0).unwrap();
        let outer = sample(&spec, 60).unwrap();
        let solid = build_solid(&outer, 0.0, 50.0, 120).unwrap();
        // 60 mm wall on a 50 mm radius: no cavity opens
        let shell = ShellSpec::new(60.0, 1.0).unwrap();
        let hollow = build_hollow(solid, &shell, HollowingStrategy::Ribbed, None).unwrap();
        let rib_spec = RibSpec::new(6, 1.0, 0.8).unwrap();
        assert!(matches!(
            insert_ribs(hollow, &rib_spec),
            Err(RibError::NoCavity)
        ));
    }

    #[test]
    fn test_spec_validation() {
        assert!(matches!(RibSpec::new(0, 1.0, 0.8), Err(RibError::InvalidCount)));
        assert!(matches!(
            RibSpec::new(6, 0.0, 0.8),
            Err(RibError::InvalidThickness(_))
        ));
        assert!(matches!(
            RibSpec::new(6, 1.0, 1.5),
            Err(RibError::InvalidHeightFraction(_))
        ));
    }

    #[test]
    fn test_determinism() {
        let spec = RibSpec::new(6, 1.0, 0.8).unwrap();
        let a = insert_ribs(hollow_cone(HollowingStrategy::Ribbed), &spec).unwrap();
        let b = insert_ribs(hollow_cone(HollowingStrategy::Ribbed), &spec).unwrap();
        assert_eq!(a.mesh.vertices, b.mesh.vertices);
        assert_eq!(a.mesh.indices, b.mesh.indices);
    }

    #[test]
    fn test_warnings_carried_through() {
        let spec = ProfileSpec::new(ProfileFamily::Conical, 100.0, 50.0, 0.0).unwrap();
        let outer = sample(&spec, 60).unwrap();
        let solid = build_solid(&outer, 0.0, 50.0, 120).unwrap();
        let shell = ShellSpec::new(1.2, 1.0).unwrap();
        let hollow = build_hollow(solid, &shell, HollowingStrategy::Ribbed, None).unwrap();
        let expected = hollow.warnings.clone();
        let rib_spec = RibSpec::new(3, 1.0, 0.5).unwrap();
        let ribbed = insert_ribs(hollow, &rib_spec).unwrap();
        assert_eq!(ribbed.warnings, expected);
    }
}
