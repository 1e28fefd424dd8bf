//! Solid builder: revolve an outer polyline and fuse the base ring.

use nosecone_math::Tolerance;
use nosecone_profile::{Polyline, ProfilePoint};

use crate::mesh::TriangleMesh;
use crate::RevolveError;

/// Default angular facet count, constant across all solids of a run so
/// numerical behavior stays comparable between profiles.
pub const DEFAULT_FACETS: u32 = 120;

/// Minimum supported angular facet count.
pub const MIN_FACETS: u32 = 8;

/// How a revolved surface band terminates at its tip end.
#[derive(Debug, Clone, Copy)]
pub enum SurfaceEnd {
    /// Closed at a single apex vertex on the axis.
    Apex(u32),
    /// Still open; the last ring needs a cap.
    Open {
        /// Start index of the last ring.
        ring: u32,
        /// Radius of the last ring.
        r: f64,
        /// Axial position of the last ring.
        z: f64,
    },
}

/// A revolved surface band: the lateral surface of one polyline.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceBand {
    /// Start index of the first (base-side) ring.
    pub first_ring: u32,
    /// Termination at the tip side.
    pub end: SurfaceEnd,
}

/// Sweep a polyline through 360° into a lateral surface.
///
/// Rings are emitted base to tip. A point with radius ≈ 0 closes the band
/// at an apex; any points past it are dropped (a monotone profile stays at
/// zero radius from there on). `start_ring` reuses an existing ring for the
/// first point so adjacent surfaces share vertices exactly. `flip` reverses
/// the winding for inward-facing (cavity) surfaces.
pub fn revolve_band(
    mesh: &mut TriangleMesh,
    points: &[ProfilePoint],
    facets: u32,
    flip: bool,
    start_ring: Option<u32>,
) -> Result<SurfaceBand, RevolveError> {
    let tol = Tolerance::DEFAULT;
    if points.len() < 2 {
        return Err(RevolveError::DegeneratePolyline(points.len()));
    }
    if points[0].r < tol.linear {
        return Err(RevolveError::DegenerateBase(points[0].r));
    }

    let first_ring = match start_ring {
        Some(ring) => ring,
        None => mesh.add_ring(points[0].r, points[0].z, facets),
    };

    let mut prev = first_ring;
    let mut end = SurfaceEnd::Open {
        ring: first_ring,
        r: points[0].r,
        z: points[0].z,
    };
    for p in &points[1..] {
        if p.r < tol.linear {
            let apex = mesh.push_vertex(0.0, 0.0, p.z);
            mesh.fan(prev, apex, facets, flip);
            end = SurfaceEnd::Apex(apex);
            break;
        }
        let ring = mesh.add_ring(p.r, p.z, facets);
        mesh.stitch_rings(prev, ring, facets, flip);
        prev = ring;
        end = SurfaceEnd::Open {
            ring,
            r: p.r,
            z: p.z,
        };
    }

    Ok(SurfaceBand { first_ring, end })
}

/// A closed solid of revolution: revolved outer profile fused with its
/// cylindrical base ring.
///
/// Exclusively owned by one pipeline invocation; downstream stages consume
/// it by value.
#[derive(Debug, Clone)]
pub struct RevolvedSolid {
    /// The closed boundary mesh.
    pub mesh: TriangleMesh,
    /// The generating outer polyline (z = 0 at the top of the base ring).
    pub outer: Polyline,
    /// Angular facet count used for every surface of this solid.
    pub facets: u32,
    /// Axial depth of the base ring below z = 0.
    pub base_ring_depth: f64,
    /// Radius of the base ring.
    pub base_ring_radius: f64,
}

/// Build the union of a base-ring cylinder and the revolved outer profile.
///
/// The polyline's z = 0 point sits on top of the base ring, which extends
/// down to `z = -base_ring_depth`. A final radius that is not ≈ 0 marks a
/// blunt tip and is capped flat; an open surface is a defect, never an
/// output. The facet count is fixed for the whole solid and the build is
/// fully deterministic: identical inputs yield identical buffers.
pub fn build_solid(
    outer: &Polyline,
    base_ring_depth: f64,
    base_ring_radius: f64,
    facets: u32,
) -> Result<RevolvedSolid, RevolveError> {
    let tol = Tolerance::DEFAULT;
    if facets < MIN_FACETS {
        return Err(RevolveError::TooFewFacets(facets));
    }
    if base_ring_depth < 0.0 {
        return Err(RevolveError::NegativeBaseDepth(base_ring_depth));
    }
    if outer.len() < 2 {
        return Err(RevolveError::DegeneratePolyline(outer.len()));
    }
    let base = outer.first();
    if base.r < tol.linear || base_ring_radius < tol.linear {
        return Err(RevolveError::DegenerateBase(base.r.min(base_ring_radius)));
    }

    let mut mesh = TriangleMesh::new();

    // Base: either a ring cylinder below z = 0 or a flat disk at z = 0.
    let profile_start = if base_ring_depth > tol.linear {
        let center = mesh.push_vertex(0.0, 0.0, -base_ring_depth);
        let ring_bot = mesh.add_ring(base_ring_radius, -base_ring_depth, facets);
        mesh.fan(ring_bot, center, facets, true);
        let ring_top = mesh.add_ring(base_ring_radius, 0.0, facets);
        mesh.stitch_rings(ring_bot, ring_top, facets, false);

        if tol.values_equal(base_ring_radius, base.r) {
            ring_top
        } else {
            // Flat annular shoulder joining the ring to the profile base.
            let ring_profile = mesh.add_ring(base.r, 0.0, facets);
            mesh.stitch_rings(ring_top, ring_profile, facets, false);
            ring_profile
        }
    } else {
        let center = mesh.push_vertex(0.0, 0.0, base.z);
        let ring = mesh.add_ring(base.r, base.z, facets);
        mesh.fan(ring, center, facets, true);
        ring
    };

    let band = revolve_band(&mut mesh, outer.points(), facets, false, Some(profile_start))?;

    // Blunt tip: cap it flat rather than leaving the surface open.
    if let SurfaceEnd::Open { ring, z, .. } = band.end {
        let cap_center = mesh.push_vertex(0.0, 0.0, z);
        mesh.fan(ring, cap_center, facets, false);
    }

    Ok(RevolvedSolid {
        mesh,
        outer: outer.clone(),
        facets,
        base_ring_depth,
        base_ring_radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nosecone_profile::{sample, ProfileFamily, ProfileSpec};
    use std::f64::consts::PI;

    fn cone_polyline() -> Polyline {
        let spec = ProfileSpec::new(ProfileFamily::Conical, 100.0, 50.0, 0.0).unwrap();
        sample(&spec, 60).unwrap()
    }

    #[test]
    fn test_build_solid_cone_volume() {
        let poly = cone_polyline();
        let solid = build_solid(&poly, 0.0, 50.0, 120).unwrap();
        // Faceted cone volume ≈ π·r²·h/3 with a small facet deficit
        let expected = PI * 50.0 * 50.0 * 100.0 / 3.0;
        let vol = solid.mesh.volume();
        assert!(
            (vol - expected).abs() / expected < 0.01,
            "expected ~{expected:.0}, got {vol:.0}"
        );
    }

    #[test]
    fn test_base_ring_adds_cylinder_volume() {
        let poly = cone_polyline();
        let without = build_solid(&poly, 0.0, 50.0, 120).unwrap();
        let with = build_solid(&poly, 13.0, 50.0, 120).unwrap();
        let ring_vol = PI * 50.0 * 50.0 * 13.0;
        let delta = with.mesh.volume() - without.mesh.volume();
        assert!((delta - ring_vol).abs() / ring_vol < 0.01);
    }

    #[test]
    fn test_blunt_tip_is_capped() {
        // Truncate the cone at half length: final radius 25, needs a cap
        let points: Vec<ProfilePoint> = cone_polyline()
            .points()
            .iter()
            .copied()
            .filter(|p| p.z <= 50.0)
            .collect();
        let blunt = Polyline::new(points).unwrap();
        let solid = build_solid(&blunt, 0.0, 50.0, 64).unwrap();

        // Closed mesh: frustum volume π·h/3·(R² + R·r + r²), not an open shell
        let frustum = PI * 50.0 / 3.0 * (2500.0 + 1250.0 + 625.0);
        let vol = solid.mesh.volume();
        assert!((vol - frustum).abs() / frustum < 0.01);
    }

    #[test]
    fn test_determinism() {
        let poly = cone_polyline();
        let a = build_solid(&poly, 13.0, 50.0, 120).unwrap();
        let b = build_solid(&poly, 13.0, 50.0, 120).unwrap();
        assert_eq!(a.mesh.vertices, b.mesh.vertices);
        assert_eq!(a.mesh.indices, b.mesh.indices);
    }

    #[test]
    fn test_facet_count_validation() {
        let poly = cone_polyline();
        assert!(matches!(
            build_solid(&poly, 0.0, 50.0, 4),
            Err(RevolveError::TooFewFacets(4))
        ));
    }

    #[test]
    fn test_negative_depth_rejected() {
        let poly = cone_polyline();
        assert!(matches!(
            build_solid(&poly, -1.0, 50.0, 64),
            Err(RevolveError::NegativeBaseDepth(_))
        ));
    }

    #[test]
    fn test_annular_shoulder_when_ring_wider_than_base() {
        let poly = cone_polyline();
        // Ring radius 55 > profile base 50: flat shoulder at z = 0
        let solid = build_solid(&poly, 10.0, 55.0, 64).unwrap();
        let cone = PI * 50.0 * 50.0 * 100.0 / 3.0;
        let ring = PI * 55.0 * 55.0 * 10.0;
        let expected = cone + ring;
        let vol = solid.mesh.volume();
        assert!((vol - expected).abs() / expected < 0.01);
    }
}
