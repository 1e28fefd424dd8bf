//! Hollow solid composition: outer surface, cavity surface, base bore.

use nosecone_math::Tolerance;
use nosecone_profile::Polyline;
use nosecone_revolve::{revolve_band, RevolvedSolid, SurfaceEnd, TriangleMesh};

use crate::cavity::{build_cavity, ShellSpec, ThinWallWarning};
use crate::{HollowingStrategy, ShellError};

/// A hollowed solid of revolution: the outer solid minus the revolved
/// cavity, with the bore carried down through the base ring.
///
/// Like [`RevolvedSolid`] this is exclusively owned by one pipeline
/// invocation and consumed by value downstream.
#[derive(Debug, Clone)]
pub struct HollowSolid {
    /// The closed boundary mesh.
    pub mesh: TriangleMesh,
    /// Outer generating polyline (z = 0 at the top of the base ring).
    pub outer: Polyline,
    /// Cavity polyline. Empty when the wall policy left no room to hollow.
    pub inner: Polyline,
    /// Angular facet count shared by every surface.
    pub facets: u32,
    /// Axial depth of the base ring below z = 0.
    pub base_ring_depth: f64,
    /// Radius of the base ring.
    pub base_ring_radius: f64,
    /// Strategy the cavity was derived with.
    pub strategy: HollowingStrategy,
    /// Thin-wall spans reported during cavity derivation.
    pub warnings: Vec<ThinWallWarning>,
}

/// Hollow a revolved solid under the given wall policy.
///
/// The cavity polyline from [`build_cavity`] is revolved into an
/// inward-facing surface and the boundary is rebuilt as one closed mesh:
/// base annulus, bore wall through the base ring, outer surfaces, cavity
/// surfaces, and a tip closure. `bore` is the requested mounting bore
/// radius through the ring; it is clipped to the cavity base radius and so
/// the ring keeps one wall thickness of material, and `None` bores at the
/// cavity base radius. When the cavity is empty (or the ring too narrow to
/// bore) the solid's mesh is passed through unchanged; thin-wall warnings
/// are carried either way.
pub fn build_hollow(
    solid: RevolvedSolid,
    shell: &ShellSpec,
    strategy: HollowingStrategy,
    bore: Option<f64>,
) -> Result<HollowSolid, ShellError> {
    let tol = Tolerance::DEFAULT;
    let cavity = build_cavity(&solid.outer, shell, strategy)?;

    let depth = solid.base_ring_depth;
    let ring_r = solid.base_ring_radius;
    let has_ring = depth > tol.linear;
    let bore = if cavity.inner.is_empty() {
        0.0
    } else {
        let cavity_base = cavity.inner.first().r;
        bore.unwrap_or(cavity_base)
            .min(cavity_base)
            .min(ring_r - shell.thickness)
            .max(0.0)
    };

    if cavity.inner.is_empty() || (has_ring && bore < tol.linear) {
        return Ok(HollowSolid {
            mesh: solid.mesh,
            outer: solid.outer,
            inner: Polyline::new(Vec::new())?,
            facets: solid.facets,
            base_ring_depth: depth,
            base_ring_radius: ring_r,
            strategy,
            warnings: cavity.warnings,
        });
    }

    let outer = &solid.outer;
    let inner = &cavity.inner;
    let facets = solid.facets;
    let base = outer.first();
    let bore_r = inner.first().r;

    let mut mesh = TriangleMesh::new();

    let (profile_start, inner_start) = if has_ring {
        // Base annulus at the bottom of the ring, facing down.
        let bore_bot = mesh.add_ring(bore, -depth, facets);
        let ring_bot = mesh.add_ring(ring_r, -depth, facets);
        mesh.stitch_rings(bore_bot, ring_bot, facets, false);

        // Outer ring wall up to z = 0, then the shoulder to the profile
        // base where the radii differ.
        let ring_top = mesh.add_ring(ring_r, 0.0, facets);
        mesh.stitch_rings(ring_bot, ring_top, facets, false);
        let profile_start = if tol.values_equal(ring_r, base.r) {
            ring_top
        } else {
            let profile_base = mesh.add_ring(base.r, 0.0, facets);
            mesh.stitch_rings(ring_top, profile_base, facets, false);
            profile_base
        };

        // Bore wall, swept downward so it faces the axis.
        let bore_top = mesh.add_ring(bore, 0.0, facets);
        mesh.stitch_rings(bore_top, bore_bot, facets, false);

        // Step from the bore up onto the cavity base where the cavity is
        // wider than the bore.
        let inner_start = if tol.values_equal(bore, bore_r) {
            bore_top
        } else {
            let cavity_base = mesh.add_ring(bore_r, 0.0, facets);
            mesh.stitch_rings(cavity_base, bore_top, facets, false);
            cavity_base
        };
        (profile_start, inner_start)
    } else {
        // No ring: flat base annulus between cavity and outer base.
        let cavity_base = mesh.add_ring(bore_r, base.z, facets);
        let profile_base = mesh.add_ring(base.r, base.z, facets);
        mesh.stitch_rings(cavity_base, profile_base, facets, false);
        (profile_base, cavity_base)
    };

    let band_out = revolve_band(&mut mesh, outer.points(), facets, false, Some(profile_start))?;
    let band_in = revolve_band(&mut mesh, inner.points(), facets, true, Some(inner_start))?;

    match (band_out.end, band_in.end) {
        // Blunt outer tip over an open cavity: annular cap.
        (SurfaceEnd::Open { ring: out, .. }, SurfaceEnd::Open { ring: inn, .. }) => {
            mesh.stitch_rings(out, inn, facets, false);
        }
        // Blunt outer tip over a closed cavity: full disk cap.
        (SurfaceEnd::Open { ring, z, .. }, SurfaceEnd::Apex(_)) => {
            let cap = mesh.push_vertex(0.0, 0.0, z);
            mesh.fan(ring, cap, facets, false);
        }
        (SurfaceEnd::Apex(_), SurfaceEnd::Apex(_)) => {}
        // Sharp outer tip cannot leave the narrower cavity open, but close
        // it rather than emit an open surface.
        (SurfaceEnd::Apex(_), SurfaceEnd::Open { ring, z, .. }) => {
            let apex = mesh.push_vertex(0.0, 0.0, z);
            mesh.fan(ring, apex, facets, true);
        }
    }

    Ok(HollowSolid {
        mesh,
        outer: solid.outer,
        inner: cavity.inner,
        facets,
        base_ring_depth: depth,
        base_ring_radius: ring_r,
        strategy,
        warnings: cavity.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nosecone_profile::{sample, Polyline, ProfileFamily, ProfilePoint, ProfileSpec};
    use nosecone_revolve::build_solid;
    use std::f64::consts::PI;

    fn cone_polyline() -> Polyline {
        let spec = ProfileSpec::new(ProfileFamily::Conical, 100.0, 50.0, 0.0).unwrap();
        sample(&spec, 60).unwrap()
    }

    #[test]
    fn test_hollow_cone_volume() {
        // 5 mm uniform shell on a 100×50 cone: the cavity is the inward
        // cone with base 45 reaching the axis at z = 90
        let poly = cone_polyline();
        let solid = build_solid(&poly, 0.0, 50.0, 120).unwrap();
        let shell = ShellSpec::new(5.0, 1.0).unwrap();
        let hollow = build_hollow(solid, &shell, HollowingStrategy::Aggressive, None).unwrap();

        let expected = PI / 3.0 * (50.0 * 50.0 * 100.0 - 45.0 * 45.0 * 90.0);
        let vol = hollow.mesh.volume();
        assert!(
            (vol - expected).abs() / expected < 0.02,
            "expected ~{expected:.0}, got {vol:.0}"
        );
    }

    #[test]
    fn test_base_ring_is_bored() {
        let poly = cone_polyline();
        let shell = ShellSpec::new(5.0, 1.0).unwrap();

        let flat = build_hollow(
            build_solid(&poly, 0.0, 50.0, 120).unwrap(),
            &shell,
            HollowingStrategy::Aggressive,
            None,
        )
        .unwrap();
        let ringed = build_hollow(
            build_solid(&poly, 13.0, 50.0, 120).unwrap(),
            &shell,
            HollowingStrategy::Aggressive,
            None,
        )
        .unwrap();

        // The ring contributes only its annular wall, bored at r = 45
        let wall = PI * (50.0 * 50.0 - 45.0 * 45.0) * 13.0;
        let delta = ringed.mesh.volume() - flat.mesh.volume();
        assert!((delta - wall).abs() / wall < 0.02);
    }

    #[test]
    fn test_requested_bore_narrows_the_ring() {
        let poly = cone_polyline();
        let shell = ShellSpec::new(5.0, 1.0).unwrap();

        let flat = build_hollow(
            build_solid(&poly, 0.0, 50.0, 120).unwrap(),
            &shell,
            HollowingStrategy::Aggressive,
            Some(33.5),
        )
        .unwrap();
        let ringed = build_hollow(
            build_solid(&poly, 13.0, 50.0, 120).unwrap(),
            &shell,
            HollowingStrategy::Aggressive,
            Some(33.5),
        )
        .unwrap();

        // The ring is bored at the mounting radius, not the cavity base;
        // the step out to the cavity base at z = 0 adds no volume
        let wall = PI * (50.0 * 50.0 - 33.5 * 33.5) * 13.0;
        let delta = ringed.mesh.volume() - flat.mesh.volume();
        assert!((delta - wall).abs() / wall < 0.02);
    }

    #[test]
    fn test_overthick_shell_passes_solid_through() {
        let poly = cone_polyline();
        let solid = build_solid(&poly, 13.0, 50.0, 120).unwrap();
        let solid_mesh = solid.mesh.clone();
        let shell = ShellSpec::new(60.0, 1.0).unwrap();
        let hollow = build_hollow(solid, &shell, HollowingStrategy::Ribbed, None).unwrap();

        assert!(hollow.inner.is_empty());
        assert_eq!(hollow.mesh, solid_mesh);
        assert_eq!(hollow.warnings.len(), 1);
    }

    #[test]
    fn test_blunt_tip_gets_annular_cap() {
        // Truncated cone: outer frustum 50→25 over z ∈ [0, 50], cavity
        // frustum 45→20, both open at the tip
        let points: Vec<ProfilePoint> = cone_polyline()
            .points()
            .iter()
            .copied()
            .filter(|p| p.z <= 50.0)
            .collect();
        let blunt = Polyline::new(points).unwrap();
        let solid = build_solid(&blunt, 0.0, 50.0, 120).unwrap();
        let shell = ShellSpec::new(5.0, 1.0).unwrap();
        let hollow = build_hollow(solid, &shell, HollowingStrategy::Aggressive, None).unwrap();

        let frustum = |r0: f64, r1: f64, h: f64| PI * h / 3.0 * (r0 * r0 + r0 * r1 + r1 * r1);
        let expected = frustum(50.0, 25.0, 50.0) - frustum(45.0, 20.0, 50.0);
        let vol = hollow.mesh.volume();
        assert!(
            (vol - expected).abs() / expected < 0.02,
            "expected ~{expected:.0}, got {vol:.0}"
        );
    }

    #[test]
    fn test_ribbed_keeps_more_material() {
        let poly = cone_polyline();
        let shell = ShellSpec::new(5.0, 1.0).unwrap();
        let ribbed = build_hollow(
            build_solid(&poly, 0.0, 50.0, 120).unwrap(),
            &shell,
            HollowingStrategy::Ribbed,
            None,
        )
        .unwrap();
        let aggressive = build_hollow(
            build_solid(&poly, 0.0, 50.0, 120).unwrap(),
            &shell,
            HollowingStrategy::Aggressive,
            None,
        )
        .unwrap();
        assert!(ribbed.mesh.volume() > aggressive.mesh.volume());
    }

    #[test]
    fn test_determinism() {
        let poly = cone_polyline();
        let shell = ShellSpec::new(1.2, 0.8).unwrap();
        let a = build_hollow(
            build_solid(&poly, 13.0, 50.0, 120).unwrap(),
            &shell,
            HollowingStrategy::Ribbed,
            None,
        )
        .unwrap();
        let b = build_hollow(
            build_solid(&poly, 13.0, 50.0, 120).unwrap(),
            &shell,
            HollowingStrategy::Ribbed,
            None,
        )
        .unwrap();
        assert_eq!(a.mesh.vertices, b.mesh.vertices);
        assert_eq!(a.mesh.indices, b.mesh.indices);
    }
}
