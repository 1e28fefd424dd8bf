#![warn(missing_docs)]

//! Geometry audits for generated solids.
//!
//! Validation is an independent stage run after shell and rib operations:
//! it re-checks the polylines (no negative radii, cavity strictly inside
//! the outer surface) and audits the boundary mesh for closedness (every
//! edge shared by exactly two triangles). Failures identify the violating
//! axial span so the caller can retry with an adjusted wall policy.

use std::collections::HashMap;

use nosecone_profile::Polyline;
use nosecone_revolve::TriangleMesh;
use nosecone_shell::HollowSolid;
use thiserror::Error;

/// A hard geometry defect in a generated solid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A sampled radius is negative.
    #[error("negative radius {r} at z = {z}")]
    NegativeRadius {
        /// The offending radius.
        r: f64,
        /// Axial position of the offending sample.
        z: f64,
    },

    /// The cavity boundary meets or crosses the outer surface.
    #[error("cavity radius meets or exceeds outer radius over z in [{z_start}, {z_end}]")]
    ShellInversion {
        /// Start of the violating axial span.
        z_start: f64,
        /// End of the violating axial span.
        z_end: f64,
    },

    /// The boundary mesh is not closed: some edges are not shared by
    /// exactly two triangles.
    #[error("{edges} edge(s) not shared by exactly two triangles near z = {z}")]
    NonManifold {
        /// Number of offending edges.
        edges: usize,
        /// Lowest axial position among the offending edges.
        z: f64,
    },
}

/// Audit a hollowed (and possibly ribbed) solid.
///
/// Runs the radius scan, the cavity-inversion check, and the closed-mesh
/// audit, in that order, returning the first defect found.
pub fn validate(solid: &HollowSolid) -> Result<(), GeometryError> {
    check_radii(&solid.outer)?;
    check_radii(&solid.inner)?;
    check_inversion(&solid.outer, &solid.inner)?;
    check_manifold(&solid.mesh)
}

fn check_radii(poly: &Polyline) -> Result<(), GeometryError> {
    for p in poly.points() {
        if p.r < 0.0 {
            return Err(GeometryError::NegativeRadius { r: p.r, z: p.z });
        }
    }
    Ok(())
}

/// Inner radius must stay strictly below the outer radius at every inner
/// station off the axis.
fn check_inversion(outer: &Polyline, inner: &Polyline) -> Result<(), GeometryError> {
    let mut span: Option<(f64, f64)> = None;
    for p in inner.points() {
        if p.r > 0.0 && p.r >= outer.radius_at_z(p.z) {
            span = match span {
                Some((start, _)) => Some((start, p.z)),
                None => Some((p.z, p.z)),
            };
        } else if span.is_some() {
            break;
        }
    }
    match span {
        Some((z_start, z_end)) => Err(GeometryError::ShellInversion { z_start, z_end }),
        None => Ok(()),
    }
}

/// Vertex key from quantized f32 positions, so duplicated-but-coincident
/// ring vertices of adjacent surface pieces compare equal.
fn position_key(mesh: &TriangleMesh, i: u32) -> [u32; 3] {
    let base = i as usize * 3;
    let quant = |v: f32| if v == 0.0 { 0.0f32 } else { v }.to_bits();
    [
        quant(mesh.vertices[base]),
        quant(mesh.vertices[base + 1]),
        quant(mesh.vertices[base + 2]),
    ]
}

/// Check that every undirected edge of the mesh is shared by exactly two
/// triangles.
///
/// Edges are compared by quantized vertex position, not index, so surface
/// pieces that duplicate ring vertices still pair up; disjoint closed
/// components (rib sub-meshes) each pass on their own.
pub fn check_manifold(mesh: &TriangleMesh) -> Result<(), GeometryError> {
    let mut edges: HashMap<([u32; 3], [u32; 3]), u32> = HashMap::new();
    for tri in mesh.indices.chunks(3) {
        for e in 0..3 {
            let a = position_key(mesh, tri[e]);
            let b = position_key(mesh, tri[(e + 1) % 3]);
            let key = if a <= b { (a, b) } else { (b, a) };
            *edges.entry(key).or_insert(0) += 1;
        }
    }

    let bad: Vec<f64> = edges
        .iter()
        .filter(|&(_, &count)| count != 2)
        .map(|(&([_, _, za], [_, _, zb]), _)| {
            f64::from(f32::from_bits(za)).min(f64::from(f32::from_bits(zb)))
        })
        .collect();
    if bad.is_empty() {
        Ok(())
    } else {
        let z = bad.iter().copied().fold(f64::INFINITY, f64::min);
        Err(GeometryError::NonManifold {
            edges: bad.len(),
            z,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nosecone_profile::{sample, Polyline, ProfileFamily, ProfilePoint, ProfileSpec};
    use nosecone_revolve::build_solid;
    use nosecone_ribs::{insert_ribs, RibSpec};
    use nosecone_shell::{build_hollow, HollowingStrategy, ShellSpec};

    fn hollow(family: ProfileFamily, tip_rounding: f64, strategy: HollowingStrategy) -> HollowSolid {
        let spec = ProfileSpec::new(family, 100.0, 50.0, tip_rounding).unwrap();
        let outer = sample(&spec, 60).unwrap();
        let solid = build_solid(&outer, 13.0, 50.0, 64).unwrap();
        let shell = ShellSpec::new(1.5, 1.0).unwrap();
        // Mounting bore narrower than the cavity base, so the step ring
        // between them is part of the audited surface
        build_hollow(solid, &shell, strategy, Some(30.0)).unwrap()
    }

    #[test]
    fn test_hollow_solids_are_manifold() {
        for family in ProfileFamily::ALL {
            let solid = hollow(family, 0.0, HollowingStrategy::Ribbed);
            validate(&solid).unwrap();
        }
    }

    #[test]
    fn test_blunt_aggressive_hollow_is_manifold() {
        let solid = hollow(ProfileFamily::Conical, 0.4, HollowingStrategy::Aggressive);
        validate(&solid).unwrap();
    }

    #[test]
    fn test_ribbed_solid_is_manifold() {
        let solid = hollow(ProfileFamily::Ogive, 0.0, HollowingStrategy::Ribbed);
        let ribbed = insert_ribs(solid, &RibSpec::new(6, 1.0, 0.8).unwrap()).unwrap();
        validate(&ribbed).unwrap();
    }

    #[test]
    fn test_unhollowed_passthrough_is_manifold() {
        let spec = ProfileSpec::new(ProfileFamily::Elliptical, 100.0, 50.0, 0.0).unwrap();
        let outer = sample(&spec, 60).unwrap();
        let solid = build_solid(&outer, 13.0, 50.0, 64).unwrap();
        let shell = ShellSpec::new(60.0, 1.0).unwrap();
        let hollow = build_hollow(solid, &shell, HollowingStrategy::Ribbed, None).unwrap();
        validate(&hollow).unwrap();
    }

    #[test]
    fn test_open_mesh_rejected() {
        // Cylinder wall with no caps: every rim edge has a single triangle
        let mut mesh = TriangleMesh::new();
        let bottom = mesh.add_ring(5.0, 0.0, 16);
        let top = mesh.add_ring(5.0, 10.0, 16);
        mesh.stitch_rings(bottom, top, 16, false);
        match check_manifold(&mesh) {
            Err(GeometryError::NonManifold { edges, z }) => {
                assert_eq!(edges, 32);
                assert_eq!(z, 0.0);
            }
            other => panic!("expected NonManifold, got {other:?}"),
        }
    }

    #[test]
    fn test_shell_inversion_detected() {
        let mut solid = hollow(ProfileFamily::Conical, 0.0, HollowingStrategy::Ribbed);
        // Forge a cavity polyline poking outside the outer surface
        solid.inner = Polyline::new(vec![
            ProfilePoint { r: 49.0, z: 0.0 },
            ProfilePoint { r: 49.0, z: 10.0 },
            ProfilePoint { r: 0.0, z: 20.0 },
        ])
        .unwrap();
        match validate(&solid) {
            Err(GeometryError::ShellInversion { z_start, z_end }) => {
                assert_eq!(z_start, 10.0);
                assert_eq!(z_end, 10.0);
            }
            other => panic!("expected ShellInversion, got {other:?}"),
        }
    }
}
