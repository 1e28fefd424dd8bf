#![warn(missing_docs)]

//! Solid-of-revolution construction for the nosecone kernel.
//!
//! Revolves a sampled profile polyline through 360° at a fixed angular
//! facet count, fuses the cylindrical base ring, and caps blunt tips,
//! producing a closed indexed triangle mesh. Construction is fully
//! deterministic: the same inputs always produce byte-identical vertex
//! and index buffers.

mod mesh;
mod solid;

pub use mesh::TriangleMesh;
pub use solid::{
    build_solid, revolve_band, RevolvedSolid, SurfaceBand, SurfaceEnd, DEFAULT_FACETS, MIN_FACETS,
};

use thiserror::Error;

/// Errors from solid construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RevolveError {
    /// Angular facet count below the supported minimum.
    #[error("facet count {0} below minimum of {min}", min = MIN_FACETS)]
    TooFewFacets(u32),

    /// Base ring depth must be non-negative.
    #[error("base ring depth must be non-negative, got {0}")]
    NegativeBaseDepth(f64),

    /// Polyline has too few points to sweep.
    #[error("polyline needs at least 2 points, got {0}")]
    DegeneratePolyline(usize),

    /// The base of the profile (or the base ring) has no radius to revolve.
    #[error("degenerate base radius {0}")]
    DegenerateBase(f64),
}
