#![warn(missing_docs)]

//! Shell engine: derive an internal cavity from the outer profile and
//! compose the hollow solid.
//!
//! The cavity boundary is an inward offset of the outer polyline under a
//! thickness/thinning policy. Spans where the wall clamps to zero are
//! surfaced as [`ThinWallWarning`]s — the shape is still produced, but the
//! caller must see that material vanished locally. The hollow solid is the
//! outer solid minus the revolved cavity, built directly from the two
//! polylines so the boundary stays closed by construction.

mod cavity;
mod hollow;

pub use cavity::{build_cavity, CavityResult, ShellSpec, ThinWallWarning};
pub use hollow::{build_hollow, HollowSolid};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How aggressively the shell engine hollows the solid.
///
/// The two strategies are deliberately distinct and explicitly selected;
/// neither is inferred from the thinning factor or from rib settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HollowingStrategy {
    /// Conservative hollowing that keeps a solid tip plug (the cavity stops
    /// once the remaining wall would drop below one extra thickness), so
    /// internal ribs have material to anchor into.
    Ribbed,
    /// Aggressive hollowing that carries the cavity until the wall clamps
    /// to zero. Intended for designs without internal ribs; rib insertion
    /// on an aggressively hollowed solid is rejected downstream.
    Aggressive,
}

/// Errors from shell operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShellError {
    /// Shell thickness must be strictly positive.
    #[error("shell thickness must be positive, got {0}")]
    InvalidThickness(f64),

    /// Thinning factor must lie in `(0, 1]`.
    #[error("thinning factor must be in (0, 1], got {0}")]
    InvalidThinning(f64),

    /// Derived cavity polyline violated an ordering invariant.
    #[error(transparent)]
    Domain(#[from] nosecone_profile::DomainError),

    /// Mesh construction failed.
    #[error(transparent)]
    Revolve(#[from] nosecone_revolve::RevolveError),
}
