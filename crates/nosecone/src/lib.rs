#![warn(missing_docs)]

//! Parametric nose cone geometry generator.
//!
//! Given a profile family and physical parameters, the pipeline produces a
//! validated, manifold solid of revolution with a controlled internal
//! cavity and optional rib reinforcement, plus the scalar metrics used to
//! compare profile families.
//!
//! ```
//! use nosecone::{GeneratorConfig, Pipeline};
//!
//! let config = GeneratorConfig::default();
//! let generated = Pipeline::from_config(&config).run()?;
//! for (key, value) in generated.metrics.report() {
//!     println!("{key}: {value:.2}");
//! }
//! # Ok::<(), nosecone::PipelineError>(())
//! ```

mod compare;
mod config;
mod pipeline;

pub use compare::compare_families;
pub use config::{ConfigError, GeneratorConfig};
pub use pipeline::{Generated, Pipeline, PipelineError, Resolution};

pub use nosecone_metrics::{compute_metrics, Metrics};
pub use nosecone_profile::{
    radius_at, sample, DomainError, Polyline, ProfileFamily, ProfilePoint, ProfileSpec,
};
pub use nosecone_revolve::{build_solid, RevolveError, RevolvedSolid, TriangleMesh};
pub use nosecone_ribs::{insert_ribs, RibError, RibSpec};
pub use nosecone_shell::{
    build_cavity, build_hollow, HollowSolid, HollowingStrategy, ShellError, ShellSpec,
    ThinWallWarning,
};
pub use nosecone_validate::{validate, GeometryError};
