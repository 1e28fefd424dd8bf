//! The generation pipeline: profile → polyline → solid → shell → ribs →
//! validation → metrics.

use nosecone_metrics::{compute_metrics, Metrics};
use nosecone_profile::{sample, DomainError, Polyline, ProfileSpec};
use nosecone_revolve::{build_solid, RevolveError, DEFAULT_FACETS};
use nosecone_ribs::{insert_ribs, RibError, RibSpec};
use nosecone_shell::{
    build_hollow, HollowSolid, HollowingStrategy, ShellError, ShellSpec, ThinWallWarning,
};
use nosecone_validate::{validate, GeometryError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GeneratorConfig;

/// Sampling resolution shared by geometry and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Axial sampling steps for the profile polyline.
    pub steps: usize,
    /// Angular facet count for revolution.
    pub facets: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            steps: 120,
            facets: DEFAULT_FACETS,
        }
    }
}

/// Error from any stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// Invalid numeric input to a profile function.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Solid construction failed.
    #[error(transparent)]
    Revolve(#[from] RevolveError),

    /// Shell derivation failed.
    #[error(transparent)]
    Shell(#[from] ShellError),

    /// Rib insertion failed.
    #[error(transparent)]
    Rib(#[from] RibError),

    /// The generated solid failed validation.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// A successful generation: the validated solid, its metrics, and any
/// warnings accumulated along the way.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The validated (hollowed, possibly ribbed) solid.
    pub solid: HollowSolid,
    /// Comparison metrics for the outer profile.
    pub metrics: Metrics,
    /// Thin-wall warnings; non-fatal but never swallowed.
    pub warnings: Vec<ThinWallWarning>,
}

/// Builder for one generation run.
///
/// Stages execute in a fixed order and each stage fully consumes its
/// input before the next runs; a run never mutates shared state, so
/// independent pipelines may execute in parallel freely.
#[derive(Debug, Clone)]
pub struct Pipeline {
    profile: ProfileSpec,
    base_ring_depth: f64,
    base_ring_radius: f64,
    shell: Option<(ShellSpec, HollowingStrategy)>,
    bore: Option<f64>,
    ribs: Option<RibSpec>,
    resolution: Resolution,
}

impl Pipeline {
    /// Start a pipeline for the given profile, with no base ring, no
    /// hollowing, and no ribs.
    pub fn new(profile: ProfileSpec) -> Self {
        Self {
            profile,
            base_ring_depth: 0.0,
            base_ring_radius: profile.base_radius,
            shell: None,
            bore: None,
            ribs: None,
            resolution: Resolution::default(),
        }
    }

    /// Assemble a pipeline from a full configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut pipeline = Pipeline::new(config.profile_spec())
            .base_ring(config.base_ring_depth, config.outer_radius())
            .resolution(Resolution {
                steps: config.steps,
                facets: config.facets,
            });
        if config.use_lightweighting {
            pipeline = pipeline
                .hollow(
                    ShellSpec {
                        thickness: config.shell_thickness,
                        thinning_factor: config.wall_thinning_factor,
                    },
                    config.hollowing_strategy,
                )
                .bore(config.inner_radius());
            if config.internal_ribs {
                pipeline = pipeline.ribs(RibSpec {
                    count: config.rib_count,
                    thickness: config.rib_thickness,
                    height_fraction: config.rib_height_fraction,
                });
            }
        }
        pipeline
    }

    /// Fuse a cylindrical base ring below the profile.
    pub fn base_ring(mut self, depth: f64, radius: f64) -> Self {
        self.base_ring_depth = depth;
        self.base_ring_radius = radius;
        self
    }

    /// Hollow the solid under the given wall policy.
    pub fn hollow(mut self, shell: ShellSpec, strategy: HollowingStrategy) -> Self {
        self.shell = Some((shell, strategy));
        self
    }

    /// Bore the base ring at the given mounting radius instead of the
    /// cavity base radius.
    pub fn bore(mut self, radius: f64) -> Self {
        self.bore = Some(radius);
        self
    }

    /// Insert radial reinforcement webs.
    pub fn ribs(mut self, spec: RibSpec) -> Self {
        self.ribs = Some(spec);
        self
    }

    /// Set the sampling resolution for geometry and metrics.
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Execute the pipeline.
    ///
    /// Stage errors abort immediately; thin-wall warnings accumulate and
    /// come back beside the result.
    pub fn run(&self) -> Result<Generated, PipelineError> {
        self.profile.validate()?;
        let outer = sample(&self.profile, self.resolution.steps)?;
        let solid = build_solid(
            &outer,
            self.base_ring_depth,
            self.base_ring_radius,
            self.resolution.facets,
        )?;

        let mut hollow = match &self.shell {
            Some((shell, strategy)) => build_hollow(solid, shell, *strategy, self.bore)?,
            None => HollowSolid {
                mesh: solid.mesh,
                outer: solid.outer,
                inner: Polyline::new(Vec::new())?,
                facets: solid.facets,
                base_ring_depth: solid.base_ring_depth,
                base_ring_radius: solid.base_ring_radius,
                strategy: HollowingStrategy::Ribbed,
                warnings: Vec::new(),
            },
        };
        if let Some(spec) = &self.ribs {
            hollow = insert_ribs(hollow, spec)?;
        }

        validate(&hollow)?;
        let metrics = compute_metrics(&self.profile, self.resolution.steps)?;
        let warnings = std::mem::take(&mut hollow.warnings);
        Ok(Generated {
            solid: hollow,
            metrics,
            warnings,
        })
    }
}
