//! Generator configuration: the external parameter set and its derived
//! dimensions.

use nosecone_profile::{ProfileFamily, ProfileSpec};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Height multiplier applied to the angle-derived cone height for the
/// elliptical family, which wants a taller, more pointed body.
const ELLIPTICAL_HEIGHT_FACTOR: f64 = 3.0;

/// Height multiplier for every other family.
const DEFAULT_HEIGHT_FACTOR: f64 = 1.2;

/// The full external parameter set of the generator.
///
/// Field names and defaults follow the generator's parameter file; partial
/// configurations deserialize against the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Mounting bore diameter through the base ring (mm); also drives the
    /// height derivation.
    pub inner_diameter: f64,
    /// Outer base diameter (mm).
    pub outer_diameter: f64,
    /// Axial depth of the cylindrical base ring (mm).
    pub base_ring_depth: f64,
    /// Cone angle (degrees) the profile height is derived from.
    pub cone_angle: f64,
    /// Profile family.
    pub profile_type: ProfileFamily,
    /// Tip rounding factor in `[0, 1]`.
    pub tip_rounding: f64,
    /// Hollow the body at all.
    pub use_lightweighting: bool,
    /// How the shell engine hollows the body.
    pub hollowing_strategy: nosecone_shell::HollowingStrategy,
    /// Shell wall thickness (mm).
    pub shell_thickness: f64,
    /// Wall thinning factor in `(0, 1]`; 1 keeps the wall uniform.
    pub wall_thinning_factor: f64,
    /// Insert radial reinforcement webs.
    pub internal_ribs: bool,
    /// Number of radial webs.
    pub rib_count: u32,
    /// Web thickness (mm).
    pub rib_thickness: f64,
    /// Web height as a fraction of the profile length.
    pub rib_height_fraction: f64,
    /// Axial sampling steps for the profile polyline.
    pub steps: usize,
    /// Angular facet count for revolution.
    pub facets: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            inner_diameter: 67.0,
            outer_diameter: 78.0,
            base_ring_depth: 13.0,
            cone_angle: 52.0,
            profile_type: ProfileFamily::Conical,
            tip_rounding: 0.5,
            use_lightweighting: true,
            hollowing_strategy: nosecone_shell::HollowingStrategy::Ribbed,
            shell_thickness: 1.2,
            wall_thinning_factor: 1.0,
            internal_ribs: true,
            rib_count: 6,
            rib_thickness: 1.0,
            rib_height_fraction: 0.8,
            steps: 120,
            facets: 120,
        }
    }
}

/// Errors from reading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document did not parse as a configuration.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML document did not parse as a configuration.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GeneratorConfig {
    /// Parse a JSON configuration document, filling in defaults.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a TOML configuration document, filling in defaults.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Outer base radius (mm).
    pub fn outer_radius(&self) -> f64 {
        self.outer_diameter / 2.0
    }

    /// Mounting bore radius (mm).
    pub fn inner_radius(&self) -> f64 {
        self.inner_diameter / 2.0
    }

    /// Profile length derived from the cone angle: the radius step from
    /// bore to base over `tan(angle)`, scaled per family.
    pub fn cone_length(&self) -> f64 {
        let height =
            (self.outer_radius() - self.inner_radius()) / self.cone_angle.to_radians().tan();
        let factor = match self.profile_type {
            ProfileFamily::Elliptical => ELLIPTICAL_HEIGHT_FACTOR,
            _ => DEFAULT_HEIGHT_FACTOR,
        };
        height * factor
    }

    /// The profile spec this configuration describes.
    pub fn profile_spec(&self) -> ProfileSpec {
        ProfileSpec {
            family: self.profile_type,
            length: self.cone_length(),
            base_radius: self.outer_radius(),
            tip_rounding: self.tip_rounding,
        }
    }
}
