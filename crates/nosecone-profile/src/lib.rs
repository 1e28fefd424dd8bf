#![warn(missing_docs)]

//! Nose-cone profile families for the nosecone kernel.
//!
//! A profile is a pure function from normalized axial position to radius.
//! This crate provides the five supported shape families, the [`ProfileSpec`]
//! value object describing one concrete profile, and the curve sampler that
//! discretizes a profile into an ordered [`Polyline`].
//!
//! # Example
//!
//! ```
//! use nosecone_profile::{sample, ProfileFamily, ProfileSpec};
//!
//! let spec = ProfileSpec::new(ProfileFamily::Ogive, 100.0, 50.0, 0.0).unwrap();
//! let poly = sample(&spec, 60).unwrap();
//! assert_eq!(poly.len(), 61);
//! assert!((poly.first().r - 50.0).abs() < 1e-9);
//! ```

mod curve;
mod sample;
mod spec;

pub use curve::radius_at;
pub use sample::{sample, Polyline, ProfilePoint, MIN_STEPS};
pub use spec::{ProfileFamily, ProfileSpec};

use thiserror::Error;

/// Errors from profile evaluation and sampling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Profile length must be strictly positive.
    #[error("profile length must be positive, got {0}")]
    NonPositiveLength(f64),

    /// Base radius must be strictly positive.
    #[error("base radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    /// Tip rounding factor must lie in `[0, 1)`.
    #[error("tip rounding factor must be in [0, 1), got {0}")]
    TipRoundingOutOfRange(f64),

    /// Axial position queried outside the profile's axial range.
    #[error("axial position {z} outside profile range [0, {length}]")]
    AxialOutOfRange {
        /// The offending axial position.
        z: f64,
        /// The profile length.
        length: f64,
    },

    /// Sampler step count below the supported minimum.
    #[error("step count {0} below minimum of {min}", min = MIN_STEPS)]
    TooFewSteps(usize),
}
