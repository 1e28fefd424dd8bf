//! Profile specification value objects.

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// The supported axisymmetric nose-shape families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileFamily {
    /// Linear taper with an optional quarter-circle rounded tip.
    Conical,
    /// Parabolic ogive: `r = R·(1 − (z/L)²)`.
    Ogive,
    /// Elliptical: `r = R·√(1 − (z/L)²)`.
    Elliptical,
    /// Von Kármán (Haack series, C = 0), parametrized by angle.
    #[serde(rename = "karman")]
    VonKarman,
    /// Tangent ogive: circular arc tangent to the axis at the tip.
    #[serde(rename = "tangent")]
    TangentOgive,
}

impl ProfileFamily {
    /// All supported families, in comparison-report order.
    pub const ALL: [ProfileFamily; 5] = [
        ProfileFamily::Conical,
        ProfileFamily::Ogive,
        ProfileFamily::Elliptical,
        ProfileFamily::VonKarman,
        ProfileFamily::TangentOgive,
    ];

    /// Human-readable family name.
    pub fn name(&self) -> &'static str {
        match self {
            ProfileFamily::Conical => "conical",
            ProfileFamily::Ogive => "ogive",
            ProfileFamily::Elliptical => "elliptical",
            ProfileFamily::VonKarman => "von karman",
            ProfileFamily::TangentOgive => "tangent ogive",
        }
    }
}

/// Immutable description of one concrete nose-cone profile.
///
/// Dimensions are in millimeters. `tip_rounding` applies to the conical
/// family only; the curved families come to their own natural tips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSpec {
    /// The shape family.
    pub family: ProfileFamily,
    /// Axial length of the profile (mm), > 0.
    pub length: f64,
    /// Radius at the base (mm), > 0.
    pub base_radius: f64,
    /// Tip rounding factor in `[0, 1)`; 0 is a sharp tip.
    pub tip_rounding: f64,
}

impl ProfileSpec {
    /// Create a validated profile spec.
    pub fn new(
        family: ProfileFamily,
        length: f64,
        base_radius: f64,
        tip_rounding: f64,
    ) -> Result<Self, DomainError> {
        let spec = Self {
            family,
            length,
            base_radius,
            tip_rounding,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check the numeric invariants. Deserialized specs must be validated
    /// before use.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(self.length > 0.0) {
            return Err(DomainError::NonPositiveLength(self.length));
        }
        if !(self.base_radius > 0.0) {
            return Err(DomainError::NonPositiveRadius(self.base_radius));
        }
        if !(0.0..1.0).contains(&self.tip_rounding) {
            return Err(DomainError::TipRoundingOutOfRange(self.tip_rounding));
        }
        Ok(())
    }

    /// Radius of the rounded tip arc (mm).
    ///
    /// Scaled by the smaller of base radius and length so the quarter-circle
    /// arc always fits inside the axial extent; for slender profiles
    /// (length ≥ base radius) this is exactly `base_radius · tip_rounding`.
    pub fn tip_radius(&self) -> f64 {
        self.tip_rounding * self.base_radius.min(self.length)
    }
}
