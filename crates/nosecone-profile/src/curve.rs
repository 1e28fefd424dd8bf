//! Closed-form radius evaluation for each profile family.

use std::f64::consts::PI;

use nosecone_math::Tolerance;

use crate::{DomainError, ProfileFamily, ProfileSpec};

/// Evaluate the profile radius at axial position `z ∈ [0, length]`.
///
/// z = 0 is the base, z = length is the tip. All families are monotonically
/// non-increasing from base to tip.
///
/// # Errors
///
/// `DomainError` if the spec dimensions are invalid or `z` lies outside
/// `[0, length]`.
pub fn radius_at(spec: &ProfileSpec, z: f64) -> Result<f64, DomainError> {
    spec.validate()?;
    if !z.is_finite() || z < 0.0 || z > spec.length {
        return Err(DomainError::AxialOutOfRange {
            z,
            length: spec.length,
        });
    }

    let l = spec.length;
    let base = spec.base_radius;
    let r = match spec.family {
        ProfileFamily::Conical => conical(spec, z),
        ProfileFamily::Ogive => {
            let u = z / l;
            base * (1.0 - u * u)
        }
        ProfileFamily::Elliptical => {
            let u = z / l;
            base * (1.0 - u * u).max(0.0).sqrt()
        }
        ProfileFamily::VonKarman => von_karman(base, l, z),
        ProfileFamily::TangentOgive => {
            let rho = (l * l + base * base) / (2.0 * base);
            (rho * rho - z * z).max(0.0).sqrt() + base - rho
        }
    };
    Ok(r.max(0.0))
}

fn conical(spec: &ProfileSpec, z: f64) -> f64 {
    let tol = Tolerance::DEFAULT;
    let t = spec.tip_radius();
    if tol.is_zero(t) {
        // Sharp cone: straight taper all the way to the tip.
        return spec.base_radius * (1.0 - z / spec.length);
    }
    let straight = spec.length - t;
    if z <= straight {
        // Taper from base radius down to the tip-arc radius.
        spec.base_radius + (t - spec.base_radius) * z / straight
    } else {
        // Quarter-circle tip arc: z = straight + t·sinθ, r = t·cosθ.
        let s = ((z - straight) / t).min(1.0);
        t * (1.0 - s * s).max(0.0).sqrt()
    }
}

/// Haack series constant: 0 = Von Kármán (minimum drag for given length
/// and diameter). 1/3 would give LV-Haack, 2/3 LD-Haack.
const HAACK_C: f64 = 0.0;

fn von_karman(base: f64, l: f64, z: f64) -> f64 {
    // Invert z(θ): θ runs π → 0 as z runs 0 → length.
    let cos_theta = (2.0 * z / l - 1.0).clamp(-1.0, 1.0);
    let theta = cos_theta.acos();
    haack_radius(base, theta)
}

/// Haack radius at parameter angle θ (θ = π is the base, θ = 0 the tip).
pub(crate) fn haack_radius(base: f64, theta: f64) -> f64 {
    let term = (theta - (2.0 * theta).sin() / 2.0) / PI + HAACK_C * theta.sin().powi(3);
    base * term.max(0.0).sqrt()
}
