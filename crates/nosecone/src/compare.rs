//! Cross-family comparison: the same parameter set evaluated for every
//! profile family.

use nosecone_metrics::{compute_metrics, Metrics};
use nosecone_profile::{DomainError, ProfileFamily};
use rayon::prelude::*;

use crate::config::GeneratorConfig;

/// Compute comparison metrics for every profile family under one
/// parameter set.
///
/// Each family keeps its own derived height (the elliptical family is
/// taller, per [`GeneratorConfig::cone_length`]). Families are independent
/// full evaluations with no shared state, so they run in parallel; results
/// come back in family declaration order.
pub fn compare_families(
    config: &GeneratorConfig,
) -> Result<Vec<(ProfileFamily, Metrics)>, DomainError> {
    ProfileFamily::ALL
        .par_iter()
        .map(|&family| {
            let cfg = GeneratorConfig {
                profile_type: family,
                ..config.clone()
            };
            let metrics = compute_metrics(&cfg.profile_spec(), cfg.steps)?;
            Ok((family, metrics))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_families_compared() {
        let results = compare_families(&GeneratorConfig::default()).unwrap();
        assert_eq!(results.len(), ProfileFamily::ALL.len());
        for (i, (family, metrics)) in results.iter().enumerate() {
            assert_eq!(*family, ProfileFamily::ALL[i]);
            assert!(metrics.volume > 0.0, "{}", family.name());
            assert!(metrics.surface_area > 0.0, "{}", family.name());
        }
    }

    #[test]
    fn test_elliptical_gets_taller_body() {
        let results = compare_families(&GeneratorConfig::default()).unwrap();
        let fineness = |family: ProfileFamily| {
            results
                .iter()
                .find(|(f, _)| *f == family)
                .map(|(_, m)| m.fineness_ratio)
                .unwrap()
        };
        let conical = fineness(ProfileFamily::Conical);
        let elliptical = fineness(ProfileFamily::Elliptical);
        assert!((elliptical / conical - 3.0 / 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_parameters_propagate() {
        let config = GeneratorConfig {
            cone_angle: 0.0,
            ..GeneratorConfig::default()
        };
        assert!(compare_families(&config).is_err());
    }
}
