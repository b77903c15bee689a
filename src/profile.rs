use thiserror::Error;

use crate::atmosphere::AtmosphereModel;
use crate::types::Atmo;

/// Upper bound on the number of samples a single profile may hold.
pub const MAX_SAMPLES: usize = 1_000_000;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    #[error("Profile bounds must be finite (got {from} to {to})")]
    NonFinite { from: f64, to: f64 },

    #[error("Profile step must be a positive finite number (got {0})")]
    BadStep(f64),

    #[error("Profile range is descending ({from} > {to})")]
    Descending { from: f64, to: f64 },

    #[error("Profile would hold {count} samples (limit {})", MAX_SAMPLES)]
    TooManySamples { count: f64 },
}

/// Sample the model at `from, from + step, ...` up to and including `to`.
///
/// The last sample always sits exactly on `to`, even when the range is not a
/// whole number of steps. Ranges needing more than [`MAX_SAMPLES`] samples
/// are rejected.
pub fn sample_profile(
    model: &AtmosphereModel,
    from: f64,
    to: f64,
    step: f64,
) -> Result<Vec<Atmo>, ProfileError> {
    if !from.is_finite() || !to.is_finite() {
        return Err(ProfileError::NonFinite { from, to });
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(ProfileError::BadStep(step));
    }
    if from > to {
        return Err(ProfileError::Descending { from, to });
    }

    // Index-based so long ranges don't accumulate rounding drift.
    let count = ((to - from) / step).floor() + 1.0;
    if !count.is_finite() || count > MAX_SAMPLES as f64 {
        return Err(ProfileError::TooManySamples { count });
    }
    let n = count as usize - 1;
    let mut samples: Vec<Atmo> = (0..=n)
        .map(|i| model.at((from + i as f64 * step).min(to)))
        .collect();
    if samples.last().is_some_and(|s| s.altitude < to) {
        samples.push(model.at(to));
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_range() {
        let isa = AtmosphereModel::default();
        let p = sample_profile(&isa, 0.0, 10_000.0, 1_000.0).unwrap();
        assert_eq!(p.len(), 11);
        assert_eq!(p[0].altitude, 0.0);
        assert_eq!(p[10].altitude, 10_000.0);
        assert_eq!(p[3], isa.at(3_000.0));
    }

    #[test]
    fn ragged_range_ends_on_upper_bound() {
        let isa = AtmosphereModel::default();
        let p = sample_profile(&isa, 0.0, 2_500.0, 1_000.0).unwrap();
        let alts: Vec<f64> = p.iter().map(|s| s.altitude).collect();
        assert_eq!(alts, vec![0.0, 1_000.0, 2_000.0, 2_500.0]);
    }

    #[test]
    fn single_point_range() {
        let isa = AtmosphereModel::default();
        let p = sample_profile(&isa, 5_000.0, 5_000.0, 100.0).unwrap();
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn rejects_bad_input() {
        let isa = AtmosphereModel::default();
        assert_eq!(
            sample_profile(&isa, 0.0, 1_000.0, 0.0),
            Err(ProfileError::BadStep(0.0))
        );
        assert!(matches!(
            sample_profile(&isa, 2_000.0, 1_000.0, 10.0),
            Err(ProfileError::Descending { .. })
        ));
        assert!(matches!(
            sample_profile(&isa, 0.0, f64::INFINITY, 10.0),
            Err(ProfileError::NonFinite { .. })
        ));
    }

    #[test]
    fn rejects_oversized_ranges() {
        let isa = AtmosphereModel::default();
        assert!(matches!(
            sample_profile(&isa, -1e308, 1e308, 1.0),
            Err(ProfileError::TooManySamples { .. })
        ));
        assert!(matches!(
            sample_profile(&isa, 0.0, 1e12, 1.0),
            Err(ProfileError::TooManySamples { .. })
        ));

        let p = sample_profile(&isa, 0.0, (MAX_SAMPLES - 1) as f64, 1.0).unwrap();
        assert_eq!(p.len(), MAX_SAMPLES);
    }
}
