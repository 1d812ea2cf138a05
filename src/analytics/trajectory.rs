use crate::analytics::errors::AnalyticsError;
use crate::models::orbit::ClassicalElements;
use crate::models::report::TrajectoryPoint;
use crate::physics::propagator::Propagator;

pub struct TrajectorySampler;

impl TrajectorySampler {
    pub const DEFAULT_SAMPLE_COUNT: usize = 500;

    /// Samples one full revolution at `sample_count` points evenly spaced in
    /// period fraction over [0, 1). Position at each fraction comes from the
    /// propagator collaborator; the sampler only owns the schedule and the
    /// ordering of the sequence.
    pub fn sample<P: Propagator>(
        propagator: &P,
        elements: &ClassicalElements,
        sample_count: usize,
    ) -> Result<Vec<TrajectoryPoint>, AnalyticsError> {
        if sample_count < 2 {
            return Err(AnalyticsError::InvalidInput(format!(
                "sample_count must be at least 2, got {}",
                sample_count
            )));
        }

        let mut trajectory = Vec::with_capacity(sample_count);
        for step in 0..sample_count {
            let fraction = step as f64 / sample_count as f64;
            let position = propagator.position_at(elements, fraction)?;
            trajectory.push(TrajectoryPoint::from(position));
        }
        Ok(trajectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::propagator::TwoBodyPropagator;
    use approx::assert_abs_diff_eq;
    use hifitime::Epoch;
    use test_case::test_case;

    fn leo_elements() -> ClassicalElements {
        ClassicalElements {
            semi_major_axis_km: 6871.0,
            eccentricity: 0.0,
            inclination_deg: 51.6,
            raan_deg: 0.0,
            arg_perigee_deg: 0.0,
            true_anomaly_deg: 0.0,
            epoch: Epoch::from_gregorian_utc(2024, 3, 15, 0, 0, 0, 0),
        }
    }

    #[test_case(2; "minimum sample count")]
    #[test_case(100; "coarse sampling")]
    #[test_case(500; "reference sample count")]
    fn test_returns_exactly_n_points(sample_count: usize) {
        let propagator = TwoBodyPropagator::earth();
        let trajectory =
            TrajectorySampler::sample(&propagator, &leo_elements(), sample_count).unwrap();
        assert_eq!(trajectory.len(), sample_count);
    }

    #[test_case(0; "zero samples")]
    #[test_case(1; "single sample")]
    fn test_degenerate_sample_count_is_rejected(sample_count: usize) {
        let propagator = TwoBodyPropagator::earth();
        let result = TrajectorySampler::sample(&propagator, &leo_elements(), sample_count);
        assert!(matches!(result, Err(AnalyticsError::InvalidInput(_))));
    }

    #[test]
    fn test_one_full_period_closes_the_loop() {
        let propagator = TwoBodyPropagator::earth();
        let elements = leo_elements();
        let trajectory = TrajectorySampler::sample(&propagator, &elements, 500).unwrap();

        // The position one full period after the first sample coincides with it.
        let first = trajectory[0];
        let wrapped = propagator.position_at(&elements, 1.0).unwrap();
        assert_abs_diff_eq!(first.x_km, wrapped.x, epsilon = 1e-6);
        assert_abs_diff_eq!(first.y_km, wrapped.y, epsilon = 1e-6);
        assert_abs_diff_eq!(first.z_km, wrapped.z, epsilon = 1e-6);
    }

    #[test]
    fn test_samples_lie_on_the_circular_orbit() {
        let propagator = TwoBodyPropagator::earth();
        let trajectory = TrajectorySampler::sample(&propagator, &leo_elements(), 100).unwrap();
        for point in trajectory {
            let r = (point.x_km.powi(2) + point.y_km.powi(2) + point.z_km.powi(2)).sqrt();
            assert_abs_diff_eq!(r, 6871.0, epsilon = 1e-6);
        }
    }
}
