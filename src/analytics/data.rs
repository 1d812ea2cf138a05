use crate::analytics::errors::AnalyticsError;
use crate::constants::{DOWNLINK_HOURS_PER_DAY, MISSION_DURATION_DAYS};
use crate::models::payload::SensorSpec;
use crate::models::report::DataBudget;

/// Per-orbit data rate from the sensor family and ground resolution, rolled
/// up into the onboard storage required over the mission. The roll-up scales
/// the per-orbit rate by downlink hours per day and mission days. A missing
/// sensor produces a zero rate, never an error.
pub fn estimate_data_budget(spec: &SensorSpec) -> Result<DataBudget, AnalyticsError> {
    if !spec.resolution_m.is_finite() || spec.resolution_m <= 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "resolution_m must be positive, got {}",
            spec.resolution_m
        )));
    }

    let rate_mb_per_orbit = match spec.sensor {
        Some(sensor) => spec.resolution_m * sensor.data_rate_factor(),
        None => 0.0,
    };
    let required_storage_mb = rate_mb_per_orbit * DOWNLINK_HOURS_PER_DAY * MISSION_DURATION_DAYS;

    Ok(DataBudget {
        rate_mb_per_orbit,
        required_storage_mb,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payload::SensorType;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(Some(SensorType::Msi), 10.0, 1.0, 4380.0; "multispectral at 10 m")]
    #[test_case(Some(SensorType::Hsi), 10.0, 5.0, 21900.0; "hyperspectral at 10 m")]
    #[test_case(Some(SensorType::Sar), 10.0, 10.0, 43800.0; "radar at 10 m")]
    #[test_case(Some(SensorType::Sar), 1.0, 1.0, 4380.0; "radar at 1 m")]
    #[test_case(None, 10.0, 0.0, 0.0; "no recognized sensor")]
    fn test_data_budget(
        sensor: Option<SensorType>,
        resolution_m: f64,
        expected_rate_mb: f64,
        expected_storage_mb: f64,
    ) {
        let spec = SensorSpec {
            sensor,
            resolution_m,
        };
        let budget = estimate_data_budget(&spec).unwrap();
        assert_abs_diff_eq!(budget.rate_mb_per_orbit, expected_rate_mb, epsilon = 1e-9);
        assert_abs_diff_eq!(
            budget.required_storage_mb,
            expected_storage_mb,
            epsilon = 1e-9
        );
    }

    #[test_case(0.0; "zero resolution")]
    #[test_case(-5.0; "negative resolution")]
    fn test_degenerate_resolution_is_rejected(resolution_m: f64) {
        let spec = SensorSpec {
            sensor: Some(SensorType::Msi),
            resolution_m,
        };
        assert!(matches!(
            estimate_data_budget(&spec),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }
}
