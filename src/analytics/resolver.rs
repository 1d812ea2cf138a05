use crate::models::orbit::{ClassicalElements, OrbitSpec, OrbitType};
use crate::physics::body::CentralBody;
use hifitime::Epoch;

pub struct OrbitResolver;

impl OrbitResolver {
    /// Maps an orbit selection to a complete classical element set.
    ///
    /// Reference altitude and inclination per orbit type:
    ///   LEO   500 km, 51.6°
    ///   SSO   600 km, 97.5°
    ///   POLAR 700 km, 90.0°
    /// Custom orbits use the supplied values; for the named types any
    /// supplied altitude or inclination is ignored. The result is always
    /// circular, starting at the canonical reference point.
    pub fn resolve(spec: &OrbitSpec, body: &CentralBody, epoch: Epoch) -> ClassicalElements {
        let (altitude_km, inclination_deg) = match spec.orbit_type {
            OrbitType::Leo => (500.0, 51.6),
            OrbitType::Sso => (600.0, 97.5),
            OrbitType::Polar => (700.0, 90.0),
            OrbitType::Custom => (spec.altitude_km, spec.inclination_deg),
        };

        ClassicalElements {
            semi_major_axis_km: body.mean_radius_km + altitude_km,
            eccentricity: 0.0,
            inclination_deg,
            raan_deg: 0.0,
            arg_perigee_deg: 0.0,
            true_anomaly_deg: 0.0,
            epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::body::EARTH;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    fn fixed_epoch() -> Epoch {
        Epoch::from_gregorian_utc(2024, 3, 15, 0, 0, 0, 0)
    }

    #[test_case(OrbitType::Leo, 500.0, 51.6; "LEO reference orbit")]
    #[test_case(OrbitType::Sso, 600.0, 97.5; "sun-synchronous reference orbit")]
    #[test_case(OrbitType::Polar, 700.0, 90.0; "polar reference orbit")]
    fn test_named_types_ignore_supplied_values(
        orbit_type: OrbitType,
        expected_altitude_km: f64,
        expected_inclination_deg: f64,
    ) {
        // Deliberately contradictory user values; the table must win.
        let spec = OrbitSpec {
            orbit_type,
            altitude_km: 1234.0,
            inclination_deg: 12.3,
        };
        let elements = OrbitResolver::resolve(&spec, &EARTH, fixed_epoch());
        assert_abs_diff_eq!(
            elements.semi_major_axis_km,
            EARTH.mean_radius_km + expected_altitude_km,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            elements.inclination_deg,
            expected_inclination_deg,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_custom_uses_supplied_values() {
        let spec = OrbitSpec {
            orbit_type: OrbitType::Custom,
            altitude_km: 820.0,
            inclination_deg: 63.4,
        };
        let elements = OrbitResolver::resolve(&spec, &EARTH, fixed_epoch());
        assert_abs_diff_eq!(elements.semi_major_axis_km, 6371.0 + 820.0, epsilon = 1e-12);
        assert_abs_diff_eq!(elements.inclination_deg, 63.4, epsilon = 1e-12);
    }

    #[test]
    fn test_resolved_orbit_is_circular_at_reference_point() {
        let spec = OrbitSpec {
            orbit_type: OrbitType::Sso,
            altitude_km: 600.0,
            inclination_deg: 97.5,
        };
        let elements = OrbitResolver::resolve(&spec, &EARTH, fixed_epoch());
        assert_eq!(elements.eccentricity, 0.0);
        assert_eq!(elements.raan_deg, 0.0);
        assert_eq!(elements.arg_perigee_deg, 0.0);
        assert_eq!(elements.true_anomaly_deg, 0.0);
        assert_eq!(elements.epoch, fixed_epoch());
    }
}
