use crate::analytics::errors::AnalyticsError;
use crate::models::orbit::{OrbitSpec, OrbitType};
use crate::models::payload::{PowerSpec, SensorSpec, SensorType};
use log::{debug, warn};
use serde::Deserialize;

/// One recompute request as it arrives from a front end. Every field may be
/// absent, in which case the documented per-field default applies.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MissionInput {
    pub orbit_type: Option<String>,
    pub altitude_km: Option<f64>,
    pub inclination_deg: Option<f64>,
    pub sensor_type: Option<String>,
    pub sensor_resolution_m: Option<f64>,
    pub swath_width_km: Option<f64>,
    pub solar_area_m2: Option<f64>,
    pub solar_efficiency_pct: Option<f64>,
    pub power_consumption_w: Option<f64>,
}

/// Fully-resolved parameter set: defaults applied once at the boundary,
/// every value concrete and checked.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionParameters {
    pub orbit: OrbitSpec,
    pub sensor: SensorSpec,
    pub power: PowerSpec,
    pub swath_width_km: f64,
}

impl MissionParameters {
    pub const DEFAULT_ALTITUDE_KM: f64 = 500.0;
    pub const DEFAULT_INCLINATION_DEG: f64 = 90.0;
    pub const DEFAULT_RESOLUTION_M: f64 = 10.0;
    pub const DEFAULT_SWATH_WIDTH_KM: f64 = 100.0;
    pub const DEFAULT_PANEL_AREA_M2: f64 = 1.5;
    pub const DEFAULT_CELL_EFFICIENCY_PCT: f64 = 28.0;
    pub const DEFAULT_CONSUMPTION_W: f64 = 50.0;
}

impl MissionInput {
    /// Applies the documented defaults and validates every numeric field.
    /// Zero counts as "not provided" (form fields clear to zero); negative,
    /// non-finite, or out-of-range values are rejected.
    pub fn resolve(&self) -> Result<MissionParameters, AnalyticsError> {
        let orbit_type = match &self.orbit_type {
            Some(label) => OrbitType::from_label(label),
            None => OrbitType::Leo,
        };

        let altitude_km = positive_or_default(
            self.altitude_km,
            MissionParameters::DEFAULT_ALTITUDE_KM,
            "altitude_km",
        )?;
        let inclination_deg = inclination_or_default(self.inclination_deg)?;

        let sensor = match &self.sensor_type {
            Some(label) => {
                let parsed = SensorType::from_label(label);
                if parsed.is_none() {
                    warn!(
                        "unrecognized sensor type {:?}, data rate will be zero",
                        label
                    );
                }
                parsed
            }
            None => Some(SensorType::Msi),
        };
        let resolution_m = positive_or_default(
            self.sensor_resolution_m,
            MissionParameters::DEFAULT_RESOLUTION_M,
            "sensor_resolution_m",
        )?;

        let swath_width_km = positive_or_default(
            self.swath_width_km,
            MissionParameters::DEFAULT_SWATH_WIDTH_KM,
            "swath_width_km",
        )?;

        let panel_area_m2 = positive_or_default(
            self.solar_area_m2,
            MissionParameters::DEFAULT_PANEL_AREA_M2,
            "solar_area_m2",
        )?;
        let cell_efficiency_pct = positive_or_default(
            self.solar_efficiency_pct,
            MissionParameters::DEFAULT_CELL_EFFICIENCY_PCT,
            "solar_efficiency_pct",
        )?;
        if cell_efficiency_pct > 100.0 {
            return Err(AnalyticsError::InvalidInput(format!(
                "solar_efficiency_pct must lie in (0, 100], got {}",
                cell_efficiency_pct
            )));
        }
        let avg_consumption_w = positive_or_default(
            self.power_consumption_w,
            MissionParameters::DEFAULT_CONSUMPTION_W,
            "power_consumption_w",
        )?;

        Ok(MissionParameters {
            orbit: OrbitSpec {
                orbit_type,
                altitude_km,
                inclination_deg,
            },
            sensor: SensorSpec {
                sensor,
                resolution_m,
            },
            power: PowerSpec {
                panel_area_m2,
                cell_efficiency_pct,
                avg_consumption_w,
            },
            swath_width_km,
        })
    }
}

fn positive_or_default(
    value: Option<f64>,
    default: f64,
    field: &'static str,
) -> Result<f64, AnalyticsError> {
    match value {
        None => Ok(default),
        Some(v) if v == 0.0 => {
            debug!("{} not provided, using default {}", field, default);
            Ok(default)
        }
        Some(v) if !v.is_finite() || v < 0.0 => Err(AnalyticsError::InvalidInput(format!(
            "{} must be a positive, finite number, got {}",
            field, v
        ))),
        Some(v) => Ok(v),
    }
}

fn inclination_or_default(value: Option<f64>) -> Result<f64, AnalyticsError> {
    match value {
        None => Ok(MissionParameters::DEFAULT_INCLINATION_DEG),
        Some(v) if v == 0.0 => {
            debug!(
                "inclination_deg not provided, using default {}",
                MissionParameters::DEFAULT_INCLINATION_DEG
            );
            Ok(MissionParameters::DEFAULT_INCLINATION_DEG)
        }
        Some(v) if !v.is_finite() || !(0.0..=180.0).contains(&v) => {
            Err(AnalyticsError::InvalidInput(format!(
                "inclination_deg must lie in [0, 180], got {}",
                v
            )))
        }
        Some(v) => Ok(v),
    }
}
