use crate::analytics::errors::AnalyticsError;
use crate::constants::{EARTH_CIRCUMFERENCE_KM, ORBITS_PER_DAY};

/// Coarse global revisit estimate from the imaged swath width, rounded to
/// one decimal. Assumes a fixed 14 orbits/day rather than the resolved
/// orbit's actual period, a known planning approximation.
pub fn estimate_revisit_days(swath_width_km: f64) -> Result<f64, AnalyticsError> {
    if !swath_width_km.is_finite() || swath_width_km <= 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "swath_width_km must be positive, got {}",
            swath_width_km
        )));
    }

    let days = EARTH_CIRCUMFERENCE_KM / (swath_width_km * ORBITS_PER_DAY);
    Ok((days * 10.0).round() / 10.0)
}
