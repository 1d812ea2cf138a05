use crate::analytics::errors::AnalyticsError;
use crate::constants::{ECLIPSE_FRACTION, SOLAR_CONSTANT};
use crate::models::payload::PowerSpec;
use crate::models::report::PowerBudget;

/// Generated vs consumed power over an average orbit. The eclipse fraction
/// is a fixed LEO average, not derived from the resolved orbit's altitude or
/// inclination. Generation at or above consumption counts as sufficient.
pub fn estimate_power_budget(spec: &PowerSpec) -> Result<PowerBudget, AnalyticsError> {
    check_positive(spec.panel_area_m2, "panel_area_m2")?;
    check_positive(spec.cell_efficiency_pct, "cell_efficiency_pct")?;
    if spec.cell_efficiency_pct > 100.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "cell_efficiency_pct must lie in (0, 100], got {}",
            spec.cell_efficiency_pct
        )));
    }
    check_positive(spec.avg_consumption_w, "avg_consumption_w")?;

    let generated_w = SOLAR_CONSTANT
        * spec.panel_area_m2
        * (spec.cell_efficiency_pct / 100.0)
        * (1.0 - ECLIPSE_FRACTION);

    Ok(PowerBudget {
        generated_w,
        consumed_w: spec.avg_consumption_w,
        sufficient: generated_w >= spec.avg_consumption_w,
    })
}

fn check_positive(value: f64, field: &'static str) -> Result<(), AnalyticsError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    Ok(())
}
