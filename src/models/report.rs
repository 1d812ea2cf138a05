use crate::models::orbit::ClassicalElements;
use nalgebra as na;
use serde::Serialize;

/// One sampled point of the orbit trajectory, body-centred inertial frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub x_km: f64,
    pub y_km: f64,
    pub z_km: f64,
}

impl From<na::Vector3<f64>> for TrajectoryPoint {
    fn from(r: na::Vector3<f64>) -> Self {
        TrajectoryPoint {
            x_km: r.x,
            y_km: r.y,
            z_km: r.z,
        }
    }
}

/// Generated vs consumed power over an average orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerBudget {
    pub generated_w: f64,
    pub consumed_w: f64,
    pub sufficient: bool,
}

/// Per-orbit data volume and the onboard storage it implies over the mission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataBudget {
    pub rate_mb_per_orbit: f64,
    pub required_storage_mb: f64,
}

/// The mission-feasibility estimates of one recomputation. The data budget
/// is absent when the engine is configured without that panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetResult {
    pub revisit_days: f64,
    pub power: PowerBudget,
    pub data: Option<DataBudget>,
}

/// Full result of one recomputation request: the resolved orbit, its sampled
/// trajectory, and the budget estimates. Produced fresh per request, never
/// retained by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionReport {
    pub elements: ClassicalElements,
    pub trajectory: Vec<TrajectoryPoint>,
    pub budget: BudgetResult,
}
