use hifitime::Epoch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named orbit regimes selectable in the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitType {
    Leo,
    Sso,
    Polar,
    Custom,
}

impl OrbitType {
    /// Permissive label parsing: an unrecognized label is treated as a
    /// custom orbit so the analytics stay available.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "LEO" => OrbitType::Leo,
            "SSO" => OrbitType::Sso,
            "POLAR" => OrbitType::Polar,
            _ => OrbitType::Custom,
        }
    }
}

impl fmt::Display for OrbitType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OrbitType::Leo => write!(f, "LEO"),
            OrbitType::Sso => write!(f, "SSO (Sun-Synchronous)"),
            OrbitType::Polar => write!(f, "Polar Orbit"),
            OrbitType::Custom => write!(f, "Custom"),
        }
    }
}

/// Orbit selection after boundary defaulting. Altitude and inclination are
/// concrete here, but non-custom orbit types still override them from the
/// resolver's reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSpec {
    pub orbit_type: OrbitType,
    pub altitude_km: f64,
    pub inclination_deg: f64,
}

/// Classical orbital elements of a resolved orbit. Every orbit the resolver
/// produces is circular (eccentricity 0) and starts at the canonical
/// reference point (raan = argp = nu = 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassicalElements {
    pub semi_major_axis_km: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub raan_deg: f64,
    pub arg_perigee_deg: f64,
    pub true_anomaly_deg: f64,
    pub epoch: Epoch,
}
