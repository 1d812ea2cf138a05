use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload sensor families with distinct per-orbit data generation rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorType {
    Msi,
    Hsi,
    Sar,
}

impl SensorType {
    /// An unrecognized label yields no sensor (zero data rate) rather than
    /// an error.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "MSI" => Some(SensorType::Msi),
            "HSI" => Some(SensorType::Hsi),
            "SAR" => Some(SensorType::Sar),
            _ => None,
        }
    }

    /// Per-orbit data volume per meter of ground resolution (MB/orbit/m).
    pub fn data_rate_factor(&self) -> f64 {
        match self {
            SensorType::Msi => 0.1,
            SensorType::Hsi => 0.5,
            SensorType::Sar => 1.0,
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SensorType::Msi => write!(f, "Multispectral Imager"),
            SensorType::Hsi => write!(f, "Hyperspectral Imager"),
            SensorType::Sar => write!(f, "Synthetic Aperture Radar"),
        }
    }
}

/// Sensor configuration after boundary defaulting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSpec {
    pub sensor: Option<SensorType>,
    pub resolution_m: f64,
}

/// Electrical power configuration after boundary defaulting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerSpec {
    pub panel_area_m2: f64,
    pub cell_efficiency_pct: f64,
    pub avg_consumption_w: f64,
}
