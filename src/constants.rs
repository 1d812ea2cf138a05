// Celestial body constants (km-based, matching the propagator interface)
pub const EARTH_MU_KM3_S2: f64 = 398600.4418; // Gravitational parameter (km³/s²)
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0; // Mean radius (km)
pub const EARTH_CIRCUMFERENCE_KM: f64 = 40075.0; // Equatorial circumference (km)

// Mission analytics constants
pub const SOLAR_CONSTANT: f64 = 1361.0; // Solar constant at 1 AU (W/m²)
pub const ECLIPSE_FRACTION: f64 = 0.35; // Fraction of each orbit in shadow, rough LEO average
pub const ORBITS_PER_DAY: f64 = 14.0; // LEO approximation, not derived from the resolved orbit
pub const DOWNLINK_HOURS_PER_DAY: f64 = 12.0; // Hours of downlink visibility per day
pub const MISSION_DURATION_DAYS: f64 = 365.0; // One-year mission

// Math
pub const PI: f64 = std::f64::consts::PI;
