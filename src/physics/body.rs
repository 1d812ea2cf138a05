use crate::constants::{EARTH_MEAN_RADIUS_KM, EARTH_MU_KM3_S2};

/// Physical properties of the orbited body, supplied to the propagator and
/// the orbit resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralBody {
    pub mean_radius_km: f64,
    pub mu_km3_s2: f64,
}

pub const EARTH: CentralBody = CentralBody {
    mean_radius_km: EARTH_MEAN_RADIUS_KM,
    mu_km3_s2: EARTH_MU_KM3_S2,
};
