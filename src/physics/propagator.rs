use crate::constants::PI;
use crate::models::orbit::ClassicalElements;
use crate::physics::body::{CentralBody, EARTH};
use crate::physics::orbital::OrbitalMechanics;
use nalgebra as na;
use std::{error::Error, fmt};

const KEPLER_TOLERANCE: f64 = 1e-10;
const KEPLER_MAX_ITERATIONS: i32 = 50;

#[derive(Debug)]
pub enum PropagationError {
    UnsupportedEccentricity(f64),
    NonPhysicalOrbit(f64),
    NumericalDivergence,
}

impl fmt::Display for PropagationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropagationError::UnsupportedEccentricity(e) => {
                write!(f, "Unsupported eccentricity: {}", e)
            }
            PropagationError::NonPhysicalOrbit(a) => {
                write!(f, "Non-physical semi-major axis: {} km", a)
            }
            PropagationError::NumericalDivergence => {
                write!(f, "Propagation produced a non-finite position")
            }
        }
    }
}

impl Error for PropagationError {}

/// Narrow seam to the propagation collaborator: given an element set and an
/// elapsed-time fraction of one period, produce the position in the inertial
/// frame centred on the body.
pub trait Propagator {
    fn body(&self) -> &CentralBody;

    fn position_at(
        &self,
        elements: &ClassicalElements,
        period_fraction: f64,
    ) -> Result<na::Vector3<f64>, PropagationError>;
}

/// Closed-form unperturbed two-body propagation.
pub struct TwoBodyPropagator {
    body: CentralBody,
}

impl TwoBodyPropagator {
    pub fn new(body: CentralBody) -> Self {
        Self { body }
    }

    pub fn earth() -> Self {
        Self::new(EARTH)
    }
}

impl Propagator for TwoBodyPropagator {
    fn body(&self) -> &CentralBody {
        &self.body
    }

    #[allow(non_snake_case)]
    fn position_at(
        &self,
        elements: &ClassicalElements,
        period_fraction: f64,
    ) -> Result<na::Vector3<f64>, PropagationError> {
        let a = elements.semi_major_axis_km;
        let e = elements.eccentricity;

        if !a.is_finite() || a <= 0.0 {
            return Err(PropagationError::NonPhysicalOrbit(a));
        }
        if !e.is_finite() || !(0.0..1.0).contains(&e) {
            return Err(PropagationError::UnsupportedEccentricity(e));
        }

        // Advance the mean anomaly by the elapsed fraction of one revolution,
        // then recover the true anomaly through Kepler's equation. For the
        // circular orbits the resolver produces, all three anomalies coincide.
        let nu0 = elements.true_anomaly_deg.to_radians();
        let E0 = OrbitalMechanics::true_to_eccentric_anomaly(nu0, e);
        let M0 = OrbitalMechanics::eccentric_to_mean_anomaly(E0, e);
        let M = (M0 + 2.0 * PI * period_fraction) % (2.0 * PI);
        let E = OrbitalMechanics::mean_to_eccentric_anomaly(
            M,
            e,
            KEPLER_TOLERANCE,
            KEPLER_MAX_ITERATIONS,
        );
        let nu = OrbitalMechanics::eccentric_to_true_anomaly(E, e);

        let keplerian = na::Vector6::new(
            a,
            e,
            elements.inclination_deg.to_radians(),
            elements.raan_deg.to_radians(),
            elements.arg_perigee_deg.to_radians(),
            nu,
        );
        let (position, _velocity) =
            OrbitalMechanics::keplerian_to_cartesian(&keplerian, self.body.mu_km3_s2);

        if !(position.x.is_finite() && position.y.is_finite() && position.z.is_finite()) {
            return Err(PropagationError::NumericalDivergence);
        }
        Ok(position)
    }
}
