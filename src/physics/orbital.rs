use crate::constants::PI;
use nalgebra as na;

pub struct OrbitalMechanics;

#[allow(non_snake_case)]
impl OrbitalMechanics {
    /// Orbital period from the semi-major axis [km] and gravitational
    /// parameter [km³/s²]. Returns seconds.
    pub fn compute_orbital_period(a_km: f64, mu_km3_s2: f64) -> f64 {
        2.0 * PI * (a_km.powi(3) / mu_km3_s2).sqrt()
    }

    /// Circular orbital velocity at radius r [km]. Returns km/s.
    pub fn compute_circular_velocity(r_km: f64, mu_km3_s2: f64) -> f64 {
        (mu_km3_s2 / r_km).sqrt()
    }

    // Anomaly conversion functions
    pub fn true_to_eccentric_anomaly(nu: f64, e: f64) -> f64 {
        if e < 1e-11 {
            return nu;
        }

        let cos_nu = nu.cos();
        let mut E = ((1.0 - e * e).sqrt() * nu.sin()).atan2(e + cos_nu);

        if E < 0.0 {
            E += 2.0 * PI;
        }
        E
    }

    pub fn eccentric_to_mean_anomaly(E: f64, e: f64) -> f64 {
        let mut M = E - e * E.sin();
        if M < 0.0 {
            M += 2.0 * PI;
        }
        M
    }

    pub fn mean_to_eccentric_anomaly(M: f64, e: f64, tolerance: f64, max_iterations: i32) -> f64 {
        if e < 1e-11 {
            return M;
        }

        // Initial guess
        let mut E = if M < PI { M + e / 2.0 } else { M - e / 2.0 };

        // Newton-Raphson iteration
        for _ in 0..max_iterations {
            let delta = (E - e * E.sin() - M) / (1.0 - e * E.cos());
            E -= delta;
            if delta.abs() <= tolerance {
                break;
            }
        }

        if E < 0.0 {
            E += 2.0 * PI;
        }
        E
    }

    pub fn eccentric_to_true_anomaly(E: f64, e: f64) -> f64 {
        if e < 1e-11 {
            return E;
        }

        let mut nu = ((1.0 - e * e).sqrt() * E.sin()).atan2(E.cos() - e);
        if nu < 0.0 {
            nu += 2.0 * PI;
        }
        nu
    }

    /// Converts Keplerian orbital elements to Cartesian state vectors
    /// Input elements: [a, e, i, Omega, omega, nu]
    ///   a: semi-major axis [km]
    ///   e: eccentricity [-]
    ///   i: inclination [rad]
    ///   Omega: right ascension of ascending node [rad]
    ///   omega: argument of periapsis [rad]
    ///   nu: true anomaly [rad]
    /// Returns: (position, velocity) in the body-centred inertial frame [km, km/s]
    pub fn keplerian_to_cartesian(
        elements: &na::Vector6<f64>,
        mu_km3_s2: f64,
    ) -> (na::Vector3<f64>, na::Vector3<f64>) {
        let (a, e, i, omega_cap, omega, nu) = (
            elements[0],
            elements[1],
            elements[2],
            elements[3],
            elements[4],
            elements[5],
        );

        // Calculate position and velocity in orbital plane
        let p = a * (1.0 - e * e);
        let r_mag = p / (1.0 + e * nu.cos());

        // Position in orbital plane
        let r_orbital = na::Vector3::new(r_mag * nu.cos(), r_mag * nu.sin(), 0.0);

        // Velocity in orbital plane
        let v_orbital = na::Vector3::new(
            -(mu_km3_s2 / p).sqrt() * nu.sin(),
            (mu_km3_s2 / p).sqrt() * (e + nu.cos()),
            0.0,
        );

        // Rotation matrices
        let rot_omega = na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), omega);
        let rot_i = na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), i);
        let rot_omega_cap = na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), omega_cap);

        // Transform to the inertial frame
        let transform = rot_omega_cap * rot_i * rot_omega;
        let r_inertial = transform * r_orbital;
        let v_inertial = transform * v_orbital;

        (r_inertial, v_inertial)
    }
}
