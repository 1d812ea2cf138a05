use chrono::Utc;
use csv::Writer;
use log::info;
use smallsat::analytics::MissionAnalytics;
use smallsat::config::MissionInput;
use smallsat::physics::body::EARTH;
use smallsat::physics::orbital::OrbitalMechanics;
use std::env;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let input = parse_args(env::args().skip(1))?;
    info!("mission input: {:?}", input);

    let engine = MissionAnalytics::earth();
    let report = engine.compute(&input)?;

    let period_s =
        OrbitalMechanics::compute_orbital_period(report.elements.semi_major_axis_km, EARTH.mu_km3_s2);
    let velocity_km_s = OrbitalMechanics::compute_circular_velocity(
        report.elements.semi_major_axis_km,
        EARTH.mu_km3_s2,
    );

    println!(
        "SmallSat Mission Planner ({})",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "Orbit: a = {:.1} km, i = {:.1} deg, e = {:.1}",
        report.elements.semi_major_axis_km,
        report.elements.inclination_deg,
        report.elements.eccentricity
    );
    println!(
        "Orbital Period: {:.1} s ({:.1} min), Circular Velocity: {:.3} km/s",
        period_s,
        period_s / 60.0,
        velocity_km_s
    );
    println!(
        "Estimated Global Revisit Time: {} days",
        report.budget.revisit_days
    );

    let power = &report.budget.power;
    print!(
        "Average Power Generated: {:.1} W - Consumption: {} W",
        power.generated_w, power.consumed_w
    );
    if power.sufficient {
        println!(" Power budget is sufficient.");
    } else {
        println!(" WARNING: Power budget is insufficient!");
    }

    if let Some(data) = &report.budget.data {
        println!("Estimated Data Rate: {:.1} MB/orbit", data.rate_mb_per_orbit);
        println!(
            "Estimated Onboard Storage Required: {:.1} MB",
            data.required_storage_mb
        );
    }

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    let file = File::create(output_dir.join("trajectory.csv"))?;
    let mut writer = Writer::from_writer(file);
    for point in &report.trajectory {
        writer.serialize(point)?;
    }
    writer.flush()?;
    println!("Trajectory has been written to output/trajectory.csv");

    Ok(())
}

/// Parses `key=value` overrides matching the planner's input fields, e.g.
/// `orbit-type=SSO sensor-type=SAR swath-width-km=250`.
fn parse_args<I: Iterator<Item = String>>(args: I) -> Result<MissionInput, Box<dyn Error>> {
    let mut input = MissionInput::default();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got {:?}", arg))?;
        match key {
            "orbit-type" => input.orbit_type = Some(value.to_string()),
            "altitude-km" => input.altitude_km = Some(value.parse()?),
            "inclination-deg" => input.inclination_deg = Some(value.parse()?),
            "sensor-type" => input.sensor_type = Some(value.to_string()),
            "sensor-resolution-m" => input.sensor_resolution_m = Some(value.parse()?),
            "swath-width-km" => input.swath_width_km = Some(value.parse()?),
            "solar-area-m2" => input.solar_area_m2 = Some(value.parse()?),
            "solar-efficiency-pct" => input.solar_efficiency_pct = Some(value.parse()?),
            "power-consumption-w" => input.power_consumption_w = Some(value.parse()?),
            _ => return Err(format!("unknown parameter {:?}", key).into()),
        }
    }
    Ok(input)
}
