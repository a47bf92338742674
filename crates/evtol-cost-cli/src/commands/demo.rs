//! Demo command handler: evaluates one illustrative scenario.

use anyhow::{Context, Result};
use tracing::info;

use evtol_cost_lib::{compute, CostInputs};

use evtol_cost_cli::output::{render_breakdown_json, OutputFormat};

/// Illustrative scenario: a 500 s tiltwing hop with 1.4 m rotors.
///
/// Market parameters: $700/kW·hr cells at 230 W·hr/kg lasting 2000 cycles,
/// $150/kg motors lasting 3000 hr, $0.12/kW·hr electricity, 600 flight hours
/// a year over a 10 year life.
pub fn demo_scenario(vehicle: &str) -> CostInputs {
    CostInputs {
        vehicle_type: vehicle.to_string(),
        rotor_radius: 1.4,
        flight_time: 500.0,
        energy_use: 150.0,
        mass_structural: 200.0,
        mass_battery: 800.0,
        mass_motors: 400.0,
        tooling_cost: 12000.0,
        battery_energy_density: 230.0,
        battery_cost: 700.0,
        battery_life_cycles: 2000.0,
        motor_cost: 150.0,
        motor_life_hours: 3000.0,
        electricity_cost: 0.12,
        flight_hours_per_year: 600.0,
        vehicle_life_years: 10.0,
    }
}

/// Handle the demo subcommand.
pub fn handle_demo(vehicle: &str, format: OutputFormat) -> Result<()> {
    let inputs = demo_scenario(vehicle);
    let breakdown = compute(&inputs).context("failed to evaluate the demo scenario")?;
    info!(vehicle = %breakdown.vehicle_type, "demo scenario evaluated");

    match format {
        OutputFormat::Text => println!("OperatingCost: {}", breakdown.cost_per_flight),
        OutputFormat::Json => println!("{}", render_breakdown_json(&breakdown)?),
    }
    Ok(())
}
