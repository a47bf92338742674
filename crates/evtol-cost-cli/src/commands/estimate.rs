//! Estimate command handler for evaluating a user-supplied scenario.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::{Map, Value};
use tracing::debug;

use evtol_cost_lib::{compute_with_config, CostConfig, CostInputs};

use evtol_cost_cli::output::{
    render_breakdown_json, render_breakdown_text, render_named_output_json, OutputFormat,
};
use evtol_cost_cli::terminal::ColorPalette;

/// Arguments for the estimate command.
///
/// Inputs come from an optional JSON scenario file; any flag given on the
/// command line overrides the file. All 16 inputs must be resolved.
#[derive(Debug, Clone, Default, Args)]
pub struct EstimateArgs {
    /// JSON scenario file with camelCase input names (may be partial).
    #[arg(long)]
    pub scenario: Option<PathBuf>,
    /// JSON calibration file overriding model constants (may be partial).
    #[arg(long)]
    pub calibration: Option<PathBuf>,
    /// Print only this named output (e.g. `costPerFlight`); with `--format json`
    /// it is printed as a one-entry object.
    #[arg(long)]
    pub only: Option<String>,

    /// Vehicle configuration: tiltwing or helicopter.
    #[arg(long = "vehicle")]
    pub vehicle_type: Option<String>,
    /// Propeller or rotor radius (m).
    #[arg(long)]
    pub rotor_radius: Option<f64>,
    /// Nominal flight time (s).
    #[arg(long)]
    pub flight_time: Option<f64>,
    /// Energy use per flight (kW·hr).
    #[arg(long)]
    pub energy_use: Option<f64>,
    /// Structural mass (kg).
    #[arg(long)]
    pub mass_structural: Option<f64>,
    /// Battery mass (kg).
    #[arg(long)]
    pub mass_battery: Option<f64>,
    /// Motor mass (kg).
    #[arg(long)]
    pub mass_motors: Option<f64>,
    /// Tooling cost per vehicle ($).
    #[arg(long)]
    pub tooling_cost: Option<f64>,
    /// Battery energy density (W·hr/kg).
    #[arg(long)]
    pub battery_energy_density: Option<f64>,
    /// Battery cost.
    #[arg(long)]
    pub battery_cost: Option<f64>,
    /// Battery life (cycles).
    #[arg(long)]
    pub battery_life_cycles: Option<f64>,
    /// Motor cost ($/kg).
    #[arg(long)]
    pub motor_cost: Option<f64>,
    /// Motor life (hr).
    #[arg(long)]
    pub motor_life_hours: Option<f64>,
    /// Electricity cost ($/kW·hr).
    #[arg(long)]
    pub electricity_cost: Option<f64>,
    /// Flight hours per year.
    #[arg(long)]
    pub flight_hours_per_year: Option<f64>,
    /// Vehicle life (yr).
    #[arg(long)]
    pub vehicle_life_years: Option<f64>,
}

impl EstimateArgs {
    fn numeric_overrides(&self) -> [(&'static str, Option<f64>); 15] {
        [
            ("rotorRadius", self.rotor_radius),
            ("flightTime", self.flight_time),
            ("energyUse", self.energy_use),
            ("massStructural", self.mass_structural),
            ("massBattery", self.mass_battery),
            ("massMotors", self.mass_motors),
            ("toolingCost", self.tooling_cost),
            ("batteryEnergyDensity", self.battery_energy_density),
            ("batteryCost", self.battery_cost),
            ("batteryLifeCycles", self.battery_life_cycles),
            ("motorCost", self.motor_cost),
            ("motorLifeHours", self.motor_life_hours),
            ("electricityCost", self.electricity_cost),
            ("flightHoursPerYear", self.flight_hours_per_year),
            ("vehicleLifeYears", self.vehicle_life_years),
        ]
    }
}

/// Handle the estimate subcommand.
pub fn handle_estimate(args: &EstimateArgs, format: OutputFormat) -> Result<()> {
    let inputs = resolve_inputs(args)?;
    let config = match args.calibration.as_deref() {
        Some(path) => CostConfig::from_path(path)
            .with_context(|| format!("failed to load calibration from {}", path.display()))?,
        None => CostConfig::default(),
    };

    let breakdown =
        compute_with_config(&inputs, &config).context("failed to evaluate operating cost")?;

    if let Some(name) = args.only.as_deref() {
        let value = breakdown.get(name)?;
        match format {
            OutputFormat::Text => println!("{value}"),
            OutputFormat::Json => println!("{}", render_named_output_json(name, value)?),
        }
        return Ok(());
    }

    match format {
        OutputFormat::Text => print!(
            "{}",
            render_breakdown_text(&breakdown, &ColorPalette::detect())
        ),
        OutputFormat::Json => println!("{}", render_breakdown_json(&breakdown)?),
    }
    Ok(())
}

/// Merge the scenario file (if any) with command-line overrides.
pub fn resolve_inputs(args: &EstimateArgs) -> Result<CostInputs> {
    let mut fields = match args.scenario.as_deref() {
        Some(path) => load_scenario_fields(path)?,
        None => Map::new(),
    };

    if let Some(vehicle) = &args.vehicle_type {
        fields.insert("vehicleType".to_string(), Value::from(vehicle.clone()));
    }
    for (name, value) in args.numeric_overrides() {
        if let Some(value) = value {
            fields.insert(name.to_string(), Value::from(value));
        }
    }
    debug!(fields = fields.len(), "resolved scenario inputs");

    serde_json::from_value(Value::Object(fields))
        .context("scenario is incomplete or invalid; supply inputs with --scenario or flags")
}

fn load_scenario_fields(path: &Path) -> Result<Map<String, Value>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;
    match value {
        Value::Object(fields) => Ok(fields),
        _ => bail!("scenario {} must be a JSON object", path.display()),
    }
}
