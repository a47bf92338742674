//! Scenario inputs for the operating cost model.
//!
//! A scenario is the flat set of 16 named values a trade study supplies per
//! evaluation. Serialized names are camelCase (`flightTime`,
//! `batteryEnergyDensity`, ...) so scenario files line up with the names of
//! the reported outputs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vehicle::VehicleType;

/// Full set of model inputs for one scenario.
///
/// `vehicle_type` is kept as the caller supplied it and resolved by
/// [`CostInputs::vehicle`], so an unrecognized configuration is reported by
/// the computation rather than silently defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CostInputs {
    /// `tiltwing` or `helicopter` (case and hyphens ignored).
    pub vehicle_type: String,
    /// Propeller or rotor radius (m).
    pub rotor_radius: f64,
    /// Nominal flight duration (s).
    pub flight_time: f64,
    /// Energy drawn from the battery per flight (kW·hr).
    pub energy_use: f64,
    /// Structural mass (kg).
    pub mass_structural: f64,
    /// Battery mass (kg).
    pub mass_battery: f64,
    /// Motor mass (kg).
    pub mass_motors: f64,
    /// Tooling cost attributed to one vehicle ($).
    pub tooling_cost: f64,
    /// Battery specific energy (W·hr/kg).
    pub battery_energy_density: f64,
    /// Battery cost, scaled by 0.001 × energy density into $/kg.
    pub battery_cost: f64,
    /// Battery life (charge cycles).
    pub battery_life_cycles: f64,
    /// Motor cost ($/kg).
    pub motor_cost: f64,
    /// Motor life (hr).
    pub motor_life_hours: f64,
    /// Electricity price ($/kW·hr).
    pub electricity_cost: f64,
    /// Utilization (hr/yr).
    pub flight_hours_per_year: f64,
    /// Vehicle service life (yr).
    pub vehicle_life_years: f64,
}

/// The technology and market parameters a trade study varies between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WhatIf {
    pub battery_energy_density: f64,
    pub battery_cost: f64,
    pub battery_life_cycles: f64,
    pub motor_cost: f64,
    pub motor_life_hours: f64,
    pub electricity_cost: f64,
    pub flight_hours_per_year: f64,
    pub vehicle_life_years: f64,
}

impl CostInputs {
    /// Resolve the vehicle configuration.
    pub fn vehicle(&self) -> Result<VehicleType> {
        self.vehicle_type.parse()
    }

    /// Reject scenarios where a divisor of the model is exactly zero.
    ///
    /// Negative and other non-physical values are accepted; only the five
    /// inputs that appear as denominators are checked.
    pub fn check_divisors(&self) -> Result<()> {
        let divisors = [
            (self.flight_time, "flightTime"),
            (self.flight_hours_per_year, "flightHoursPerYear"),
            (self.battery_life_cycles, "batteryLifeCycles"),
            (self.motor_life_hours, "motorLifeHours"),
            (self.vehicle_life_years, "vehicleLifeYears"),
        ];

        for (value, input) in divisors {
            if value == 0.0 {
                return Err(Error::DivisionByZero { input });
            }
        }

        Ok(())
    }

    /// Extract the what-if block of this scenario.
    pub fn what_if(&self) -> WhatIf {
        WhatIf {
            battery_energy_density: self.battery_energy_density,
            battery_cost: self.battery_cost,
            battery_life_cycles: self.battery_life_cycles,
            motor_cost: self.motor_cost,
            motor_life_hours: self.motor_life_hours,
            electricity_cost: self.electricity_cost,
            flight_hours_per_year: self.flight_hours_per_year,
            vehicle_life_years: self.vehicle_life_years,
        }
    }

    /// Replace the what-if block, keeping the vehicle inputs.
    #[must_use]
    pub fn with_what_if(mut self, what_if: WhatIf) -> Self {
        self.battery_energy_density = what_if.battery_energy_density;
        self.battery_cost = what_if.battery_cost;
        self.battery_life_cycles = what_if.battery_life_cycles;
        self.motor_cost = what_if.motor_cost;
        self.motor_life_hours = what_if.motor_life_hours;
        self.electricity_cost = what_if.electricity_cost;
        self.flight_hours_per_year = what_if.flight_hours_per_year;
        self.vehicle_life_years = what_if.vehicle_life_years;
        self
    }

    /// Parse a scenario from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}
