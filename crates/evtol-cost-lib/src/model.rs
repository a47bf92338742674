//! Direct operating cost computation.
//!
//! [`compute`] evaluates the model once for a scenario and returns every
//! intermediate figure alongside the per-flight total. Each step only uses
//! inputs, calibration constants and earlier results, and the arithmetic is
//! evaluated in a fixed order so identical inputs always produce bit-identical
//! outputs.

use serde::Serialize;
use tracing::{debug, trace};

use crate::constants::{CostConfig, BATTERY_COST_SCALE, SECONDS_PER_HOUR};
use crate::error::{Error, Result};
use crate::inputs::CostInputs;
use crate::vehicle::VehicleType;

/// Minimum similarity for an output name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Every figure produced by one evaluation of the cost model.
///
/// Money is in dollars, areas in m², times in hours unless the name says
/// otherwise. Serialized names match [`CostBreakdown::named_outputs`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub vehicle_type: VehicleType,

    // Assumptions
    pub flight_hours_per_year: f64,
    pub flights_per_year: f64,
    pub vehicle_life_years: f64,
    pub n_vehicles_per_facility: f64,

    // Acquisition
    pub tool_cost_per_vehicle: f64,
    pub material_cost_per_kg: f64,
    pub material_cost: f64,
    pub battery_cost_per_kg: f64,
    pub battery_cost_total: f64,
    pub motor_cost_per_kg: f64,
    pub motor_cost_total: f64,
    pub servo_cost: f64,
    pub avionics_cost: f64,
    #[serde(rename = "BRSCost")]
    pub brs_cost: f64,
    pub acquisition_cost: f64,
    pub acquisition_cost_per_flight: f64,

    // Insurance
    pub insurance_cost_per_year: f64,
    pub insurance_cost_per_flight: f64,

    // Facility rental
    pub vehicle_footprint: f64,
    pub area_cost: f64,
    pub facility_cost_per_year: f64,
    pub facility_cost_per_flight_hour: f64,
    pub facility_cost_per_flight: f64,

    // Energy
    pub energy_cost_per_flight: f64,

    // Component replacement
    pub battery_life_cycles: f64,
    pub battery_repl_cost_per_flight: f64,
    pub motor_life_hours: f64,
    pub motor_repl_cost_per_flight: f64,
    pub servo_life_hours: f64,
    pub servo_repl_cost_per_flight: f64,

    // Maintenance labor
    pub labor_cost_per_hour: f64,
    pub man_hr_per_flight_hour: f64,
    pub man_hr_per_flight: f64,
    pub labor_cost_per_flight: f64,

    pub cost_per_flight: f64,
}

/// Evaluate the cost model with the default calibration.
///
/// # Errors
/// - [`Error::InvalidVehicleType`] when the vehicle type is not recognized.
/// - [`Error::DivisionByZero`] when a divisor input is exactly zero.
pub fn compute(inputs: &CostInputs) -> Result<CostBreakdown> {
    compute_with_config(inputs, &CostConfig::default())
}

/// Evaluate the cost model with an explicit calibration.
///
/// The calibration is validated first; see [`CostConfig::validate`].
pub fn compute_with_config(inputs: &CostInputs, config: &CostConfig) -> Result<CostBreakdown> {
    config.validate()?;
    let vehicle = inputs.vehicle()?;
    inputs.check_divisors()?;

    let profile = vehicle.profile();
    debug!(
        vehicle = %vehicle,
        raw = %inputs.vehicle_type,
        servos = profile.servo_count,
        "evaluating operating cost"
    );

    let flight_hours = inputs.flight_time / SECONDS_PER_HOUR;

    // Assumptions
    let flight_hours_per_year = inputs.flight_hours_per_year;
    let flights_per_year = flight_hours_per_year / flight_hours;
    let vehicle_life_years = inputs.vehicle_life_years;
    let n_vehicles_per_facility = f64::from(config.storage_depot_size);

    // Acquisition
    let tool_cost_per_vehicle = inputs.tooling_cost;
    let material_cost_per_kg = config.material_cost_per_kg;
    let material_cost = material_cost_per_kg * inputs.mass_structural;

    let battery_cost_per_kg =
        inputs.battery_cost * inputs.battery_energy_density * BATTERY_COST_SCALE;
    let battery_cost_total = battery_cost_per_kg * inputs.mass_battery;

    let motor_cost_per_kg = inputs.motor_cost;
    let motor_cost_total = motor_cost_per_kg * inputs.mass_motors;

    let servo_cost = f64::from(profile.servo_count) * config.servo_unit_cost;
    let avionics_cost = config.avionics_cost;
    let brs_cost = profile.brs_cost;

    let acquisition_cost = battery_cost_total
        + motor_cost_total
        + servo_cost
        + avionics_cost
        + brs_cost
        + material_cost
        + tool_cost_per_vehicle;
    let acquisition_cost_per_flight = acquisition_cost / (flights_per_year * vehicle_life_years);

    // Insurance
    let insurance_cost_per_year = acquisition_cost * config.insurance_rate;
    let insurance_cost_per_flight = insurance_cost_per_year / flights_per_year;

    // Facility: footprint plus operations area shared by the depot
    let vehicle_footprint = vehicle.footprint(inputs.rotor_radius);
    let area_cost = config.area_cost_per_m2_per_year;
    let facility_cost_per_year = (vehicle_footprint
        + config.facility_operations_factor * vehicle_footprint / n_vehicles_per_facility)
        * area_cost;
    let facility_cost_per_flight_hour = facility_cost_per_year / flight_hours_per_year;
    let facility_cost_per_flight =
        facility_cost_per_flight_hour * inputs.flight_time / SECONDS_PER_HOUR;

    // Energy
    let energy_cost_per_flight =
        inputs.electricity_cost * inputs.energy_use / config.charging_efficiency;

    // Replacement; one battery cycle per flight
    let battery_life_cycles = inputs.battery_life_cycles;
    let battery_repl_cost_per_flight = battery_cost_total / battery_life_cycles;

    let motor_life_hours = inputs.motor_life_hours;
    let motor_repl_cost_per_flight = flight_hours / motor_life_hours * motor_cost_total;

    let servo_life_hours = config.servo_life_hours;
    let servo_repl_cost_per_flight = flight_hours / servo_life_hours * servo_cost;

    // Labor
    let labor_cost_per_hour = config.labor_cost_per_hour;
    let man_hr_per_flight_hour = profile.man_hr_per_flight_hour;
    let man_hr_per_flight = profile.man_hr_per_flight;
    let labor_cost_per_flight = (man_hr_per_flight_hour * inputs.flight_time / SECONDS_PER_HOUR
        + man_hr_per_flight)
        * labor_cost_per_hour;

    let cost_per_flight = acquisition_cost_per_flight
        + insurance_cost_per_flight
        + facility_cost_per_flight
        + energy_cost_per_flight
        + battery_repl_cost_per_flight
        + motor_repl_cost_per_flight
        + servo_repl_cost_per_flight
        + labor_cost_per_flight;

    let breakdown = CostBreakdown {
        vehicle_type: vehicle,
        flight_hours_per_year,
        flights_per_year,
        vehicle_life_years,
        n_vehicles_per_facility,
        tool_cost_per_vehicle,
        material_cost_per_kg,
        material_cost,
        battery_cost_per_kg,
        battery_cost_total,
        motor_cost_per_kg,
        motor_cost_total,
        servo_cost,
        avionics_cost,
        brs_cost,
        acquisition_cost,
        acquisition_cost_per_flight,
        insurance_cost_per_year,
        insurance_cost_per_flight,
        vehicle_footprint,
        area_cost,
        facility_cost_per_year,
        facility_cost_per_flight_hour,
        facility_cost_per_flight,
        energy_cost_per_flight,
        battery_life_cycles,
        battery_repl_cost_per_flight,
        motor_life_hours,
        motor_repl_cost_per_flight,
        servo_life_hours,
        servo_repl_cost_per_flight,
        labor_cost_per_hour,
        man_hr_per_flight_hour,
        man_hr_per_flight,
        labor_cost_per_flight,
        cost_per_flight,
    };

    trace!(?breakdown, "operating cost breakdown");
    Ok(breakdown)
}

impl CostBreakdown {
    /// All numeric outputs in model order, keyed by their camelCase names.
    pub fn named_outputs(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("flightHoursPerYear", self.flight_hours_per_year),
            ("flightsPerYear", self.flights_per_year),
            ("vehicleLifeYears", self.vehicle_life_years),
            ("nVehiclesPerFacility", self.n_vehicles_per_facility),
            ("toolCostPerVehicle", self.tool_cost_per_vehicle),
            ("materialCostPerKg", self.material_cost_per_kg),
            ("materialCost", self.material_cost),
            ("batteryCostPerKg", self.battery_cost_per_kg),
            ("batteryCostTotal", self.battery_cost_total),
            ("motorCostPerKg", self.motor_cost_per_kg),
            ("motorCostTotal", self.motor_cost_total),
            ("servoCost", self.servo_cost),
            ("avionicsCost", self.avionics_cost),
            ("BRSCost", self.brs_cost),
            ("acquisitionCost", self.acquisition_cost),
            ("acquisitionCostPerFlight", self.acquisition_cost_per_flight),
            ("insuranceCostPerYear", self.insurance_cost_per_year),
            ("insuranceCostPerFlight", self.insurance_cost_per_flight),
            ("vehicleFootprint", self.vehicle_footprint),
            ("areaCost", self.area_cost),
            ("facilityCostPerYear", self.facility_cost_per_year),
            ("facilityCostPerFlightHour", self.facility_cost_per_flight_hour),
            ("facilityCostPerFlight", self.facility_cost_per_flight),
            ("energyCostPerFlight", self.energy_cost_per_flight),
            ("batteryLifeCycles", self.battery_life_cycles),
            ("batteryReplCostPerFlight", self.battery_repl_cost_per_flight),
            ("motorLifeHours", self.motor_life_hours),
            ("motorReplCostPerFlight", self.motor_repl_cost_per_flight),
            ("servoLifeHours", self.servo_life_hours),
            ("servoReplCostPerFlight", self.servo_repl_cost_per_flight),
            ("laborCostPerHour", self.labor_cost_per_hour),
            ("manHrPerFlightHour", self.man_hr_per_flight_hour),
            ("manHrPerFlight", self.man_hr_per_flight),
            ("laborCostPerFlight", self.labor_cost_per_flight),
            ("costPerFlight", self.cost_per_flight),
        ]
    }

    /// Look up one output by name (exact, case-sensitive).
    ///
    /// Unknown names fail with [`Error::UnknownOutput`] listing close matches.
    pub fn get(&self, name: &str) -> Result<f64> {
        let outputs = self.named_outputs();
        if let Some((_, value)) = outputs.iter().find(|(key, _)| *key == name) {
            return Ok(*value);
        }

        let mut scored: Vec<(f64, &str)> = outputs
            .iter()
            .map(|(key, _)| {
                let score =
                    strsim::jaro_winkler(&name.to_ascii_lowercase(), &key.to_ascii_lowercase());
                (score, *key)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        Err(Error::UnknownOutput {
            name: name.to_string(),
            suggestions: scored
                .into_iter()
                .take(3)
                .map(|(_, key)| key.to_string())
                .collect(),
        })
    }

    /// The eight per-flight components summed into `costPerFlight`, in
    /// summation order.
    pub fn sub_costs(&self) -> [(&'static str, f64); 8] {
        [
            ("acquisitionCostPerFlight", self.acquisition_cost_per_flight),
            ("insuranceCostPerFlight", self.insurance_cost_per_flight),
            ("facilityCostPerFlight", self.facility_cost_per_flight),
            ("energyCostPerFlight", self.energy_cost_per_flight),
            ("batteryReplCostPerFlight", self.battery_repl_cost_per_flight),
            ("motorReplCostPerFlight", self.motor_repl_cost_per_flight),
            ("servoReplCostPerFlight", self.servo_repl_cost_per_flight),
            ("laborCostPerFlight", self.labor_cost_per_flight),
        ]
    }
}
