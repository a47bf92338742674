//! Output formatting for cost breakdowns.
//!
//! Renderers return `String`s so the subcommands decide where output goes and
//! tests can assert on the exact text.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use evtol_cost_lib::{CostBreakdown, CostConfig, VehicleProfile, VehicleType};

use crate::terminal::{format_amount, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Pretty-printed JSON for downstream tooling.
    Json,
}

/// Headings inserted before the first output of each group.
const SECTIONS: &[(&str, &str)] = &[
    ("flightHoursPerYear", "Assumptions"),
    ("toolCostPerVehicle", "Acquisition"),
    ("insuranceCostPerYear", "Insurance"),
    ("vehicleFootprint", "Facility"),
    ("energyCostPerFlight", "Energy"),
    ("batteryLifeCycles", "Component replacement"),
    ("laborCostPerHour", "Maintenance labor"),
];

const TOTAL: &str = "costPerFlight";

/// Render every named output grouped by cost category, followed by the total.
pub fn render_breakdown_text(breakdown: &CostBreakdown, palette: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}Operating cost breakdown ({}){}",
        palette.white_bold, breakdown.vehicle_type, palette.reset
    );

    for (name, value) in breakdown.named_outputs() {
        if name == TOTAL {
            continue;
        }
        if let Some((_, heading)) = SECTIONS.iter().find(|(first, _)| *first == name) {
            let _ = writeln!(out, "\n{}{}{}", palette.cyan, heading, palette.reset);
        }
        let _ = writeln!(out, "  {:<28} {:>16}", name, format_amount(value));
    }

    let _ = writeln!(
        out,
        "\n{}Cost per flight: ${}{}",
        palette.green,
        format_amount(breakdown.cost_per_flight),
        palette.reset
    );
    out
}

/// Render the breakdown as pretty JSON.
pub fn render_breakdown_json(breakdown: &CostBreakdown) -> Result<String> {
    Ok(serde_json::to_string_pretty(breakdown)?)
}

/// Render a single named output as a one-entry JSON object, e.g. `{"costPerFlight": 119.3}`.
pub fn render_named_output_json(name: &str, value: f64) -> Result<String> {
    let mut object = serde_json::Map::new();
    object.insert(name.to_string(), serde_json::Value::from(value));
    Ok(serde_json::to_string_pretty(&object)?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VehicleEntry<'a> {
    vehicle_type: VehicleType,
    #[serde(flatten)]
    profile: &'a VehicleProfile,
}

#[derive(Serialize)]
struct ConstantsReport<'a> {
    calibration: &'a CostConfig,
    vehicles: Vec<VehicleEntry<'a>>,
}

/// Render the calibration in use and the per-vehicle constant table.
pub fn render_constants_text(config: &CostConfig, palette: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}Calibration{}", palette.cyan, palette.reset);
    let rows = [
        ("storageDepotSize", f64::from(config.storage_depot_size)),
        ("materialCostPerKg", config.material_cost_per_kg),
        ("servoUnitCost", config.servo_unit_cost),
        ("avionicsCost", config.avionics_cost),
        ("areaCostPerM2PerYear", config.area_cost_per_m2_per_year),
        ("chargingEfficiency", config.charging_efficiency),
        ("servoLifeHours", config.servo_life_hours),
        ("laborCostPerHour", config.labor_cost_per_hour),
        ("insuranceRate", config.insurance_rate),
        ("facilityOperationsFactor", config.facility_operations_factor),
    ];
    for (name, value) in rows {
        let _ = writeln!(out, "  {:<28} {:>12}", name, value);
    }

    let _ = writeln!(out, "\n{}Vehicles{}", palette.cyan, palette.reset);
    let _ = writeln!(
        out,
        "  {}{:<12} {:>7} {:>10} {:>16} {:>12}{}",
        palette.gray,
        "Type",
        "Servos",
        "BRS ($)",
        "Man-hr/flt-hr",
        "Man-hr/flt",
        palette.reset
    );
    for vehicle in VehicleType::ALL {
        let profile = vehicle.profile();
        let _ = writeln!(
            out,
            "  {:<12} {:>7} {:>10.0} {:>16.2} {:>12.2}",
            vehicle.as_str(),
            profile.servo_count,
            profile.brs_cost,
            profile.man_hr_per_flight_hour,
            profile.man_hr_per_flight
        );
    }
    out
}

/// Render the calibration and vehicle table as pretty JSON.
pub fn render_constants_json(config: &CostConfig) -> Result<String> {
    let report = ConstantsReport {
        calibration: config,
        vehicles: VehicleType::ALL
            .iter()
            .map(|vehicle| VehicleEntry {
                vehicle_type: *vehicle,
                profile: vehicle.profile(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use evtol_cost_lib::{compute, CostInputs};

    fn reference() -> CostBreakdown {
        let inputs = CostInputs {
            vehicle_type: "tiltwing".to_string(),
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
        };
        compute(&inputs).expect("reference computes")
    }

    #[test]
    fn text_lists_sections_and_total() {
        let text = render_breakdown_text(&reference(), &ColorPalette::plain());
        assert!(text.starts_with("Operating cost breakdown (tiltwing)"));
        for (_, heading) in SECTIONS {
            assert!(text.contains(heading), "missing section {heading}");
        }
        assert!(text.contains("acquisitionCost"));
        assert!(text.contains("291,200.00"));
        assert!(text.contains("Cost per flight: $119.30"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn json_uses_output_names() {
        let json = render_breakdown_json(&reference()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["vehicleType"], "tiltwing");
        assert_eq!(value["BRSCost"], 5200.0);
        assert!(value["costPerFlight"].as_f64().is_some());
    }

    #[test]
    fn single_output_json_is_keyed_by_name() {
        let breakdown = reference();
        let json = render_named_output_json("costPerFlight", breakdown.cost_per_flight).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), 1);
        assert_eq!(object["costPerFlight"].as_f64(), Some(breakdown.cost_per_flight));
    }

    #[test]
    fn constants_header_is_dimmed_only_when_colored() {
        let colored = render_constants_text(&CostConfig::default(), &ColorPalette::colored());
        assert!(colored.contains(&format!("{}Type", crate::terminal::colors::GRAY)));

        let plain = render_constants_text(&CostConfig::default(), &ColorPalette::plain());
        assert!(plain.contains("  Type"));
        assert!(!plain.contains('\x1b'));
    }

    #[test]
    fn constants_json_flattens_profiles() {
        let json = render_constants_json(&CostConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["calibration"]["avionicsCost"], 30000.0);
        assert_eq!(value["vehicles"][0]["vehicleType"], "tiltwing");
        assert_eq!(value["vehicles"][1]["servoCount"], 8);
    }
}
