//! Calibration constants of the operating cost model.
//!
//! These are model calibration data rather than inputs. The defaults below
//! reproduce the reference cost figures exactly; change them only when the
//! model itself is recalibrated.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of vehicles sharing one storage depot.
pub const STORAGE_DEPOT_SIZE: u32 = 200;

/// Structural material plus assembly cost ($/kg).
pub const MATERIAL_COST_PER_KG: f64 = 220.0;

/// Unit cost of one servo in large quantities ($).
pub const SERVO_UNIT_COST: f64 = 800.0;

/// Sensors and flight computers in large quantities ($).
pub const AVIONICS_COST: f64 = 30000.0;

/// Facility rent ($/m²/yr), from $2/ft² per month.
pub const AREA_COST_PER_M2_PER_YEAR: f64 = 10.7639 * 2.0 * 12.0;

/// Fraction of grid energy that ends up in the battery.
pub const CHARGING_EFFICIENCY: f64 = 0.9;

/// Servo service life (hr).
pub const SERVO_LIFE_HOURS: f64 = 6000.0;

/// Fully burdened maintenance labor rate ($/hr).
pub const LABOR_COST_PER_HOUR: f64 = 60.0;

/// Yearly insurance premium as a fraction of acquisition cost (R22 estimate).
pub const INSURANCE_RATE: f64 = 0.065;

/// Operations area per vehicle footprint, shared across the depot.
pub const FACILITY_OPERATIONS_FACTOR: f64 = 10.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Converts $/kW·hr × W·hr/kg into $/kg.
pub const BATTERY_COST_SCALE: f64 = 0.001;

/// Calibration overrides for [`crate::compute_with_config`].
///
/// `Default` yields the constants of this module. When deserialized, every
/// missing field falls back to its default so a calibration file only needs
/// to list the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CostConfig {
    pub storage_depot_size: u32,
    pub material_cost_per_kg: f64,
    pub servo_unit_cost: f64,
    pub avionics_cost: f64,
    pub area_cost_per_m2_per_year: f64,
    pub charging_efficiency: f64,
    pub servo_life_hours: f64,
    pub labor_cost_per_hour: f64,
    pub insurance_rate: f64,
    pub facility_operations_factor: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            storage_depot_size: STORAGE_DEPOT_SIZE,
            material_cost_per_kg: MATERIAL_COST_PER_KG,
            servo_unit_cost: SERVO_UNIT_COST,
            avionics_cost: AVIONICS_COST,
            area_cost_per_m2_per_year: AREA_COST_PER_M2_PER_YEAR,
            charging_efficiency: CHARGING_EFFICIENCY,
            servo_life_hours: SERVO_LIFE_HOURS,
            labor_cost_per_hour: LABOR_COST_PER_HOUR,
            insurance_rate: INSURANCE_RATE,
            facility_operations_factor: FACILITY_OPERATIONS_FACTOR,
        }
    }
}

impl CostConfig {
    /// Validate the calibration.
    ///
    /// Every value must be finite. Values used as divisors (depot size,
    /// charging efficiency and servo life) must also be positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.material_cost_per_kg, "materialCostPerKg"),
            (self.servo_unit_cost, "servoUnitCost"),
            (self.avionics_cost, "avionicsCost"),
            (self.area_cost_per_m2_per_year, "areaCostPerM2PerYear"),
            (self.charging_efficiency, "chargingEfficiency"),
            (self.servo_life_hours, "servoLifeHours"),
            (self.labor_cost_per_hour, "laborCostPerHour"),
            (self.insurance_rate, "insuranceRate"),
            (self.facility_operations_factor, "facilityOperationsFactor"),
        ];

        for (value, field) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidCalibration {
                    message: format!("{field} must be finite, got {value}"),
                });
            }
        }

        if self.storage_depot_size == 0 {
            return Err(Error::InvalidCalibration {
                message: "storageDepotSize must be at least 1".to_string(),
            });
        }

        for (value, field) in [
            (self.charging_efficiency, "chargingEfficiency"),
            (self.servo_life_hours, "servoLifeHours"),
        ] {
            if value <= 0.0 {
                return Err(Error::InvalidCalibration {
                    message: format!("{field} must be positive, got {value}"),
                });
            }
        }

        Ok(())
    }

    /// Parse a (possibly partial) calibration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a calibration file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}
