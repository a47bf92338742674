//! Vehicle configurations and their per-variant cost constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fraction added to the rotor-swept footprint for maintenance access.
const FOOTPRINT_MARGIN: f64 = 1.2;

/// Supported eVTOL configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VehicleType {
    Tiltwing,
    Helicopter,
}

/// Constant cost drivers that depend only on the vehicle configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    /// Number of servos installed.
    pub servo_count: u32,
    /// Ballistic recovery system cost ($).
    pub brs_cost: f64,
    /// Periodic maintenance man-hours per flight hour.
    pub man_hr_per_flight_hour: f64,
    /// Inspection and battery swap man-hours per flight.
    pub man_hr_per_flight: f64,
}

// 8 props, 4 surfaces, 2 tilt
const TILTWING: VehicleProfile = VehicleProfile {
    servo_count: 14,
    brs_cost: 5200.0,
    man_hr_per_flight_hour: 0.10,
    man_hr_per_flight: 0.2,
};

// cyclic (2x), collective and tail rotor, with redundancy
const HELICOPTER: VehicleProfile = VehicleProfile {
    servo_count: 8,
    brs_cost: 0.0,
    man_hr_per_flight_hour: 0.05,
    man_hr_per_flight: 0.2,
};

impl VehicleType {
    pub const ALL: [VehicleType; 2] = [VehicleType::Tiltwing, VehicleType::Helicopter];

    /// Canonical lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Tiltwing => "tiltwing",
            VehicleType::Helicopter => "helicopter",
        }
    }

    pub fn profile(self) -> &'static VehicleProfile {
        match self {
            VehicleType::Tiltwing => &TILTWING,
            VehicleType::Helicopter => &HELICOPTER,
        }
    }

    /// Ground area (m²) the vehicle occupies, including maintenance margin.
    ///
    /// Tiltwing: `1.2 × (8r + 1) × (4r + 3)`; helicopter: `1.2 × (2r)²`.
    pub fn footprint(self, rotor_radius: f64) -> f64 {
        match self {
            VehicleType::Tiltwing => {
                FOOTPRINT_MARGIN * (8.0 * rotor_radius + 1.0) * (4.0 * rotor_radius + 3.0)
            }
            VehicleType::Helicopter => {
                let diameter = 2.0 * rotor_radius;
                FOOTPRINT_MARGIN * (diameter * diameter)
            }
        }
    }
}

impl FromStr for VehicleType {
    type Err = Error;

    /// Parse a vehicle type, ignoring ASCII case and hyphens.
    fn from_str(s: &str) -> Result<Self> {
        match normalize_vehicle_name(s).as_str() {
            "tiltwing" => Ok(VehicleType::Tiltwing),
            "helicopter" => Ok(VehicleType::Helicopter),
            _ => Err(Error::InvalidVehicleType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for VehicleType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<VehicleType> for String {
    fn from(value: VehicleType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize_vehicle_name(name: &str) -> String {
    name.to_ascii_lowercase().replace('-', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_and_hyphen_variants() {
        for raw in ["tiltwing", "TiltWing", "tilt-wing", "TILT-WING"] {
            assert_eq!(raw.parse::<VehicleType>().unwrap(), VehicleType::Tiltwing);
        }
        for raw in ["helicopter", "HELICOPTER", "Heli-copter"] {
            assert_eq!(raw.parse::<VehicleType>().unwrap(), VehicleType::Helicopter);
        }
    }

    #[test]
    fn rejects_unknown_and_untrimmed_names() {
        for raw in ["", "quadcopter", "tilt wing", " tiltwing", "tilt_wing"] {
            let err = raw.parse::<VehicleType>().unwrap_err();
            assert!(
                matches!(err, Error::InvalidVehicleType { ref value } if value == raw),
                "unexpected error for {raw:?}: {err}"
            );
        }
    }

    #[test]
    fn profiles_match_configuration_tables() {
        let tiltwing = VehicleType::Tiltwing.profile();
        assert_eq!(tiltwing.servo_count, 14);
        assert_eq!(tiltwing.brs_cost, 5200.0);
        assert_eq!(tiltwing.man_hr_per_flight_hour, 0.10);

        let helicopter = VehicleType::Helicopter.profile();
        assert_eq!(helicopter.servo_count, 8);
        assert_eq!(helicopter.brs_cost, 0.0);
        assert_eq!(helicopter.man_hr_per_flight_hour, 0.05);
        assert_eq!(helicopter.man_hr_per_flight, tiltwing.man_hr_per_flight);
    }

    #[test]
    fn footprints_for_reference_rotor() {
        let tiltwing = VehicleType::Tiltwing.footprint(1.4);
        assert!((tiltwing - 1.2 * 12.2 * 8.6).abs() < 1e-9);
        assert!((tiltwing - 125.904).abs() < 1e-9);

        let helicopter = VehicleType::Helicopter.footprint(1.4);
        assert!((helicopter - 9.408).abs() < 1e-9);
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&VehicleType::Helicopter).unwrap();
        assert_eq!(json, "\"helicopter\"");
        let parsed: VehicleType = serde_json::from_str("\"Tilt-Wing\"").unwrap();
        assert_eq!(parsed, VehicleType::Tiltwing);
        assert!(serde_json::from_str::<VehicleType>("\"gyro\"").is_err());
    }
}
