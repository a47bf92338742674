mod common;

use common::tiltwing_reference;
use evtol_cost_lib::{compute, Error, VehicleType};

#[test]
fn spelling_variants_select_canonical_branch() {
    let cases = [
        ("TiltWing", VehicleType::Tiltwing),
        ("tilt-wing", VehicleType::Tiltwing),
        ("HELICOPTER", VehicleType::Helicopter),
        ("heli-copter", VehicleType::Helicopter),
    ];

    for (raw, expected) in cases {
        let mut inputs = tiltwing_reference();
        inputs.vehicle_type = raw.to_string();
        let breakdown = compute(&inputs).expect("variant accepted");

        inputs.vehicle_type = expected.as_str().to_string();
        let canonical = compute(&inputs).unwrap();

        assert_eq!(breakdown.vehicle_type, expected, "{raw}");
        assert_eq!(breakdown, canonical, "{raw}");
    }
}

#[test]
fn unrecognized_vehicle_fails() {
    for raw in ["quadrotor", "tilt wing", "", "helicopters"] {
        let mut inputs = tiltwing_reference();
        inputs.vehicle_type = raw.to_string();
        let err = compute(&inputs).expect_err("unknown vehicle rejected");
        assert!(
            matches!(err, Error::InvalidVehicleType { ref value } if value == raw),
            "unexpected error for {raw:?}: {err}"
        );
        assert!(err.to_string().contains("vehicle type not recognized"));
    }
}

#[test]
fn zero_divisors_fail_fast_with_input_name() {
    type Setter = fn(&mut evtol_cost_lib::CostInputs);
    let cases: [(&str, Setter); 5] = [
        ("flightTime", |i| i.flight_time = 0.0),
        ("flightHoursPerYear", |i| i.flight_hours_per_year = 0.0),
        ("batteryLifeCycles", |i| i.battery_life_cycles = 0.0),
        ("motorLifeHours", |i| i.motor_life_hours = 0.0),
        ("vehicleLifeYears", |i| i.vehicle_life_years = 0.0),
    ];

    for (name, zero) in cases {
        let mut inputs = tiltwing_reference();
        zero(&mut inputs);
        match compute(&inputs) {
            Err(Error::DivisionByZero { input }) => assert_eq!(input, name),
            other => panic!("expected DivisionByZero for {name}, got {other:?}"),
        }
    }
}

#[test]
fn helicopter_never_pays_for_a_parachute() {
    let mut inputs = tiltwing_reference();
    inputs.vehicle_type = "helicopter".to_string();
    let helicopter = compute(&inputs).unwrap();

    inputs.vehicle_type = "tiltwing".to_string();
    let tiltwing = compute(&inputs).unwrap();

    assert_eq!(helicopter.brs_cost, 0.0);
    assert_eq!(
        tiltwing.acquisition_cost - helicopter.acquisition_cost,
        5200.0 + 6.0 * 800.0
    );
}
