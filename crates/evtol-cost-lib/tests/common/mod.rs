//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use evtol_cost_lib::CostInputs;

/// Path to fixtures directory shared by library and CLI tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Reference tiltwing scenario (r = 1.4 m, 500 s flight).
#[allow(dead_code)]
pub fn tiltwing_reference() -> CostInputs {
    CostInputs::from_path(&fixtures_dir().join("tiltwing_reference.json"))
        .expect("load tiltwing fixture")
}

/// Same scenario flown by the helicopter configuration.
#[allow(dead_code)]
pub fn helicopter_reference() -> CostInputs {
    CostInputs::from_path(&fixtures_dir().join("helicopter_reference.json"))
        .expect("load helicopter fixture")
}

/// Assert two values agree to a relative tolerance of 1e-9.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= 1e-9 * scale,
        "expected approx {expected}, got {actual}"
    );
}
