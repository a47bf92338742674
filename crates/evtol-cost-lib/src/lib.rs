//! eVTOL operating cost library entry points.
//!
//! This crate exposes the direct operating cost model for electric VTOL
//! aircraft: scenario inputs, vehicle configurations, calibration constants
//! and the per-flight cost breakdown. Higher-level consumers (CLI, trade-study
//! harnesses) should only depend on the items exported here instead of
//! reimplementing the formulas.
//!

#![deny(warnings)]

pub mod constants;
pub mod error;
pub mod inputs;
pub mod model;
pub mod vehicle;

pub use constants::CostConfig;
pub use error::{Error, Result};
pub use inputs::{CostInputs, WhatIf};
pub use model::{compute, compute_with_config, CostBreakdown};
pub use vehicle::{VehicleProfile, VehicleType};
