use criterion::{criterion_group, criterion_main, Criterion};
use evtol_cost_lib::{compute, CostInputs, WhatIf};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/tiltwing_reference.json")
}

static SCENARIO: Lazy<CostInputs> =
    Lazy::new(|| CostInputs::from_path(&fixture_path()).expect("fixture loads"));

fn bench_single_evaluation(c: &mut Criterion) {
    c.bench_function("compute_tiltwing_reference", |b| {
        b.iter(|| compute(black_box(&SCENARIO)).expect("scenario computes"))
    });
}

fn bench_battery_density_sweep(c: &mut Criterion) {
    let base = SCENARIO.what_if();
    c.bench_function("compute_battery_density_sweep", |b| {
        b.iter(|| {
            (150..=400)
                .step_by(10)
                .map(|density| {
                    let inputs = SCENARIO.clone().with_what_if(WhatIf {
                        battery_energy_density: f64::from(density),
                        ..base
                    });
                    compute(black_box(&inputs))
                        .expect("scenario computes")
                        .cost_per_flight
                })
                .sum::<f64>()
        })
    });
}

criterion_group!(
    benches,
    bench_single_evaluation,
    bench_battery_density_sweep
);
criterion_main!(benches);
