// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Benchmarks for single-tick stepping and ensemble sweeps
//!
//! One tick is a fixed 3x3 solve plus a handful of multiplies, so the
//! single-simulation benchmark mostly measures the solve. The ensemble
//! benchmarks show where the parallel sweep starts paying for its
//! coordination overhead.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use dipc_sim::{Ensemble, SimConfig, Simulation};

fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_step");

    // The damped preset is stable indefinitely, so one long-lived instance
    // can be stepped for the whole measurement.
    group.bench_function("damped", |b| {
        let mut sim = Simulation::new(SimConfig::damped()).unwrap();
        sim.set_control(40.0);
        b.iter(|| {
            sim.advance().unwrap();
            black_box(sim.state().accelerations())
        });
    });

    // The undamped preset slowly accumulates energy error, so each sample
    // steps a fresh instance over a bounded horizon.
    group.bench_function("undamped_100_ticks", |b| {
        b.iter_batched_ref(
            || Simulation::new(SimConfig::undamped()).unwrap(),
            |sim| {
                for _ in 0..100 {
                    sim.advance().unwrap();
                }
                black_box(sim.state().coordinates())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_ensemble_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("ensemble_sweep");

    for count in [8usize, 64, 512] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut ensemble =
                Ensemble::from_config_with(count, SimConfig::damped(), |i, config| {
                    config.link1_angle = 0.05 + 1e-4 * i as f64;
                })
                .unwrap();
            b.iter(|| ensemble.advance_all().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_step, bench_ensemble_sweep);
criterion_main!(benches);
