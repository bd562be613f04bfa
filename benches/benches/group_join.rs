// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Equijoin Contributors

//! One-to-many group join benchmarks: employees to equipment.

use std::{hint::black_box, time::Duration};

use criterion::{
	BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
	measurement::WallTime,
};
use equijoin_core::{JoinStrategy, join_group};
use equijoin_testing::{Employee, Equipment, FixtureConfig, FixtureSet};

/// Configure benchmark group with stable measurement settings.
fn configure_group(group: &mut BenchmarkGroup<WallTime>) {
	group.measurement_time(Duration::from_secs(10));
	group.warm_up_time(Duration::from_secs(5));
	group.sample_size(200);
	group.noise_threshold(0.03);
	group.confidence_level(0.99);
}

fn combine(employee: &Employee, equipment: &[&Equipment]) -> (u32, usize) {
	(employee.id.0, equipment.len())
}

fn run_join(set: &FixtureSet, strategy: JoinStrategy) -> Vec<(u32, usize)> {
	join_group(
		black_box(&set.employees),
		black_box(&set.equipment),
		|employee| employee.id,
		|equipment| equipment.custodian,
		combine,
		strategy,
	)
}

fn benchmark_join_group_hash(c: &mut Criterion) {
	let mut group = c.benchmark_group("join_group_hash");
	configure_group(&mut group);

	for size in [100, 1_000, 10_000].iter() {
		group.throughput(Throughput::Elements(*size as u64));

		group.bench_with_input(BenchmarkId::new("employees", size), size, |b, &size| {
			b.iter_batched(
				|| FixtureSet::generate(&FixtureConfig::scaled(size)),
				|set| run_join(&set, JoinStrategy::Hash),
				BatchSize::SmallInput,
			);
		});
	}

	group.finish();
}

fn benchmark_join_group_nested_loop(c: &mut Criterion) {
	let mut group = c.benchmark_group("join_group_nested_loop");
	configure_group(&mut group);

	for size in [100, 1_000].iter() {
		group.throughput(Throughput::Elements(*size as u64));

		group.bench_with_input(BenchmarkId::new("employees", size), size, |b, &size| {
			b.iter_batched(
				|| FixtureSet::generate(&FixtureConfig::scaled(size)),
				|set| run_join(&set, JoinStrategy::NestedLoop),
				BatchSize::SmallInput,
			);
		});
	}

	group.finish();
}

criterion_group!(join_group_benches, benchmark_join_group_hash, benchmark_join_group_nested_loop);

criterion_main!(join_group_benches);
