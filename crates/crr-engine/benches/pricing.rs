//! Pricing benchmarks: vanilla and barrier contracts at several depths.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use crr_engine::PricingEngine;
use crr_instruments::{BarrierDirection, ExerciseStyle, KnockType, OptionContract, OptionType};

fn bench_vanilla(c: &mut Criterion) {
    let mut group = c.benchmark_group("vanilla_american_put");
    for steps in [50, 200, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            let contract =
                OptionContract::vanilla(OptionType::Put, 110.0, 1.0, ExerciseStyle::American)
                    .unwrap();
            let engine = PricingEngine::new(contract, 0.2, 100.0, 0.05, steps).unwrap();
            b.iter(|| engine.build_tree().unwrap().root_price());
        });
    }
    group.finish();
}

fn bench_knock_in(c: &mut Criterion) {
    let mut group = c.benchmark_group("knock_in_european_call");
    for steps in [50, 200, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            let contract = OptionContract::barrier(
                OptionType::Call,
                100.0,
                1.0,
                ExerciseStyle::European,
                130.0,
                BarrierDirection::Up,
                KnockType::In,
            )
            .unwrap();
            let engine = PricingEngine::new(contract, 0.2, 100.0, 0.05, steps).unwrap();
            b.iter(|| engine.build_tree().unwrap().root_price());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_vanilla, bench_knock_in);
criterion_main!(benches);
