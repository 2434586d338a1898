//! Fill-throughput benchmark over synthetic events

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use evflow_core::Event;
use evflow_histogram::Histogram;
use evflow_pipeline::EventPipeline;

fn synthetic_events(n_events: usize, seed: u64) -> Vec<Event> {
    let mut rng = StdRng::seed_from_u64(seed);
    let energy = Normal::new(100.0, 30.0).unwrap();
    let momentum = Normal::new(0.0, 1.5).unwrap();

    (0..n_events)
        .map(|_| {
            let n_candidates = rng.gen_range(0..8);
            let e: Vec<f64> = (0..n_candidates).map(|_| energy.sample(&mut rng)).collect();
            let px: Vec<f64> = (0..n_candidates).map(|_| momentum.sample(&mut rng)).collect();
            let py: Vec<f64> = (0..n_candidates).map(|_| momentum.sample(&mut rng)).collect();
            Event::new(e, px, py).unwrap()
        })
        .collect()
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    let pipeline = EventPipeline::with_defaults();

    for n_events in [1_000usize, 10_000, 100_000] {
        let events = synthetic_events(n_events, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n_events), &events, |b, events| {
            b.iter(|| {
                let mut histogram = Histogram::with_range(16, 0.0, 4.0).unwrap();
                for event in events {
                    histogram.accumulate_all(pipeline.values(black_box(event)));
                }
                histogram.total()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fill);
criterion_main!(benches);
