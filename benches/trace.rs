//! Benchmarks for trace generation and playback.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use sort_trace::{
    playback::{ManualClock, PlaybackEngine, run_until_settled},
    schema::{Algorithm, SnapshotGenerator, VisualizerConfig},
    trace::generate,
};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let mut snapshots = SnapshotGenerator::new(42, (5, 105));

    for size in [10, 30, 100, 1000] {
        let snapshot = snapshots.generate(size);

        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.short_id(), size),
                &snapshot,
                |b, snapshot| {
                    b.iter(|| generate(black_box(snapshot), algorithm));
                },
            );
        }
    }

    group.finish();
}

fn bench_playback(c: &mut Criterion) {
    let mut group = c.benchmark_group("playback");

    for algorithm in Algorithm::ALL {
        let config = VisualizerConfig {
            algorithm,
            array_size: 100,
            seed: Some(7),
            ..Default::default()
        };

        group.bench_function(BenchmarkId::from_parameter(algorithm.short_id()), |b| {
            b.iter(|| {
                let mut engine = PlaybackEngine::new(config.clone()).unwrap();
                engine.start();
                run_until_settled(black_box(&mut engine), &mut ManualClock::new())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_playback);
criterion_main!(benches);
