use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vibrant_core::{Ease, Easing, Rgb, Timing, Vector2};

fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("ease_apply");
    for ease in [
        Ease::InOutCubic,
        Ease::OutSine,
        Ease::InOutElastic,
        Ease::OutBounce,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(ease), &ease, |b, &ease| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..1000 {
                    acc += ease.apply(black_box(i as f64), 0.0, 100.0, 1000.0);
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_tracks(c: &mut Criterion) {
    let timing = Timing::new(2.0, Ease::InOutQuad).expect("valid timing");
    c.bench_function("advance_1k_tracks", |b| {
        b.iter_batched(
            || {
                (0..1000)
                    .map(|i| {
                        (
                            Easing::start(Vector2::ZERO, Vector2::splat(i as f64), timing),
                            Easing::start(Rgb::BLACK, Rgb::WHITE, timing),
                        )
                    })
                    .collect::<Vec<_>>()
            },
            |mut tracks| {
                for (pos, color) in tracks.iter_mut() {
                    black_box(pos.advance(1.0 / 60.0));
                    black_box(color.advance(1.0 / 60.0));
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_curves, bench_tracks);
criterion_main!(benches);
