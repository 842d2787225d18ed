use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scale_to_fit::basics::RectD;
use scale_to_fit::config::SceneConfig;
use scale_to_fit::fit_demo::{FitDemo, SHAPES};
use scale_to_fit::rect_fit::{compute_fit, FitMode};
use scale_to_fit::scene::record;

fn bench_compute_fit(c: &mut Criterion) {
    let dst = RectD::from_size(52.0, 52.0);
    c.bench_function("compute_fit all shapes x modes", |b| {
        b.iter(|| {
            for mode in FitMode::ALL {
                for shape in &SHAPES {
                    black_box(compute_fit(black_box(&shape.rect()), &dst, mode));
                }
            }
        })
    });
}

fn bench_record_scene(c: &mut Criterion) {
    let config = SceneConfig::default();
    c.bench_function("record scale-to-fit scene", |b| {
        b.iter(|| black_box(record(&FitDemo, &config)))
    });
}

criterion_group!(benches, bench_compute_fit, bench_record_scene);
criterion_main!(benches);
