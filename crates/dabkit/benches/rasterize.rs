use criterion::{Criterion, criterion_group, criterion_main};
use dabkit::mask::{MaskGeometry, rasterize_into};
use dabkit::{BrushParameters, BrushSettings, BrushShape, DabFactory, EngineConfig, Texture};
use std::hint::black_box;

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");
    for size in [8.0f32, 32.0, 96.0] {
        let geometry = MaskGeometry::new(size, 0.2, 0.6);
        for shape in BrushShape::ALL {
            let mut out = Vec::new();
            group.bench_function(format!("{shape:?}/{size}"), |b| {
                b.iter(|| rasterize_into(black_box(shape), black_box(&geometry), &mut out))
            });
        }
    }
    group.finish();
}

fn bench_get_dab(c: &mut Criterion) {
    let texture = Texture::new(64, 64, (0..64 * 64).map(|i| (i % 251) as u8).collect())
        .expect("valid texture");
    let mut params = BrushParameters::new(BrushSettings {
        size: 24.0,
        texture: 0.5,
        pressure_size: true,
        shape: BrushShape::RoundAntialiased,
        ..Default::default()
    });

    let mut group = c.benchmark_group("get_dab");

    // Constant pressure: every dab after the first hits the cache
    let mut factory = DabFactory::new(EngineConfig::default());
    factory.set_texture(texture.clone());
    params.apply_pressure(1.0);
    group.bench_function("cached", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.37;
            let dab = factory.get_dab(black_box(x), 10.25, &params);
            black_box(dab.brush[0]);
        })
    });

    // Varying pressure: size changes force a rasterization per dab
    let mut factory = DabFactory::new(EngineConfig::default());
    factory.set_texture(texture);
    group.bench_function("pressure_varying", |b| {
        let mut step = 0u32;
        b.iter(|| {
            step = step.wrapping_add(1);
            params.apply_pressure(0.3 + (step % 7) as f32 * 0.1);
            let dab = factory.get_dab(black_box(step as f32 * 0.37), 10.25, &params);
            black_box(dab.brush[0]);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_shapes, bench_get_dab);
criterion_main!(benches);
