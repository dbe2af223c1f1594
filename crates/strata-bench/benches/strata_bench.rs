//! Benchmarks for the strata compositing engine.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use strata_blend::BlendMode;
use strata_stack::LayerStack;

/// Benchmark single-pixel mode dispatch across representative modes.
fn bench_pixel_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel");

    let src = [0.8f32, 0.4, 0.1, 0.7];
    let dst = [0.2f32, 0.5, 0.9, 1.0];

    let modes = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Overlay,
        BlendMode::SoftLight,
        BlendMode::Hue,
        BlendMode::Luminosity,
        BlendMode::SrcIn,
        BlendMode::Xor,
    ];

    for mode in modes {
        group.bench_function(format!("{:?}", mode), |b| {
            b.iter(|| mode.composite_pixel(black_box(src), black_box(dst)))
        });
    }

    group.finish();
}

/// Builds a stack of `layers` filled layers over a `size`×`size` canvas.
fn make_stack(size: u32, layers: usize, mode: BlendMode) -> LayerStack {
    let mut stack = LayerStack::new(size, size);
    stack.active_layer_mut().fill([30, 60, 90, 255]);
    for i in 0..layers {
        stack.add_layer(format!("Layer {}", i));
        let shade = (i * 40 % 255) as u8;
        stack.active_layer_mut().fill([shade, 255 - shade, 128, 200]);
        stack.active_layer_mut().set_mode(mode);
        stack.active_layer_mut().set_opacity(0.9);
    }
    stack
}

/// Benchmark full-stack composites at different canvas sizes.
fn bench_composite_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");

    for size in [64u32, 256, 512] {
        let stack = make_stack(size, 4, BlendMode::Normal);
        group.throughput(Throughput::Elements(size as u64 * size as u64));
        group.bench_with_input(BenchmarkId::new("normal_4_layers", size), &stack, |b, s| {
            b.iter(|| black_box(s.composite()))
        });
    }

    group.finish();
}

/// Benchmark how layer count scales at a fixed canvas size.
fn bench_composite_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth");

    for layers in [1usize, 4, 16] {
        let stack = make_stack(256, layers, BlendMode::Multiply);
        group.bench_with_input(
            BenchmarkId::new("multiply_256", layers),
            &stack,
            |b, s| b.iter(|| black_box(s.composite())),
        );
    }

    group.finish();
}

/// Benchmark masked compositing against the unmasked path.
fn bench_masked(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask");

    let plain = make_stack(256, 4, BlendMode::Normal);

    let mut masked = make_stack(256, 4, BlendMode::Normal);
    for i in 1..=4 {
        if let Some(layer) = masked.layer_mut(i) {
            layer.add_mask();
            if let Some(mask) = layer.mask_mut() {
                mask.fill(128);
            }
        }
    }

    group.bench_function("unmasked_4_layers", |b| {
        b.iter(|| black_box(plain.composite()))
    });
    group.bench_function("masked_4_layers", |b| {
        b.iter(|| black_box(masked.composite()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_pixel_modes,
    bench_composite_sizes,
    bench_composite_depth,
    bench_masked
);
criterion_main!(benches);
