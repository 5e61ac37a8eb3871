//! Benchmarks for the dab raster primitives.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dab::{fill_region, line, paint_stroke, Palette, PixelBuffer, Rgb};

/// A buffer with a checkerboard of two colours, for palette scans that
/// exercise the dedup path on every pixel.
fn checkerboard(size: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(size, size);
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            if (x + y) % 2 == 0 {
                buffer.set(x, y, Rgb::white());
            }
        }
    }
    buffer
}

// -- Fill benchmarks --

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    group.bench_function("fill_64x64", |b| {
        b.iter(|| {
            let mut buffer = PixelBuffer::filled(64, 64, Rgb::black());
            fill_region(&mut buffer, black_box(32), black_box(32), Rgb::white()).unwrap()
        })
    });

    group.bench_function("fill_256x256", |b| {
        b.iter(|| {
            let mut buffer = PixelBuffer::filled(256, 256, Rgb::black());
            fill_region(&mut buffer, black_box(128), black_box(128), Rgb::white()).unwrap()
        })
    });

    // A comb of vertical walls: many short runs, heavy seed traffic.
    group.bench_function("fill_256x256_comb", |b| {
        b.iter(|| {
            let mut buffer = PixelBuffer::filled(256, 256, Rgb::black());
            let wall = Rgb::new(255, 0, 0);
            for x in (0..256).step_by(4) {
                for y in 0..255 {
                    buffer.set(x, y, wall);
                }
            }
            fill_region(&mut buffer, black_box(1), black_box(1), Rgb::white()).unwrap()
        })
    });

    group.finish();
}

// -- Line benchmarks --

fn bench_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    group.bench_function("line_visit_1024", |b| {
        b.iter(|| {
            let mut count = 0u32;
            line(0, 0, black_box(1023), black_box(511), |_, _| count += 1);
            count
        })
    });

    group.bench_function("stroke_256", |b| {
        let mut buffer = PixelBuffer::new(256, 256);
        b.iter(|| paint_stroke(&mut buffer, (0, 0), black_box((255, 255)), Rgb::white()))
    });

    group.finish();
}

// -- Palette benchmarks --

fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");

    let board = checkerboard(256);

    group.bench_function("from_buffer_256x256", |b| {
        b.iter(|| Palette::from_buffer(black_box(&board)))
    });

    let palette = Palette::from_buffer(&board);

    group.bench_function("split_by_luma", |b| {
        b.iter(|| black_box(&palette).split_by_luma())
    });

    group.finish();
}

criterion_group!(benches, bench_fill, bench_line, bench_palette);
criterion_main!(benches);
