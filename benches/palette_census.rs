use criterion::{black_box, criterion_group, criterion_main, Criterion};

use color_census::ColorCensus;
use image::Rgb;

/// Synthetic 256x256 gradient with enough distinct colors to exercise the
/// frequency table
fn synthetic_pixels() -> Vec<Rgb<u8>> {
    let mut pixels = Vec::with_capacity(256 * 256);
    for y in 0u32..256 {
        for x in 0u32..256 {
            pixels.push(Rgb([x as u8, y as u8, ((x * y) % 256) as u8]));
        }
    }
    pixels
}

fn benchmark_census(c: &mut Criterion) {
    let pixels = synthetic_pixels();

    c.bench_function("census_256x256_bucket_10", |b| {
        b.iter(|| ColorCensus::from_pixels(black_box(pixels.iter().copied()), 10).unwrap())
    });

    let census = ColorCensus::from_pixels(pixels.iter().copied(), 10).unwrap();
    c.bench_function("rank_top_10", |b| {
        b.iter(|| black_box(&census).rank(0, 10))
    });
}

criterion_group!(benches, benchmark_census);
criterion_main!(benches);
