extern crate pathmask;
extern crate pathmask_tests;
#[macro_use]
extern crate criterion;

use criterion::Criterion;
use pathmask::algorithms::path_bounds;
use pathmask::math::int_rect;
use pathmask::path::{parse_path, to_svg_string};
use pathmask::raster::{render_mask_with, Rasterizer};
use pathmask_tests::*;

fn parse_clefs(bench: &mut Criterion) {
    bench.bench_function("parse treble clef", |b| {
        b.iter(|| parse_path(criterion::black_box(TREBLE_CLEF)))
    });
    bench.bench_function("parse bass clef", |b| {
        b.iter(|| parse_path(criterion::black_box(BASS_CLEF)))
    });
}

fn serialize_clef(bench: &mut Criterion) {
    let segments = parse_path(TREBLE_CLEF).unwrap();
    bench.bench_function("serialize treble clef", |b| {
        b.iter(|| to_svg_string(criterion::black_box(&segments)))
    });
}

fn render_clef(bench: &mut Criterion) {
    let segments = parse_path(TREBLE_CLEF).unwrap();
    let bounds = path_bounds(&segments);

    for &height in &[64, 512] {
        let width = bounds.width_for_height(height as f64).ceil() as i32;
        let target = int_rect(0, 0, width, height);
        let mut rasterizer = Rasterizer::new();
        bench.bench_function(&format!("render treble clef {}px", height), |b| {
            b.iter(|| render_mask_with(&mut rasterizer, &segments, &bounds, &target))
        });
    }
}

criterion_group!(parsing, parse_clefs, serialize_clef);
criterion_group!(rendering, render_clef);
criterion_main!(parsing, rendering);
