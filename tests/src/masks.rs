use crate::{format_mask, BASS_CLEF, TREBLE_CLEF, TRIANGLE};
use pathmask::algorithms::path_bounds;
use pathmask::math::int_rect;
use pathmask::path::{approximate_arcs, parse_path};
use pathmask::raster::{render_mask, render_mask_with, Rasterizer};

#[test]
fn offset_target() {
    let segments = parse_path("M1 2L2 3l0-1z").unwrap();
    let bounds = path_bounds(&segments);

    let a = render_mask(&segments, &bounds, &int_rect(-10, -10, 20, 10));
    let b = render_mask(&segments, &bounds, &int_rect(0, 0, 30, 20));

    assert_eq!(format_mask(&a), format_mask(&b));
    assert_eq!(a.get(-10 + 25, -10 + 5), b.get(25, 5));
}

#[test]
fn offset_clef() {
    let segments = parse_path(TREBLE_CLEF).unwrap();
    let bounds = path_bounds(&segments);
    let w = 60;
    let h = bounds.height_for_width(w as f64).ceil() as i32;

    let reference = render_mask(&segments, &bounds, &int_rect(0, 0, w, h));
    for &(dx, dy) in &[(-15, -20), (15, 20)] {
        let mask = render_mask(&segments, &bounds, &int_rect(dx, dy, dx + w, dy + h));
        assert_eq!(mask.pixels(), reference.pixels());
        assert_eq!(mask.get(dx + w / 2, dy + h / 2), reference.get(w / 2, h / 2));
    }
}

#[test]
fn triangle() {
    let segments = parse_path(TRIANGLE).unwrap();
    let bounds = path_bounds(&segments);
    let mask = render_mask(&segments, &bounds, &int_rect(0, 0, 10, 10));

    // The flat top edge fills the first row, the apex is at the bottom center.
    assert_eq!(mask.get(5, 0), 255);
    assert!(mask.get(4, 9) > 0);
    assert_eq!(mask.get(0, 9), 0);
    assert_eq!(mask.get(9, 9), 0);

    let area: f64 = mask.pixels().iter().map(|&a| a as f64 / 255.0).sum();
    assert!((area - 50.0).abs() < 1.0, "{}", area);
}

#[test]
fn clef_coverage() {
    for src in &[TREBLE_CLEF, BASS_CLEF] {
        let segments = parse_path(src).unwrap();
        let bounds = path_bounds(&segments);
        let h = 80;
        let w = bounds.width_for_height(h as f64).ceil() as i32;
        let mask = render_mask(&segments, &bounds, &int_rect(0, 0, w, h));

        let total = mask.pixels().len() as f64;
        let opaque = mask.pixels().iter().filter(|&&a| a == 255).count() as f64;
        let transparent = mask.pixels().iter().filter(|&&a| a == 0).count() as f64;
        assert!(opaque / total > 0.02, "{}", opaque / total);
        assert!(transparent / total > 0.2, "{}", transparent / total);
    }
}

#[test]
fn antialiasing_has_little_effect_on_coverage() {
    let segments = parse_path(BASS_CLEF).unwrap();
    let bounds = path_bounds(&segments);
    let target = int_rect(0, 0, 90, 100);

    let smooth = render_mask_with(&mut Rasterizer::new(), &segments, &bounds, &target);
    let sharp = render_mask_with(&mut Rasterizer::aliased(), &segments, &bounds, &target);
    assert!(sharp.pixels().iter().all(|&a| a == 0 || a == 255));

    let sum = |pixels: &[u8]| pixels.iter().map(|&a| a as f64 / 255.0).sum::<f64>();
    let (a, b) = (sum(smooth.pixels()), sum(sharp.pixels()));
    assert!((a - b).abs() / a < 0.05, "{} {}", a, b);
}

#[test]
fn arcs_as_lines_or_curves() {
    // A pill shape: two half circles joined by straight sides.
    let segments = parse_path("M10 0h20a10 10 0 0 1 0 20h-20a10 10 0 0 1 0-20z").unwrap();
    let bounds = path_bounds(&segments);
    assert_eq!(bounds.min.x, 10.0);
    assert_eq!(bounds.max.x, 30.0);

    // With arcs drawn as lines, only the rectangle between the arcs is filled.
    let target = int_rect(0, 0, 20, 20);
    let lines = render_mask(&segments, &bounds, &target);
    assert!(lines.pixels().iter().all(|&a| a == 255));

    // With curves, the half circles are clipped to the same target.
    let curves = render_mask(&approximate_arcs(&segments), &bounds, &target);
    assert_eq!(curves.pixels(), lines.pixels());

    // Widening the bounds shows the rounded ends.
    let mut wide = bounds;
    wide.add_point(pathmask::math::point(0.0, 0.0));
    wide.add_point(pathmask::math::point(40.0, 20.0));
    let rounded = render_mask(&approximate_arcs(&segments), &wide, &int_rect(0, 0, 40, 20));
    assert_eq!(rounded.get(20, 10), 255);
    assert_eq!(rounded.get(2, 10), 255);
    assert_eq!(rounded.get(0, 0), 0);
    assert_eq!(rounded.get(39, 19), 0);
}
