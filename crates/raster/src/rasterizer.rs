//! The default scan converter, backed by `tiny_skia`.
//!
//! Contours are replayed into a `tiny_skia` path and filled into a mask with the
//! non-zero winding rule. Curves are handed over as curves and flattened by
//! `tiny_skia`.

use crate::algorithms::FixedPoint;
use crate::contour::{Contour, ContourOp};
use crate::mask::AlphaMask;
use crate::math::IntRect;
use crate::ScanConverter;

use log::warn;
use tiny_skia::{FillRule, Mask, PathBuilder, Transform};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rasterizer {
    anti_alias: bool,
}

impl Rasterizer {
    /// An antialiased rasterizer.
    pub fn new() -> Self {
        Rasterizer { anti_alias: true }
    }

    /// A rasterizer producing only fully covered or empty pixels.
    pub fn aliased() -> Self {
        Rasterizer { anti_alias: false }
    }

    pub fn anti_alias(&self) -> bool {
        self.anti_alias
    }

    pub fn set_anti_alias(&mut self, anti_alias: bool) {
        self.anti_alias = anti_alias;
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Rasterizer::new()
    }
}

fn to_path(contour: &Contour) -> Option<tiny_skia::Path> {
    let p = |p: &FixedPoint| {
        let p = p.to_point();
        (p.x as f32, p.y as f32)
    };

    let mut builder = PathBuilder::with_capacity(contour.len() + 1, contour.len() * 3);
    let mut open = false;
    for op in contour.ops() {
        match op {
            ContourOp::Begin(at) => {
                if open {
                    builder.close();
                }
                let (x, y) = p(at);
                builder.move_to(x, y);
                open = true;
            }
            ContourOp::Line(to) => {
                let (x, y) = p(to);
                builder.line_to(x, y);
            }
            ContourOp::Quadratic(ctrl, to) => {
                let (x1, y1) = p(ctrl);
                let (x, y) = p(to);
                builder.quad_to(x1, y1, x, y);
            }
            ContourOp::Cubic(ctrl1, ctrl2, to) => {
                let (x1, y1) = p(ctrl1);
                let (x2, y2) = p(ctrl2);
                let (x, y) = p(to);
                builder.cubic_to(x1, y1, x2, y2, x, y);
            }
        }
    }
    if open {
        builder.close();
    }

    // None when nothing encloses an area, which renders as an empty mask.
    builder.finish()
}

impl ScanConverter for Rasterizer {
    fn rasterize(&mut self, contour: &Contour, target: &IntRect) -> AlphaMask {
        let mut mask = AlphaMask::new(*target);
        if mask.pixels().is_empty() {
            return mask;
        }

        let path = match to_path(contour) {
            Some(path) => path,
            None => return mask,
        };

        let mut coverage = match Mask::new(mask.width() as u32, mask.height() as u32) {
            Some(coverage) => coverage,
            None => {
                warn!("cannot allocate a {}x{} mask", mask.width(), mask.height());
                return mask;
            }
        };
        coverage.fill_path(&path, FillRule::Winding, self.anti_alias, Transform::identity());
        mask.pixels_mut().copy_from_slice(coverage.data());

        mask
    }
}

#[cfg(test)]
fn fixed(x: f64, y: f64) -> FixedPoint {
    FixedPoint::from_point(crate::math::point(x, y))
}

#[cfg(test)]
fn polygon(points: &[(f64, f64)]) -> Contour {
    let mut contour = Contour::new();
    contour.begin(fixed(points[0].0, points[0].1));
    for &(x, y) in &points[1..] {
        contour.line_to(fixed(x, y));
    }

    contour
}

#[cfg(test)]
fn total_coverage(mask: &AlphaMask) -> f64 {
    mask.pixels().iter().map(|&a| a as f64 / 255.0).sum()
}

#[test]
fn rectangle() {
    use crate::math::int_rect;

    let contour = polygon(&[(2.0, 2.0), (6.0, 2.0), (6.0, 5.0), (2.0, 5.0)]);
    let mask = Rasterizer::new().rasterize(&contour, &int_rect(0, 0, 8, 8));

    for y in 0..8 {
        for x in 0..8 {
            let expected = if x >= 2 && x < 6 && y >= 2 && y < 5 { 255 } else { 0 };
            assert_eq!(mask.get(x, y), expected, "pixel {} {}", x, y);
        }
    }
}

#[test]
fn partially_covered_pixels() {
    use crate::math::int_rect;

    let contour = polygon(&[(1.5, 1.0), (3.5, 1.0), (3.5, 2.0), (1.5, 2.0)]);
    let mask = Rasterizer::new().rasterize(&contour, &int_rect(0, 0, 4, 3));

    assert_eq!(mask.row(0), &[0, 0, 0, 0]);
    assert_eq!(mask.row(2), &[0, 0, 0, 0]);
    let row = mask.row(1);
    assert_eq!(row[0], 0);
    assert_eq!(row[2], 255);
    for &edge in &[row[1], row[3]] {
        assert!(edge > 64 && edge < 192, "{:?}", row);
    }
}

#[test]
fn aliased_pixels() {
    use crate::math::int_rect;

    let contour = polygon(&[(0.5, 0.5), (7.0, 1.0), (3.0, 6.5)]);
    let rect = int_rect(0, 0, 8, 8);

    let smooth = Rasterizer::new().rasterize(&contour, &rect);
    assert!(smooth.pixels().iter().any(|&a| a != 0 && a != 255));

    let mut rasterizer = Rasterizer::aliased();
    assert!(!rasterizer.anti_alias());
    let sharp = rasterizer.rasterize(&contour, &rect);
    assert!(sharp.pixels().iter().all(|&a| a == 0 || a == 255));
    assert_eq!(sharp.get(3, 2), 255);

    rasterizer.set_anti_alias(true);
    assert_eq!(rasterizer, Rasterizer::default());
}

#[test]
fn orientation_does_not_matter() {
    use crate::math::int_rect;

    let cw = polygon(&[(0.5, 0.5), (7.0, 1.0), (3.0, 6.5)]);
    let ccw = polygon(&[(0.5, 0.5), (3.0, 6.5), (7.0, 1.0)]);
    let rect = int_rect(0, 0, 8, 8);

    let mut rasterizer = Rasterizer::new();
    let a = rasterizer.rasterize(&cw, &rect);
    let b = rasterizer.rasterize(&ccw, &rect);
    for (a, b) in a.pixels().iter().zip(b.pixels()) {
        assert!((*a as i32 - *b as i32).abs() <= 1);
    }
}

#[test]
fn triangle_area() {
    use crate::math::int_rect;

    let contour = polygon(&[(0.0, 0.0), (8.0, 0.0), (0.0, 8.0)]);
    let mask = Rasterizer::new().rasterize(&contour, &int_rect(0, 0, 8, 8));
    assert!((total_coverage(&mask) - 32.0).abs() < 1.0);
    assert_eq!(mask.get(0, 0), 255);
    assert_eq!(mask.get(7, 7), 0);
}

#[test]
fn clipped_outline() {
    use crate::math::int_rect;

    // Only the top-left quarter of the square is inside the target.
    let contour = polygon(&[(-4.0, -4.0), (4.0, -4.0), (4.0, 4.0), (-4.0, 4.0)]);
    let mask = Rasterizer::new().rasterize(&contour, &int_rect(0, 0, 8, 8));

    for y in 0..8 {
        for x in 0..8 {
            let expected = if x < 4 && y < 4 { 255 } else { 0 };
            assert_eq!(mask.get(x, y), expected, "pixel {} {}", x, y);
        }
    }

    // Entirely to the right of the target.
    let contour = polygon(&[(10.0, 0.0), (12.0, 0.0), (12.0, 8.0), (10.0, 8.0)]);
    let mask = Rasterizer::new().rasterize(&contour, &int_rect(0, 0, 8, 8));
    assert!(mask.pixels().iter().all(|&a| a == 0));

    // Entirely to the left of the target.
    let contour = polygon(&[(-10.0, 0.0), (-2.0, 0.0), (-2.0, 8.0), (-10.0, 8.0)]);
    let mask = Rasterizer::new().rasterize(&contour, &int_rect(0, 0, 8, 8));
    assert!(mask.pixels().iter().all(|&a| a == 0));
}

#[test]
fn implicitly_closed() {
    use crate::math::int_rect;

    // Two outlines without closing lines.
    let mut contour = polygon(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    contour.begin(fixed(4.0, 0.0));
    contour.line_to(fixed(6.0, 0.0));
    contour.line_to(fixed(6.0, 2.0));
    contour.line_to(fixed(4.0, 2.0));
    let mask = Rasterizer::new().rasterize(&contour, &int_rect(0, 0, 6, 2));

    assert_eq!(mask.row(0), &[255, 255, 0, 0, 255, 255]);
    assert_eq!(mask.row(1), &[255, 255, 0, 0, 255, 255]);
}

#[test]
fn nothing_to_fill() {
    use crate::math::int_rect;

    let rect = int_rect(0, 0, 4, 4);
    let mut rasterizer = Rasterizer::new();
    assert!(rasterizer.rasterize(&Contour::new(), &rect).pixels().iter().all(|&a| a == 0));

    let mut lone_move = Contour::new();
    lone_move.begin(fixed(1.0, 1.0));
    assert!(rasterizer.rasterize(&lone_move, &rect).pixels().iter().all(|&a| a == 0));

    let square = polygon(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    let empty = rasterizer.rasterize(&square, &int_rect(2, 2, 2, 6));
    assert_eq!(empty.width(), 0);
    assert!(empty.pixels().is_empty());
}

#[test]
fn curves() {
    use crate::math::int_rect;
    use std::f64::consts::PI;

    // A circle of radius 8 centered in a 20x20 target, from four cubic arcs.
    let k = 0.552_284_749_8 * 8.0;
    let (cx, cy) = (10.0, 10.0);
    let mut contour = Contour::new();
    contour.begin(fixed(cx + 8.0, cy));
    contour.cubic_bezier_to(fixed(cx + 8.0, cy + k), fixed(cx + k, cy + 8.0), fixed(cx, cy + 8.0));
    contour.cubic_bezier_to(fixed(cx - k, cy + 8.0), fixed(cx - 8.0, cy + k), fixed(cx - 8.0, cy));
    contour.cubic_bezier_to(fixed(cx - 8.0, cy - k), fixed(cx - k, cy - 8.0), fixed(cx, cy - 8.0));
    contour.cubic_bezier_to(fixed(cx + k, cy - 8.0), fixed(cx + 8.0, cy - k), fixed(cx + 8.0, cy));

    let mut rasterizer = Rasterizer::new();
    let mask = rasterizer.rasterize(&contour, &int_rect(0, 0, 20, 20));
    assert!((total_coverage(&mask) - PI * 64.0).abs() < 2.0);
    assert_eq!(mask.get(10, 10), 255);
    assert_eq!(mask.get(0, 0), 0);

    // A quadratic arch over a flat base.
    let mut contour = Contour::new();
    contour.begin(fixed(0.0, 8.0));
    contour.quadratic_bezier_to(fixed(4.0, -8.0), fixed(8.0, 8.0));
    let mask = rasterizer.rasterize(&contour, &int_rect(0, 0, 8, 8));
    // The area under the parabola is 2/3 of its bounding rectangle.
    assert!((total_coverage(&mask) - 8.0 * 8.0 * 2.0 / 3.0).abs() < 1.0);
}
