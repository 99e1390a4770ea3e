//! Mapping parsed segments into a pixel rectangle and rendering them.

use crate::algorithms::path::Segment;
use crate::algorithms::{Bounds, Transform};
use crate::contour::Contour;
use crate::mask::AlphaMask;
use crate::math::{IntRect, IntVector};
use crate::rasterizer::Rasterizer;
use crate::ScanConverter;

use log::{debug, warn};

/// Converts segments into a fixed point contour using `transform`.
///
/// Closing segments become a line back to the start of the sub-path. Arcs are
/// drawn as a straight line to their end point; use
/// [`approximate_arcs`](../../pathmask_path/fn.approximate_arcs.html) beforehand
/// to render them as curves.
pub fn build_contour(segments: &[Segment], transform: &Transform) -> Contour {
    let mut contour = Contour::with_capacity(segments.len());
    let mut arcs = 0;

    for segment in segments {
        match *segment {
            Segment::Move { to } => contour.begin(transform.apply_fixed(to)),
            Segment::Line { to } | Segment::Close { to } => {
                contour.line_to(transform.apply_fixed(to))
            }
            Segment::Quadratic { ctrl, to } => contour
                .quadratic_bezier_to(transform.apply_fixed(ctrl), transform.apply_fixed(to)),
            Segment::Cubic { ctrl1, ctrl2, to } => contour.cubic_bezier_to(
                transform.apply_fixed(ctrl1),
                transform.apply_fixed(ctrl2),
                transform.apply_fixed(to),
            ),
            Segment::Arc { to, .. } => {
                arcs += 1;
                contour.line_to(transform.apply_fixed(to));
            }
        }
    }

    if arcs > 0 {
        debug!("{} arc segment(s) drawn as lines", arcs);
    }

    contour
}

/// Renders `segments` so that `bounds` fills `target`, with the default rasterizer.
///
/// The returned mask covers `target`. See [`render_mask_with`](fn.render_mask_with.html).
pub fn render_mask(segments: &[Segment], bounds: &Bounds, target: &IntRect) -> AlphaMask {
    render_mask_with(&mut Rasterizer::new(), segments, bounds, target)
}

/// Renders `segments` so that `bounds` fills `target`, using `engine`.
///
/// The result only depends on the size of `target`, not on its position. If the
/// bounds have no extent along an axis, nothing can be mapped and the mask is
/// left empty.
pub fn render_mask_with<S: ScanConverter + ?Sized>(
    engine: &mut S,
    segments: &[Segment],
    bounds: &Bounds,
    target: &IntRect,
) -> AlphaMask {
    let to_origin: IntVector = -target.min.to_vector();
    let local = target.translate(to_origin);
    let transform = Transform::derive(bounds, &local);
    if !transform.is_finite() {
        warn!(
            "cannot map bounds {:?}..{:?} onto {}x{} pixels, the mask is left empty",
            bounds.min,
            bounds.max,
            local.width(),
            local.height()
        );
        return AlphaMask::new(*target);
    }

    let contour = build_contour(segments, &transform);
    debug!(
        "rendering {} segment(s) into {:?} with scale {:?}",
        segments.len(),
        target,
        transform.scale
    );

    engine.rasterize(&contour, target)
}

#[cfg(test)]
use crate::algorithms::path::parse_path;
#[cfg(test)]
use crate::algorithms::path_bounds;
#[cfg(test)]
use crate::math::int_rect;

#[test]
fn build_simple_contour() {
    use crate::algorithms::FixedPoint;
    use crate::contour::ContourOp;
    use crate::math::point;

    let segments = parse_path("M0 0L4 0Q4 4 0 4C0 2 1 1 0 0Z").unwrap();
    let contour = build_contour(&segments, &Transform::identity());
    let p = |x, y| FixedPoint::from_point(point(x, y));

    assert_eq!(
        contour.ops(),
        &[
            ContourOp::Begin(p(0.0, 0.0)),
            ContourOp::Line(p(4.0, 0.0)),
            ContourOp::Quadratic(p(4.0, 4.0), p(0.0, 4.0)),
            ContourOp::Cubic(p(0.0, 2.0), p(1.0, 1.0), p(0.0, 0.0)),
            ContourOp::Line(p(0.0, 0.0)),
        ]
    );
}

#[test]
fn arcs_become_lines() {
    use crate::contour::ContourOp;

    let segments = parse_path("M0 0A5 5 0 0 1 10 0").unwrap();
    let contour = build_contour(&segments, &Transform::identity());
    assert_eq!(contour.len(), 2);
    match contour.ops()[1] {
        ContourOp::Line(to) => assert_eq!(to.x.floor(), 10),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn fills_target() {
    let segments = parse_path("M10 10h4v4h-4z").unwrap();
    let bounds = path_bounds(&segments);
    let mask = render_mask(&segments, &bounds, &int_rect(0, 0, 8, 8));

    assert!(mask.pixels().iter().all(|&a| a == 255));
}

#[test]
fn independent_of_target_position() {
    let segments = parse_path("M1 2L2 3l0-1z").unwrap();
    let bounds = path_bounds(&segments);

    let a = render_mask(&segments, &bounds, &int_rect(-10, -10, 20, 10));
    let b = render_mask(&segments, &bounds, &int_rect(0, 0, 30, 20));

    assert_eq!(a.rect(), &int_rect(-10, -10, 20, 10));
    assert_eq!(a.pixels(), b.pixels());
    assert!(a.pixels().iter().any(|&a| a == 255));
    assert!(a.pixels().iter().any(|&a| a == 0));
}

#[test]
fn degenerate_bounds() {
    // A vertical line has no horizontal extent.
    let segments = parse_path("M1 1V5").unwrap();
    let bounds = path_bounds(&segments);
    let mask = render_mask(&segments, &bounds, &int_rect(0, 0, 4, 4));

    assert_eq!(mask.pixels().len(), 16);
    assert!(mask.pixels().iter().all(|&a| a == 0));

    let mask = render_mask(&[], &path_bounds(&[]), &int_rect(0, 0, 4, 4));
    assert!(mask.pixels().iter().all(|&a| a == 0));
}

#[test]
fn custom_engine() {
    struct Counter(usize);
    impl ScanConverter for Counter {
        fn rasterize(&mut self, contour: &Contour, target: &IntRect) -> AlphaMask {
            self.0 += contour.len();
            AlphaMask::new(*target)
        }
    }

    let segments = parse_path("M0 0L1 0L1 1z").unwrap();
    let bounds = path_bounds(&segments);
    let mut engine = Counter(0);
    let mask = render_mask_with(&mut engine, &segments, &bounds, &int_rect(2, 2, 6, 6));

    assert_eq!(engine.0, 4);
    assert_eq!(mask.rect(), &int_rect(2, 2, 6, 6));
}
