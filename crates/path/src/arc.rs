//! Approximation of elliptical arcs with quadratic bézier curves.

use crate::geom::SvgArc;
use crate::math::{point, Angle, Point};
use crate::Segment;

/// Replaces every `Arc` segment with the quadratic bézier curves that approximate it.
///
/// Arcs that degenerate into a straight line (zero radius, or same start and end
/// positions) become a `Line`. Other segments are copied unchanged.
pub fn approximate_arcs(segments: &[Segment]) -> Vec<Segment> {
    let mut output = Vec::with_capacity(segments.len());
    let mut current = point(0.0, 0.0);
    for segment in segments {
        if let Segment::Arc {
            radii,
            x_rotation,
            flags,
            to,
        } = *segment
        {
            let arc = SvgArc {
                from: current,
                to,
                radii,
                x_rotation: Angle::degrees(x_rotation),
                flags,
            };
            push_arc(&arc, &mut output);
        } else {
            output.push(*segment);
        }

        current = segment.to();
    }

    output
}

fn push_arc(arc: &SvgArc<f64>, output: &mut Vec<Segment>) {
    if arc.is_straight_line() {
        output.push(Segment::Line { to: arc.to });
        return;
    }

    let first = output.len();
    arc.to_arc()
        .for_each_quadratic_bezier_with_t(&mut |curve, _range| {
            output.push(Segment::Quadratic {
                ctrl: curve.ctrl,
                to: curve.to,
            });
        });

    // Keep the end position exact, the generated curves accumulate rounding errors.
    snap_last_endpoint(&mut output[first..], arc.to);
}

fn snap_last_endpoint(curves: &mut [Segment], to: Point) {
    if let Some(Segment::Quadratic { to: last, .. }) = curves.last_mut() {
        *last = to;
    }
}

#[test]
fn half_circle() {
    use crate::math::vector;
    use crate::ArcFlags;

    let segments = [
        Segment::Move { to: point(0.0, 0.0) },
        Segment::Arc {
            radii: vector(5.0, 5.0),
            x_rotation: 0.0,
            flags: ArcFlags {
                large_arc: false,
                sweep: true,
            },
            to: point(10.0, 0.0),
        },
        Segment::Close { to: point(0.0, 0.0) },
    ];

    let approximated = approximate_arcs(&segments);

    assert_eq!(approximated[0], segments[0]);
    assert_eq!(approximated.last(), segments.last());
    assert!(approximated.len() > 3);

    let curves = &approximated[1..approximated.len() - 1];
    for curve in curves {
        match curve {
            Segment::Quadratic { to, .. } => {
                // Every endpoint lies on the circle.
                let distance = (*to - point(5.0, 0.0)).length();
                assert!((distance - 5.0).abs() < 1e-6, "{:?}", to);
            }
            other => panic!("{:?}", other),
        }
    }
    assert_eq!(curves.last().map(Segment::to), Some(point(10.0, 0.0)));
}

#[test]
fn degenerate_arc() {
    use crate::math::vector;
    use crate::ArcFlags;

    let segments = [
        Segment::Move { to: point(1.0, 1.0) },
        Segment::Arc {
            radii: vector(0.0, 3.0),
            x_rotation: 0.0,
            flags: ArcFlags::default(),
            to: point(4.0, 5.0),
        },
        Segment::Line { to: point(0.0, 0.0) },
    ];

    assert_eq!(
        approximate_arcs(&segments),
        vec![
            Segment::Move { to: point(1.0, 1.0) },
            Segment::Line { to: point(4.0, 5.0) },
            Segment::Line { to: point(0.0, 0.0) },
        ]
    );
}
