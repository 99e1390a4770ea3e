//! Writes segments back using the SVG path syntax.
//!
//! The output only uses absolute commands and spells out every control point
//! (no `H`, `V`, `S` or `T`), so parsing it back gives the same segments.

use crate::Segment;

use std::fmt;

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Segment::Move { to } => write!(f, "M {} {}", to.x, to.y),
            Segment::Line { to } => write!(f, "L {} {}", to.x, to.y),
            Segment::Close { .. } => write!(f, "Z"),
            Segment::Quadratic { ctrl, to } => {
                write!(f, "Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
            }
            Segment::Cubic { ctrl1, ctrl2, to } => write!(
                f,
                "C {} {} {} {} {} {}",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
            Segment::Arc {
                radii,
                x_rotation,
                flags,
                to,
            } => write!(
                f,
                "A {} {} {} {} {} {} {}",
                radii.x,
                radii.y,
                x_rotation,
                flags.large_arc as u32,
                flags.sweep as u32,
                to.x,
                to.y
            ),
        }
    }
}

/// Builds the SVG path string of a sequence of segments.
pub fn to_svg_string(segments: &[Segment]) -> String {
    let mut path = String::new();
    for segment in segments {
        if !path.is_empty() {
            path.push(' ');
        }
        path += &segment.to_string();
    }

    path
}

#[test]
fn serialize_simple() {
    use crate::math::point;

    let segments = [
        Segment::Move { to: point(0.0, 0.5) },
        Segment::Quadratic {
            ctrl: point(1.0, -1.0),
            to: point(2.0, 0.0),
        },
        Segment::Close { to: point(0.0, 0.5) },
    ];

    assert_eq!(to_svg_string(&segments), "M 0 0.5 Q 1 -1 2 0 Z");
    assert_eq!(to_svg_string(&[]), "");
}

#[test]
fn round_trip() {
    use crate::parse_path;

    for src in &[
        "M1 2L2 3l0-1z",
        "m33 33h33l-16.7 33z",
        "M 10 10 c 1 1 2 2 3 3 s 4 0 5 5 q 1 0 2 2 t 3 -1 z m 1 1 l 2 2",
        "M 1 1 a 5 6 30 1 0 10 0 A 2 2 0 0 1 0 0 z L 0.001 -0.0000001",
        "m190.85 451.25c11.661 14.719 32.323 24.491 55.844 24.491s-29.488-52.214-65.889-52.214z",
    ] {
        let segments = parse_path(src).unwrap();
        let serialized = to_svg_string(&segments);
        assert_eq!(parse_path(&serialized).unwrap(), segments, "{}", serialized);
    }
}
