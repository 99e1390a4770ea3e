use crate::math::{Point, Vector};
use crate::ArcFlags;

/// One drawing primitive of a path.
///
/// All positions are absolute: relative coordinates are resolved while parsing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Segment {
    /// Begins a new sub-path.
    Move { to: Point },
    Line { to: Point },
    /// Closes the current sub-path, `to` is the position of the sub-path's `Move`.
    Close { to: Point },
    Quadratic { ctrl: Point, to: Point },
    Cubic { ctrl1: Point, ctrl2: Point, to: Point },
    /// An elliptical arc.
    ///
    /// Bounds and masks treat it as a line to `to`, see
    /// [`approximate_arcs`](fn.approximate_arcs.html) to get curves instead.
    Arc {
        radii: Vector,
        /// Rotation of the ellipse's x axis, in degrees.
        x_rotation: f64,
        flags: ArcFlags,
        to: Point,
    },
}

/// The variant of a segment, without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum SegmentKind {
    Move,
    Line,
    Close,
    Quadratic,
    Cubic,
    Arc,
}

impl Segment {
    /// The position of the pen after this segment.
    #[inline]
    pub fn to(&self) -> Point {
        match *self {
            Segment::Move { to }
            | Segment::Line { to }
            | Segment::Close { to }
            | Segment::Quadratic { to, .. }
            | Segment::Cubic { to, .. }
            | Segment::Arc { to, .. } => to,
        }
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Move { .. } => SegmentKind::Move,
            Segment::Line { .. } => SegmentKind::Line,
            Segment::Close { .. } => SegmentKind::Close,
            Segment::Quadratic { .. } => SegmentKind::Quadratic,
            Segment::Cubic { .. } => SegmentKind::Cubic,
            Segment::Arc { .. } => SegmentKind::Arc,
        }
    }

    pub fn is_curve(&self) -> bool {
        match self {
            Segment::Quadratic { .. } | Segment::Cubic { .. } | Segment::Arc { .. } => true,
            _ => false,
        }
    }
}

#[test]
fn segment_accessors() {
    use crate::math::{point, vector};

    let arc = Segment::Arc {
        radii: vector(5.0, 5.0),
        x_rotation: 0.0,
        flags: ArcFlags::default(),
        to: point(10.0, 0.0),
    };
    assert_eq!(arc.to(), point(10.0, 0.0));
    assert_eq!(arc.kind(), SegmentKind::Arc);
    assert!(arc.is_curve());

    let close = Segment::Close { to: point(1.0, 2.0) };
    assert_eq!(close.to(), point(1.0, 2.0));
    assert_eq!(close.kind(), SegmentKind::Close);
    assert!(!close.is_curve());
}
