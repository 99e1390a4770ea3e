//! Bounding rectangle computation for segment sequences.

use crate::math::{point, Box2D, Point};
use crate::path::Segment;

/// An axis-aligned rectangle grown by adding points to it.
///
/// The bounds are empty until the first point is added.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
    has_points: bool,
}

impl Bounds {
    /// Creates empty bounds.
    pub fn empty() -> Self {
        Bounds {
            min: point(0.0, 0.0),
            max: point(0.0, 0.0),
            has_points: false,
        }
    }

    /// Creates bounds covering the rectangle between `min` and `max`.
    pub fn new(min: Point, max: Point) -> Self {
        Bounds {
            min,
            max,
            has_points: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.has_points
    }

    /// Returns true if the bounds are empty or have no extent along one of the axes.
    ///
    /// Deriving a transform or an aspect ratio from such bounds divides by zero.
    pub fn is_degenerate(&self) -> bool {
        self.is_empty() || !(self.dx() > 0.0 && self.dy() > 0.0)
    }

    pub fn add_point(&mut self, p: Point) {
        if !self.has_points {
            self.min = p;
            self.max = p;
            self.has_points = true;
            return;
        }

        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn add_points(&mut self, points: &[Point]) {
        for p in points {
            self.add_point(*p);
        }
    }

    /// Grows the bounds to include the geometrically relevant points of a segment.
    ///
    /// Control points are included, which gives a conservative rather than tight
    /// box for curves. Arcs only contribute their end position and `Close` adds
    /// nothing since it ends at the start of the sub-path.
    pub fn add_segment(&mut self, segment: &Segment) {
        match *segment {
            Segment::Move { to } | Segment::Line { to } | Segment::Arc { to, .. } => {
                self.add_point(to);
            }
            Segment::Quadratic { ctrl, to } => {
                self.add_points(&[ctrl, to]);
            }
            Segment::Cubic { ctrl1, ctrl2, to } => {
                self.add_points(&[ctrl1, ctrl2, to]);
            }
            Segment::Close { .. } => {}
        }
    }

    /// Width of the bounds.
    #[inline]
    pub fn dx(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the bounds.
    #[inline]
    pub fn dy(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Shrinks the bounds by `n` on every side (grows them if `n` is negative).
    pub fn inset(&self, n: f64) -> Self {
        self.border(-n, -n, -n, -n)
    }

    /// Grows each side of the bounds by its own margin.
    pub fn border(&self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let mut result = *self;
        result.min.x -= left;
        result.min.y -= top;
        result.max.x += right;
        result.max.y += bottom;

        result
    }

    /// The width that preserves the aspect ratio of the bounds at the given height.
    ///
    /// Not finite if the bounds have no height.
    pub fn width_for_height(&self, height: f64) -> f64 {
        height / self.dy() * self.dx()
    }

    /// The height that preserves the aspect ratio of the bounds at the given width.
    ///
    /// Not finite if the bounds have no width.
    pub fn height_for_width(&self, width: f64) -> f64 {
        width / self.dx() * self.dy()
    }

    pub fn to_box2d(&self) -> Box2D {
        Box2D::new(self.min, self.max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::empty()
    }
}

/// Computes a conservative axis-aligned rectangle that contains the segments.
pub fn path_bounds(segments: &[Segment]) -> Bounds {
    let mut bounds = Bounds::empty();
    for segment in segments {
        bounds.add_segment(segment);
    }

    bounds
}

#[test]
fn simple_bounds() {
    use crate::path::parse_path;

    let segments = parse_path("M1 2L2 3l0-1z").unwrap();
    assert_eq!(
        path_bounds(&segments),
        Bounds::new(point(1.0, 2.0), point(2.0, 3.0))
    );

    let segments = parse_path("M 0 0 C -1 2 3 -4 1 -1 Q 5 5 2 2").unwrap();
    let bounds = path_bounds(&segments);
    assert_eq!(bounds.min, point(-1.0, -4.0));
    assert_eq!(bounds.max, point(5.0, 5.0));
}

#[test]
fn bounds_span_sub_paths() {
    use crate::path::parse_path;

    let segments = parse_path("M 0 0 L 1 1 Z M 10 -5 L 12 -3 Z").unwrap();
    let bounds = path_bounds(&segments);
    assert_eq!(bounds.min, point(0.0, -5.0));
    assert_eq!(bounds.max, point(12.0, 1.0));
}

#[test]
fn arcs_and_close() {
    use crate::path::parse_path;

    // Only the arc's end position is taken into account.
    let segments = parse_path("M 0 0 A 10 10 0 0 1 2 0 Z").unwrap();
    assert_eq!(
        path_bounds(&segments),
        Bounds::new(point(0.0, 0.0), point(2.0, 0.0))
    );
}

#[test]
fn empty_bounds() {
    let bounds = path_bounds(&[]);
    assert!(bounds.is_empty());
    assert!(bounds.is_degenerate());

    let mut bounds = Bounds::empty();
    bounds.add_point(point(-3.0, 7.0));
    assert!(!bounds.is_empty());
    assert_eq!(bounds.min, point(-3.0, 7.0));
    assert_eq!(bounds.max, point(-3.0, 7.0));
    assert!(bounds.is_degenerate());
    assert!(!bounds.height_for_width(10.0).is_finite());
}

#[test]
fn first_point_initializes() {
    // A point far from the origin must not be extended towards (0, 0).
    let mut bounds = Bounds::empty();
    bounds.add_points(&[point(10.0, 20.0), point(15.0, 25.0)]);
    assert_eq!(bounds, Bounds::new(point(10.0, 20.0), point(15.0, 25.0)));
}

#[test]
fn derived_sizes() {
    let bounds = Bounds::new(point(233.0, 64.0), point(633.0, 264.0));
    assert_eq!(bounds.dx(), 400.0);
    assert_eq!(bounds.dy(), 200.0);
    assert_eq!(bounds.width_for_height(100.0), 200.0);
    assert_eq!(bounds.height_for_width(100.0), 50.0);

    let inset = bounds.inset(10.0);
    assert_eq!(inset.min, point(243.0, 74.0));
    assert_eq!(inset.max, point(623.0, 254.0));

    let border = bounds.border(1.0, 2.0, 3.0, 4.0);
    assert_eq!(border.min, point(232.0, 62.0));
    assert_eq!(border.max, point(636.0, 268.0));
}

#[test]
fn as_box2d() {
    let bounds = Bounds::new(point(-1.0, 2.0), point(3.0, 8.0));
    let rect = bounds.to_box2d();
    assert_eq!(rect, Box2D::new(point(-1.0, 2.0), point(3.0, 8.0)));
    assert_eq!(rect.width(), bounds.dx());
    assert_eq!(rect.height(), bounds.dy());
    assert!(rect.contains(point(0.0, 5.0)));
}
