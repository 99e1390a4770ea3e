//! Fixed point outlines handed to the scan converter.

use crate::algorithms::FixedPoint;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContourOp {
    Begin(FixedPoint),
    Line(FixedPoint),
    Quadratic(FixedPoint, FixedPoint),
    Cubic(FixedPoint, FixedPoint, FixedPoint),
}

/// A sequence of outlines in 26.6 fixed point coordinates.
///
/// Each `Begin` starts a new outline. Outlines are filled as if they were closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Contour {
    ops: Vec<ContourOp>,
}

impl Contour {
    pub fn new() -> Self {
        Contour { ops: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Contour {
            ops: Vec::with_capacity(cap),
        }
    }

    pub fn begin(&mut self, at: FixedPoint) {
        self.ops.push(ContourOp::Begin(at));
    }

    pub fn line_to(&mut self, to: FixedPoint) {
        self.ops.push(ContourOp::Line(to));
    }

    pub fn quadratic_bezier_to(&mut self, ctrl: FixedPoint, to: FixedPoint) {
        self.ops.push(ContourOp::Quadratic(ctrl, to));
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: FixedPoint, ctrl2: FixedPoint, to: FixedPoint) {
        self.ops.push(ContourOp::Cubic(ctrl1, ctrl2, to));
    }

    pub fn ops(&self) -> &[ContourOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

#[test]
fn reuse_after_clear() {
    use crate::math::point;

    let p = |x, y| FixedPoint::from_point(point(x, y));
    let mut contour = Contour::with_capacity(4);
    contour.begin(p(0.0, 0.0));
    contour.line_to(p(1.0, 0.0));
    contour.quadratic_bezier_to(p(1.0, 1.0), p(0.0, 1.0));
    assert_eq!(contour.len(), 3);

    contour.clear();
    assert!(contour.is_empty());
    assert_eq!(contour, Contour::new());

    contour.begin(p(2.0, 2.0));
    contour.cubic_bezier_to(p(3.0, 2.0), p(3.0, 3.0), p(2.0, 3.0));
    assert_eq!(
        contour.ops(),
        &[
            ContourOp::Begin(p(2.0, 2.0)),
            ContourOp::Cubic(p(3.0, 2.0), p(3.0, 3.0), p(2.0, 3.0)),
        ]
    );
}
