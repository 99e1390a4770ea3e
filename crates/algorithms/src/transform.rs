//! Mapping from path space to a pixel rectangle.

use crate::bounds::Bounds;
use crate::fixed::FixedPoint;
use crate::math::{point, vector, IntRect, Point, Vector};

/// Independent scale and translation along each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Transform {
    pub scale: Vector,
    pub translation: Vector,
}

impl Transform {
    pub fn identity() -> Self {
        Transform {
            scale: vector(1.0, 1.0),
            translation: vector(0.0, 0.0),
        }
    }

    /// Computes the transform that stretches `bounds` onto `target`.
    ///
    /// `bounds.min` maps to `target.min` and `bounds.max` to `target.max`. The
    /// two axes are scaled independently, so the aspect ratio is only preserved
    /// if the target has the same one as the bounds (see
    /// [`Bounds::width_for_height`](../bounds/struct.Bounds.html#method.width_for_height)).
    ///
    /// Bounds without extent along an axis produce a non-finite transform.
    pub fn derive(bounds: &Bounds, target: &IntRect) -> Self {
        let scale = vector(
            target.width() as f64 / bounds.dx(),
            target.height() as f64 / bounds.dy(),
        );
        let translation = vector(
            target.min.x as f64 - scale.x * bounds.min.x,
            target.min.y as f64 - scale.y * bounds.min.y,
        );

        Transform { scale, translation }
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        point(
            p.x * self.scale.x + self.translation.x,
            p.y * self.scale.y + self.translation.y,
        )
    }

    /// Applies the transform and rounds the result to 26.6 fixed point.
    #[inline]
    pub fn apply_fixed(&self, p: Point) -> FixedPoint {
        FixedPoint::from_point(self.apply(p))
    }

    pub fn is_finite(&self) -> bool {
        self.scale.x.is_finite()
            && self.scale.y.is_finite()
            && self.translation.x.is_finite()
            && self.translation.y.is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::identity()
    }
}

#[test]
fn transform_maps_corners() {
    use crate::math::int_rect;
    use crate::path::geom::euclid::approxeq::ApproxEq;

    let bounds = Bounds::new(point(233.0, 64.0), point(633.0, 264.0));
    for rect in &[
        int_rect(0, 0, 400, 200),
        int_rect(0, 0, 200, 100),
        int_rect(-400, -200, 0, 0),
        int_rect(100, 100, 500, 300),
        int_rect(-50, -20, 30, 50),
    ] {
        let transform = Transform::derive(&bounds, rect);
        assert!(transform.is_finite());
        assert!(
            transform.apply(bounds.min).approx_eq(&rect.min.to_f64()),
            "{:?}",
            rect
        );
        assert!(
            transform.apply(bounds.max).approx_eq(&rect.max.to_f64()),
            "{:?}",
            rect
        );
    }
}

#[test]
fn transform_scales_independently() {
    use crate::math::int_rect;

    let bounds = Bounds::new(point(0.0, 0.0), point(10.0, 10.0));
    let transform = Transform::derive(&bounds, &int_rect(0, 0, 20, 5));
    assert_eq!(transform.scale, vector(2.0, 0.5));
    assert_eq!(transform.apply(point(5.0, 5.0)), point(10.0, 2.5));
}

#[test]
fn transform_fixed() {
    use crate::fixed::Fixed;
    use crate::math::int_rect;

    let bounds = Bounds::new(point(0.0, 0.0), point(1.0, 1.0));
    let transform = Transform::derive(&bounds, &int_rect(0, 0, 64, 64));
    assert_eq!(
        transform.apply_fixed(point(0.5, 0.25)),
        FixedPoint::new(Fixed::from_int(32), Fixed::from_int(16))
    );
}

#[test]
fn degenerate_transform() {
    use crate::math::int_rect;

    let bounds = Bounds::new(point(1.0, 1.0), point(1.0, 5.0));
    let transform = Transform::derive(&bounds, &int_rect(0, 0, 10, 10));
    assert!(!transform.is_finite());
    assert!(Transform::identity().is_finite());
    assert_eq!(Transform::identity().apply(point(3.0, 4.0)), point(3.0, 4.0));
}
