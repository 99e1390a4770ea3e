#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Segments and parsing for the SVG path-data syntax (the `d` attribute).
//!
//! This crate is reexported in [pathmask](../pathmask/index.html).
//!
//! # Examples
//!
//! ```
//! # extern crate pathmask_path;
//! # fn main() {
//! use pathmask_path::{parse_path, Segment};
//! use pathmask_path::math::point;
//!
//! let segments = parse_path("M1 2L2 3l0-1z").unwrap();
//!
//! assert_eq!(
//!     segments,
//!     vec![
//!         Segment::Move { to: point(1.0, 2.0) },
//!         Segment::Line { to: point(2.0, 3.0) },
//!         Segment::Line { to: point(2.0, 2.0) },
//!         Segment::Close { to: point(1.0, 2.0) },
//!     ]
//! );
//!
//! // Back to the absolute form of the syntax.
//! assert_eq!(pathmask_path::to_svg_string(&segments), "M 1 2 L 2 3 L 2 2 Z");
//! # }
//! ```

pub use lyon_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod parser;
mod segment;
pub mod serializer;

pub use crate::arc::approximate_arcs;
pub use crate::geom::ArcFlags;
#[doc(inline)]
pub use crate::parser::{
    parse_path, parse_path_with_options, ParseError, ParseErrorKind, ParserOptions,
};
pub use crate::segment::*;
#[doc(inline)]
pub use crate::serializer::to_svg_string;

pub mod math {
    //! f64 versions of the euclid types used everywhere. The other pathmask crates
    //! reexport them.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Alias for ```euclid::default::Box2D<f64>```.
    pub type Box2D = euclid::default::Box2D<f64>;

    /// Alias for ```euclid::default::Point2D<i32>```, a pixel position.
    pub type IntPoint = euclid::default::Point2D<i32>;

    /// Alias for ```euclid::default::Vector2D<i32>```.
    pub type IntVector = euclid::default::Vector2D<i32>;

    /// Alias for ```euclid::default::Box2D<i32>```.
    ///
    /// Pixel rectangles are half-open: `min` is the first pixel inside, `max` the
    /// first one outside.
    pub type IntRect = euclid::default::Box2D<i32>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `IntRect::new(IntPoint::new(x0, y0), IntPoint::new(x1, y1))`.
    #[inline]
    pub fn int_rect(x0: i32, y0: i32, x1: i32, y1: i32) -> IntRect {
        IntRect::new(IntPoint::new(x0, y0), IntPoint::new(x1, y1))
    }
}
