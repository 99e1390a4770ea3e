#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Antialiased coverage masks for parsed paths.
//!
//! The [mask builder](builder/index.html) maps segments into a pixel rectangle,
//! converts them to 26.6 fixed point [contours](contour/index.html) and hands
//! them to a [`ScanConverter`](trait.ScanConverter.html), by default the
//! `tiny_skia` based [`Rasterizer`](rasterizer/struct.Rasterizer.html).
//!
//! # Examples
//!
//! ```
//! # extern crate pathmask_raster;
//! # fn main() {
//! use pathmask_raster::algorithms::path::parse_path;
//! use pathmask_raster::algorithms::path::math::int_rect;
//! use pathmask_raster::algorithms::path_bounds;
//! use pathmask_raster::render_mask;
//!
//! let segments = parse_path("m33 33h33l-16.7 33z").unwrap();
//! let bounds = path_bounds(&segments);
//! let mask = render_mask(&segments, &bounds, &int_rect(10, 10, 40, 40));
//!
//! assert_eq!(mask.width(), 30);
//! assert_eq!(mask.get(25, 12), 255);
//! # }
//! ```

pub extern crate pathmask_algorithms as algorithms;

pub mod builder;
pub mod contour;
pub mod mask;
pub mod rasterizer;

pub use crate::algorithms::math;

#[doc(inline)]
pub use crate::builder::{build_contour, render_mask, render_mask_with};
#[doc(inline)]
pub use crate::contour::{Contour, ContourOp};
#[doc(inline)]
pub use crate::mask::AlphaMask;
#[doc(inline)]
pub use crate::rasterizer::Rasterizer;

use crate::math::IntRect;

/// A scan conversion engine: turns a contour into per-pixel coverage.
///
/// The contour is expressed in a space where the top-left corner of `target` is
/// the origin. The returned mask covers `target`.
pub trait ScanConverter {
    fn rasterize(&mut self, contour: &Contour, target: &IntRect) -> AlphaMask;
}
