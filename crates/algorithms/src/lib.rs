#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Geometry over parsed path segments: bounding boxes, the transform that maps
//! them into a pixel rectangle and the 26.6 fixed point coordinates consumed by
//! the rasterizer.
//!
//! This crate is reexported in [pathmask](../pathmask/index.html).

pub extern crate pathmask_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

pub mod bounds;
pub mod fixed;
pub mod transform;

pub use crate::path::math;

#[doc(inline)]
pub use crate::bounds::{path_bounds, Bounds};
#[doc(inline)]
pub use crate::fixed::{Fixed, FixedPoint};
#[doc(inline)]
pub use crate::transform::Transform;
