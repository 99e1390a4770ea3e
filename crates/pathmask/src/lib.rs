#![deny(bare_trait_objects)]

//! Parsing of SVG path data and rendering into antialiased alpha masks.
//!
//! # Crates
//!
//! This meta-crate (`pathmask`) reexports the following sub-crates for convenience:
//!
//! * **pathmask_path** - The segment model, the path-data parser and serializer.
//! * **pathmask_algorithms** - Bounding boxes, the bounds to pixels transform and
//!   26.6 fixed point coordinates.
//! * **pathmask_raster** - Contours, the coverage rasterizer and alpha masks.
//!
//! Each `pathmask_<name>` crate is reexported as a `<name>` module in `pathmask`. For example:
//!
//! ```ignore
//! extern crate pathmask_raster;
//! use pathmask_raster::Rasterizer;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate pathmask;
//! use pathmask::raster::Rasterizer;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Rendering a path at its natural aspect ratio
//!
//! ```
//! use pathmask::path::parse_path;
//! use pathmask::algorithms::path_bounds;
//! use pathmask::math::int_rect;
//! use pathmask::raster::render_mask;
//!
//! fn main() {
//!     // A 20x10 rectangle with a triangular notch.
//!     let segments = parse_path("M0 0h20v10h-8l-2-5l-2 5h-8z").unwrap();
//!
//!     let bounds = path_bounds(&segments);
//!     let height = 16;
//!     let width = bounds.width_for_height(height as f64).round() as i32;
//!     assert_eq!(width, 32);
//!
//!     let mask = render_mask(&segments, &bounds, &int_rect(0, 0, width, height));
//!
//!     // Inside of the rectangle.
//!     assert_eq!(mask.get(2, 8), 255);
//!     // Inside of the notch.
//!     assert_eq!(mask.get(15, 15), 0);
//! }
//! ```
//!
//! ## Curved arcs
//!
//! Arcs are rendered as straight lines unless they are approximated with curves first:
//!
//! ```
//! use pathmask::path::{approximate_arcs, parse_path};
//! use pathmask::algorithms::Bounds;
//! use pathmask::math::{int_rect, point};
//! use pathmask::raster::render_mask;
//!
//! fn main() {
//!     let segments = parse_path("M0 10A10 10 0 0 1 20 10z").unwrap();
//!     let curved = approximate_arcs(&segments);
//!
//!     let bounds = Bounds::new(point(0.0, 0.0), point(20.0, 10.0));
//!     let target = int_rect(0, 0, 20, 10);
//!
//!     // As a line, the half disc has no area.
//!     assert!(render_mask(&segments, &bounds, &target).pixels().iter().all(|&a| a == 0));
//!     // As curves, it covers its center.
//!     assert_eq!(render_mask(&curved, &bounds, &target).get(10, 6), 255);
//! }
//! ```

pub extern crate pathmask_algorithms;
pub extern crate pathmask_raster;

pub use pathmask_algorithms as algorithms;
pub use pathmask_raster as raster;
pub use algorithms::path;
pub use path::geom;

pub use path::math;
