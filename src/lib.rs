//! softdraw: 2D software rasterization
//!
//! Draws geometric primitives directly into in-memory pixel buffers:
//! aliased and antialiased lines, polylines, arcs, ellipses, circles with
//! per-quadrant control, filled polygons, and rounded rectangles with
//! independent corner radii. Everything is integer-exact software
//! rasterization honoring the surface's clip rectangle, and every operation
//! returns the tight bounding rect of the pixels it changed.
//!
//! ```
//! use softdraw::{circle, line, PixelFormat, Quadrants, Surface};
//!
//! let mut surf = Surface::new(100, 100, PixelFormat::rgba8888());
//! let white = surf.format().map_rgba(255, 255, 255, 255);
//! line(&mut surf, white, (10, 10), (90, 40), 3).unwrap();
//! let dirty = circle(&mut surf, white, (50, 50), 20, 0, Quadrants::full()).unwrap();
//! assert_eq!((dirty.w, dirty.h), (40, 40));
//! ```

mod color;
mod draw;
mod error;
mod raster;
mod rect;
mod surface;

#[cfg(feature = "display")]
pub mod display;

pub use color::Color;
pub use draw::{aaline, aalines, arc, circle, ellipse, line, lines, polygon, rect, CornerRadii, Quadrants};
pub use error::DrawError;
pub use rect::Rect;
pub use surface::{PixelFormat, Surface};
