//! Turns 2D polylines into constant-width, mitered triangle-strip ribbons.
//!
//! ```
//! use ribbon::math::Point2;
//! use ribbon::tessellation::{StrokeStyle, TessellateStroke};
//!
//! let points = vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)];
//! let style = StrokeStyle::new(2.0).unwrap();
//! let mesh = TessellateStroke::new(points, style, false).execute();
//! assert_eq!(mesh.len(), 4);
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;

pub use error::{RibbonError, Result};
