pub mod outline;
pub mod polyline;

pub use outline::{circle_outline, rectangle_outline, BRUSH_SEGMENTS};
pub use polyline::{Polyline2D, WorkingSequence};
