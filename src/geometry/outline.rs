use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// Number of segments used for a brush outline.
pub const BRUSH_SEGMENTS: u32 = 128;

/// Returns the corners of the axis-aligned rectangle spanned by two opposite
/// corners, starting at `a` and walking `(b.x, a.y)`, `b`, `(a.x, b.y)`.
///
/// Intended to be stroked as a closed polyline (marquee or bounding box).
#[must_use]
pub fn rectangle_outline(a: Point2, b: Point2) -> Vec<Point2> {
    vec![
        Point2::new(a.x, a.y),
        Point2::new(b.x, a.y),
        Point2::new(b.x, b.y),
        Point2::new(a.x, b.y),
    ]
}

/// Returns `segments` points evenly spaced counter-clockwise on a circle,
/// starting at angle 0.
///
/// # Errors
///
/// Returns an error if `segments < 3` or `radius` is not a positive finite
/// number.
pub fn circle_outline(center: Point2, radius: f64, segments: u32) -> Result<Vec<Point2>> {
    if segments < 3 {
        return Err(GeometryError::TooFewSegments(segments).into());
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "radius",
            value: radius,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into());
    }

    let step = TAU / f64::from(segments);
    Ok((0..segments)
        .map(|s| {
            let theta = step * f64::from(s);
            Point2::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect())
}
