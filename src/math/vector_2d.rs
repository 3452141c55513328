use super::{Point2, Vector2, TOLERANCE};

/// Returns `v` rotated a quarter turn counter-clockwise: `(x, y) -> (-y, x)`.
#[must_use]
pub fn perp(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Normalizes `v`, or returns `None` when it is shorter than [`TOLERANCE`].
#[must_use]
pub fn try_unit(v: Vector2) -> Option<Vector2> {
    v.try_normalize(TOLERANCE)
}

/// Unit direction from `from` towards `to`, `None` if the points coincide.
#[must_use]
pub fn direction(from: &Point2, to: &Point2) -> Option<Vector2> {
    try_unit(to - from)
}

/// Returns the normalized bisector of two unit directions leaving a vertex.
///
/// When the directions are parallel or anti-parallel their sum is zero (or
/// points straight along the edge) and the bisector is taken as the
/// perpendicular of `v0` instead.
#[must_use]
pub fn half_angle_vector(v0: Vector2, v1: Vector2) -> Vector2 {
    if 1.0 - v0.dot(&v1).abs() <= TOLERANCE {
        return perp(v0);
    }
    try_unit(v0 + v1).unwrap_or_else(|| perp(v0))
}
