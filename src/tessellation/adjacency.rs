use crate::math::Point2;

/// Pads a polyline for drawing as a line strip with adjacency, where each
/// segment also sees the point before and after it.
///
/// Closed polylines get their last point prepended and their first two
/// points appended; open polylines get both endpoints duplicated. Fewer than
/// two points produce nothing.
#[must_use]
pub fn line_strip_adjacency(points: &[Point2], closed: bool) -> Vec<Point2> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let mut padded = Vec::with_capacity(n + 3);
    if closed {
        padded.push(points[n - 1]);
        padded.extend_from_slice(points);
        padded.push(points[0]);
        padded.push(points[1]);
    } else {
        padded.push(points[0]);
        padded.extend_from_slice(points);
        padded.push(points[n - 1]);
    }
    padded
}
