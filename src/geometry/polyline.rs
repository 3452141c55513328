use crate::math::{Point2, TOLERANCE};

/// An ordered sequence of 2D points, optionally closed into a loop.
///
/// Consecutive duplicates are legal. For closed polylines the last point
/// connects back to the first; the closing point is *not* stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline2D {
    pub points: Vec<Point2>,
    pub closed: bool,
}

impl Polyline2D {
    /// Creates a polyline from world-space points.
    #[must_use]
    pub fn new(points: Vec<Point2>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Returns the number of input points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Builds the working sequence the tessellator walks.
    ///
    /// Closed polylines with more than two points get their first point
    /// appended so the first and last emitted vertices coincide.
    #[must_use]
    pub fn working_sequence(&self) -> WorkingSequence {
        let wraps = self.closed && self.points.len() > 2;
        let mut points = Vec::with_capacity(self.points.len() + usize::from(wraps));
        points.extend_from_slice(&self.points);
        if wraps {
            points.push(self.points[0]);
        }
        WorkingSequence { points, wraps }
    }
}

/// The polyline after closing-loop duplication, with neighbor lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingSequence {
    points: Vec<Point2>,
    wraps: bool,
}

impl WorkingSequence {
    /// Returns the working points (including the closing duplicate).
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of working points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no working points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if neighbor lookup wraps around a closed loop.
    #[must_use]
    pub fn wraps(&self) -> bool {
        self.wraps
    }

    /// Number of distinct ring slots; the closing duplicate shares slot 0.
    fn ring_len(&self) -> usize {
        if self.wraps {
            self.points.len() - 1
        } else {
            self.points.len()
        }
    }

    fn ring_slot(&self, i: usize) -> usize {
        if self.wraps && i == self.points.len() - 1 {
            0
        } else {
            i
        }
    }

    /// Index of the nearest point before `i` that does not coincide with
    /// `points[i]`, wrapping around closed loops.
    #[must_use]
    pub fn prev_distinct(&self, i: usize) -> Option<usize> {
        let p = self.points[i];
        let ring = self.ring_len();
        let mut slot = self.ring_slot(i);
        for _ in 1..ring {
            slot = if slot == 0 {
                if !self.wraps {
                    return None;
                }
                ring - 1
            } else {
                slot - 1
            };
            if !coincident(&self.points[slot], &p) {
                return Some(slot);
            }
        }
        None
    }

    /// Index of the nearest point after `i` that does not coincide with
    /// `points[i]`, wrapping around closed loops.
    #[must_use]
    pub fn next_distinct(&self, i: usize) -> Option<usize> {
        let p = self.points[i];
        let ring = self.ring_len();
        let mut slot = self.ring_slot(i);
        for _ in 1..ring {
            slot += 1;
            if slot == ring {
                if !self.wraps {
                    return None;
                }
                slot = 0;
            }
            if !coincident(&self.points[slot], &p) {
                return Some(slot);
            }
        }
        None
    }

    /// Cumulative world-space arc length at each working point.
    #[must_use]
    pub fn arc_lengths(&self) -> Vec<f64> {
        let mut lengths = Vec::with_capacity(self.points.len());
        let mut total = 0.0;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                total += (p - self.points[i - 1]).norm();
            }
            lengths.push(total);
        }
        lengths
    }
}

fn coincident(a: &Point2, b: &Point2) -> bool {
    (a - b).norm() < TOLERANCE
}
