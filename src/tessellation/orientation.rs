use crate::geometry::WorkingSequence;
use crate::math::vector_2d::{direction, perp};
use crate::math::{Point2, Vector2};

/// Fixes the sign of each candidate offset so consecutive offsets stay on the
/// same side of the stroke and the ribbon never twists.
///
/// The running direction is re-derived from each outgoing edge instead of
/// being carried across the whole path, so near-collinear runs cannot drift
/// onto the wrong side.
#[derive(Debug, Clone, Copy)]
pub struct OrientationResolver {
    dir: Vector2,
    /// `true` until the first non-degenerate edge is passed; the running
    /// direction is then the normal of the *outgoing* edge.
    fresh: bool,
}

impl OrientationResolver {
    /// Seeds the running direction from the normal of the first non-degenerate
    /// segment. A sequence without one seeds a zero direction.
    #[must_use]
    pub fn seeded(seq: &WorkingSequence) -> Self {
        let pts = seq.points();
        let dir = pts
            .first()
            .and_then(|p0| pts.iter().skip(1).find_map(|q| direction(p0, q)))
            .map_or_else(Vector2::zeros, perp);
        Self { dir, fresh: true }
    }

    /// Returns the current running direction.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.dir
    }

    /// Flips `candidate` if it points against the running direction.
    #[must_use]
    pub fn resolve(&self, candidate: Vector2) -> Vector2 {
        if candidate.dot(&self.dir) < 0.0 {
            -candidate
        } else {
            candidate
        }
    }

    /// Resolves a bevelled join: both unit normals are put on the side of
    /// travel the running direction is on, and scaled to `half_width`.
    ///
    /// The side is read off the normal the running direction follows: the
    /// incoming one mid-path, the outgoing one at the start of a loop. This
    /// stays well defined at exact back-tracks, where the two are opposite.
    #[must_use]
    pub fn resolve_bevel(
        &self,
        incoming: Vector2,
        outgoing: Vector2,
        half_width: f64,
    ) -> (Vector2, Vector2) {
        let reference = if self.fresh { outgoing } else { incoming };
        let side = if reference.dot(&self.dir) < 0.0 { -1.0 } else { 1.0 };
        (
            incoming * (side * half_width),
            outgoing * (side * half_width),
        )
    }

    /// Moves past the vertex at `p` whose offset resolved to `resolved`,
    /// taking the normal of the edge towards `next` as the new direction.
    ///
    /// A zero-length outgoing edge keeps the current direction.
    pub fn advance(&mut self, p: &Point2, next: &Point2, resolved: Vector2) {
        let Some(edge) = direction(p, next) else {
            return;
        };
        let normal = perp(edge);
        self.fresh = false;
        self.dir = if normal.dot(&resolved) < 0.0 {
            -normal
        } else {
            normal
        };
    }
}
