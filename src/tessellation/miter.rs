use crate::geometry::WorkingSequence;
use crate::math::vector_2d::{direction, half_angle_vector, perp};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Miter direction and length factor at a join.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Miter {
    /// Unit half-angle vector (sign not yet resolved).
    pub direction: Vector2,
    /// Offset length as a multiple of the half width, `1 / |dot(h, perp0)|`.
    pub scale: f64,
}

/// Computes the miter at a vertex from the unit directions towards its
/// previous (`v0`) and next (`v1`) neighbors.
///
/// `|dot(h, perp0)|` is `sin(θ/2)` for the angle `θ` between `v0` and `v1`,
/// so it only vanishes when the path folds back onto itself. Within
/// [`TOLERANCE`] of that (`1 - dot(v0, v1)`), the join falls back to the plain
/// perpendicular of the incoming edge. Past the guard the scale stays below
/// roughly `1.4e5`.
#[must_use]
pub fn miter_join(v0: Vector2, v1: Vector2) -> Miter {
    let perp0 = perp(v0);
    if is_back_track(v0, v1) {
        tracing::trace!(?v0, ?v1, "miter denominator vanished, using edge normal");
        return Miter {
            direction: perp0,
            scale: 1.0,
        };
    }
    let h = half_angle_vector(v0, v1);
    Miter {
        direction: h,
        scale: 1.0 / h.dot(&perp0).abs(),
    }
}

/// `true` when both neighbors lie in the same direction from the vertex.
fn is_back_track(v0: Vector2, v1: Vector2) -> bool {
    v0.dot(&v1) >= 1.0 - TOLERANCE
}

/// Unresolved offset at one working point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoinOffset {
    /// Miter join or cap; `p ± offset` are the stroke edges up to sign.
    Offset(Vector2),
    /// Join past the miter limit, or the tip of an exact back-track. Both are
    /// unit normals on the left of travel, for the incoming and the outgoing
    /// edge.
    Bevel { incoming: Vector2, outgoing: Vector2 },
    /// No distinct neighbor: the vertex has no defined direction.
    Collapsed,
}

/// Computes the candidate offset at working index `i`.
///
/// Interior vertices (and every vertex of a closed loop) get a miter join.
/// Open endpoints get the terminal segment's normal, turned towards the
/// bisector of the adjacent join so the cap is square to the segment.
#[must_use]
pub fn join_offset(
    seq: &WorkingSequence,
    i: usize,
    half_width: f64,
    miter_limit: Option<f64>,
) -> JoinOffset {
    let pts = seq.points();
    let p = pts[i];
    match (seq.prev_distinct(i), seq.next_distinct(i)) {
        (Some(a), Some(b)) => {
            let (Some(v0), Some(v1)) = (direction(&p, &pts[a]), direction(&p, &pts[b])) else {
                return JoinOffset::Collapsed;
            };
            if is_back_track(v0, v1) {
                tracing::trace!(index = i, "back-track tip, bevelling join");
                return JoinOffset::Bevel {
                    incoming: perp(-v0),
                    outgoing: perp(v1),
                };
            }
            let miter = miter_join(v0, v1);
            match miter_limit {
                Some(limit) if miter.scale > limit => {
                    tracing::trace!(index = i, scale = miter.scale, limit, "bevelling join");
                    JoinOffset::Bevel {
                        incoming: perp(-v0),
                        outgoing: perp(v1),
                    }
                }
                _ => JoinOffset::Offset(miter.direction * (half_width * miter.scale)),
            }
        }
        (None, Some(b)) => cap_offset(pts, p, b, seq.next_distinct(b), half_width),
        (Some(a), None) => cap_offset(pts, p, a, seq.prev_distinct(a), half_width),
        (None, None) => {
            tracing::trace!(index = i, "no distinct neighbor, collapsing vertex");
            JoinOffset::Collapsed
        }
    }
}

/// Offset at an open endpoint `p` whose nearest point is `pts[near]` and
/// whose second nearest (past `near`) is `far`.
///
/// The bisector at `near` only orients this unresolved candidate; the
/// resolver settles which side of the stroke it ends up on.
fn cap_offset(
    pts: &[Point2],
    p: Point2,
    near: usize,
    far: Option<usize>,
    half_width: f64,
) -> JoinOffset {
    let q = pts[near];
    let Some(segment) = direction(&p, &q) else {
        return JoinOffset::Collapsed;
    };
    let offset = perp(segment) * half_width;

    let bisector = far.and_then(|f| {
        let a = direction(&q, &p)?;
        let b = direction(&q, &pts[f])?;
        Some(half_angle_vector(a, b))
    });
    match bisector {
        Some(h) if offset.dot(&h) < 0.0 => JoinOffset::Offset(-offset),
        _ => JoinOffset::Offset(offset),
    }
}
