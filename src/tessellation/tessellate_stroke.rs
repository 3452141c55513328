use crate::error::Result;
use crate::geometry::{Polyline2D, WorkingSequence};
use crate::math::vector_2d::{direction, perp};
use crate::math::{Point2, Vector2};

use super::miter::{join_offset, JoinOffset};
use super::orientation::OrientationResolver;
use super::strip::StripAssembler;
use super::stroke_style::StrokeStyle;
use super::tex_coords::TexCoordU;
use super::StrokeMesh;

/// Generates a constant-width ribbon around a polyline as a triangle strip.
///
/// Each working point yields an inner (`p - offset`) and an outer
/// (`p + offset`) vertex. Offsets are mitered so the perpendicular width stays
/// `2 * half_width` through every join; closed polylines repeat their first
/// point so the ring closes without a gap.
///
/// The operation is stateless: every call rebuilds the whole strip from the
/// current points.
#[derive(Debug, Clone)]
pub struct TessellateStroke {
    polyline: Polyline2D,
    style: StrokeStyle,
    tex_coords: TexCoordU,
}

impl TessellateStroke {
    /// Creates a new stroke tessellation operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, style: StrokeStyle, closed: bool) -> Self {
        Self::from_polyline(Polyline2D::new(points, closed), style)
    }

    /// Creates a stroke tessellation operation for an existing polyline.
    #[must_use]
    pub fn from_polyline(polyline: Polyline2D, style: StrokeStyle) -> Self {
        Self {
            polyline,
            style,
            tex_coords: TexCoordU::default(),
        }
    }

    /// Sets how the along-stroke `u` texture coordinate is produced.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy does not fit this polyline (see
    /// [`TexCoordU::validate`]).
    pub fn with_tex_coords(mut self, tex_coords: TexCoordU) -> Result<Self> {
        let working_len = self.polyline.working_sequence().len();
        tex_coords.validate(self.polyline.len(), working_len)?;
        self.tex_coords = tex_coords;
        Ok(self)
    }

    /// Executes the tessellation.
    ///
    /// Fewer than 2 points produce an empty mesh. Exactly 2 points produce a
    /// single unmitered quad. Degenerate geometry (coincident points,
    /// collinear runs, hairpins) never fails; it degrades to edge normals or
    /// collapsed pairs. Exact back-tracks and joins past the miter limit are
    /// bevelled with an extra vertex pair, always on the left of travel.
    ///
    /// Coordinates must be finite; this is only checked in debug builds.
    #[must_use]
    pub fn execute(&self) -> StrokeMesh {
        debug_assert!(
            self.polyline
                .points
                .iter()
                .all(|p| p.x.is_finite() && p.y.is_finite()),
            "stroke points must be finite"
        );

        let n = self.polyline.len();
        let mesh = match n {
            0 | 1 => StrokeMesh::default(),
            2 => self.straight_segment(&self.polyline.working_sequence()),
            _ => self.mitered(&self.polyline.working_sequence()),
        };

        tracing::debug!(
            points = n,
            closed = self.polyline.closed,
            vertices = mesh.len(),
            "tessellated stroke"
        );
        mesh
    }

    /// Two points: one segment, both ends offset by the segment normal.
    fn straight_segment(&self, seq: &WorkingSequence) -> StrokeMesh {
        let pts = seq.points();
        let u = self.tex_coords.resolve(seq);
        let offset = direction(&pts[0], &pts[1]).map_or_else(
            || {
                tracing::trace!("two coincident points, collapsing stroke");
                Vector2::zeros()
            },
            |d| perp(d) * self.style.half_width(),
        );

        let mut strip = StripAssembler::with_capacity(2);
        for (p, u) in pts.iter().zip(&u) {
            strip.push_pair(p, offset, *u);
        }
        strip.finish()
    }

    /// Three or more points: miter every join and keep the sides continuous.
    fn mitered(&self, seq: &WorkingSequence) -> StrokeMesh {
        let pts = seq.points();
        let u = self.tex_coords.resolve(seq);
        let half_w = self.style.half_width();
        let miter_limit = self.style.miter_limit();

        let mut resolver = OrientationResolver::seeded(seq);
        let mut strip = StripAssembler::with_capacity(pts.len());

        for (i, p) in pts.iter().enumerate() {
            let resolved = match join_offset(seq, i, half_w, miter_limit) {
                JoinOffset::Offset(candidate) => {
                    let offset = resolver.resolve(candidate);
                    strip.push_pair(p, offset, u[i]);
                    offset
                }
                JoinOffset::Bevel { incoming, outgoing } => {
                    let (inc, out) = resolver.resolve_bevel(incoming, outgoing, half_w);
                    // The closing duplicate carries the seam's bevel, so the
                    // loop opens on the outgoing pair and ends on it too.
                    if !(seq.wraps() && i == 0) {
                        strip.push_pair(p, inc, u[i]);
                    }
                    strip.push_pair(p, out, u[i]);
                    out
                }
                JoinOffset::Collapsed => {
                    strip.push_pair(p, Vector2::zeros(), u[i]);
                    Vector2::zeros()
                }
            };

            if let Some(next) = pts.get(i + 1) {
                resolver.advance(p, next, resolved);
            }
        }

        strip.finish()
    }
}
