use crate::math::{Point2, Vector2};

use super::{StrokeMesh, StrokeVertex};

/// Accumulates inner/outer vertex pairs in triangle-strip order.
#[derive(Debug, Default)]
pub struct StripAssembler {
    vertices: Vec<StrokeVertex>,
    offsets: Vec<Vector2>,
}

impl StripAssembler {
    /// Creates an assembler with room for `pairs` vertex pairs.
    #[must_use]
    pub fn with_capacity(pairs: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(pairs * 2),
            offsets: Vec::with_capacity(pairs),
        }
    }

    /// Emits `p - offset` with texture coordinate `(u, 0)`, then `p + offset`
    /// with `(u, 1)`.
    pub fn push_pair(&mut self, p: &Point2, offset: Vector2, u: f64) {
        self.vertices.push(StrokeVertex {
            position: p - offset,
            tex_coord: Point2::new(u, 0.0),
        });
        self.vertices.push(StrokeVertex {
            position: p + offset,
            tex_coord: Point2::new(u, 1.0),
        });
        self.offsets.push(offset);
    }

    /// Finishes the strip.
    #[must_use]
    pub fn finish(self) -> StrokeMesh {
        StrokeMesh {
            vertices: self.vertices,
            offsets: self.offsets,
        }
    }
}
