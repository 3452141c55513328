mod adjacency;
mod miter;
mod orientation;
mod stroke_style;
mod strip;
mod tessellate_stroke;
mod tex_coords;

pub use adjacency::line_strip_adjacency;
pub use miter::{join_offset, miter_join, JoinOffset, Miter};
pub use orientation::OrientationResolver;
pub use stroke_style::StrokeStyle;
pub use strip::StripAssembler;
pub use tessellate_stroke::TessellateStroke;
pub use tex_coords::TexCoordU;

use crate::math::{Point2, Vector2};

/// Floats per vertex in [`StrokeMesh::to_interleaved`]: `x, y, z, u, v`.
pub const INTERLEAVED_STRIDE: usize = 5;

/// One emitted stroke vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeVertex {
    /// World-space position.
    pub position: Point2,
    /// `(u, v)`: `u` runs along the stroke, `v` is 0 inner and 1 outer.
    pub tex_coord: Point2,
}

/// A stroke ribbon ready to be drawn as a triangle strip.
///
/// Vertices come in inner/outer pairs in path order:
/// `inner₀, outer₀, inner₁, outer₁, …`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeMesh {
    /// Strip vertices.
    pub vertices: Vec<StrokeVertex>,
    /// Resolved signed offset of each pair (`outer = p + offset`).
    pub offsets: Vec<Vector2>,
}

impl StrokeMesh {
    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over `(inner, outer)` vertex pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&StrokeVertex, &StrokeVertex)> {
        self.vertices.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Returns the number of triangles the strip draws.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }

    /// Expands the strip into an explicit triangle list.
    ///
    /// Every other triangle has its first two indices swapped so all
    /// triangles keep the winding of the first one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn triangle_indices(&self) -> Vec<[u32; 3]> {
        (0..self.triangle_count() as u32)
            .map(|k| {
                if k % 2 == 0 {
                    [k, k + 1, k + 2]
                } else {
                    [k + 1, k, k + 2]
                }
            })
            .collect()
    }

    /// Flattens the strip into `x, y, z, u, v` floats per vertex, ready for a
    /// vertex buffer upload.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_interleaved(&self, z: f32) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.vertices.len() * INTERLEAVED_STRIDE);
        for v in &self.vertices {
            data.extend_from_slice(&[
                v.position.x as f32,
                v.position.y as f32,
                z,
                v.tex_coord.x as f32,
                v.tex_coord.y as f32,
            ]);
        }
        data
    }
}
