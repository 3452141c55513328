use crate::error::{Result, TessellationError};
use crate::geometry::WorkingSequence;

/// How the per-vertex `u` texture coordinate along the stroke is produced.
///
/// The width axis (`v`) is fixed: 0 on the inner edge, 1 on the outer edge.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TexCoordU {
    /// The same `u` for every vertex.
    Constant(f64),
    /// Cumulative world-space arc length times `scale`.
    ArcLength { scale: f64 },
    /// Opaque caller-supplied values, one per input point (or per working
    /// point, closing duplicate included).
    PerPoint(Vec<f64>),
    /// `u = 0` everywhere.
    #[default]
    Zero,
}

impl TexCoordU {
    /// Checks the policy against a polyline of `input_len` points that
    /// expands to `working_len` working points.
    ///
    /// # Errors
    ///
    /// Returns an error if a scale or constant is not finite, or if
    /// per-point values match neither length.
    pub fn validate(&self, input_len: usize, working_len: usize) -> Result<()> {
        match self {
            Self::Constant(u) if !u.is_finite() => Err(TessellationError::InvalidParameters(
                format!("constant texture coordinate must be finite, got {u}"),
            )
            .into()),
            Self::ArcLength { scale } if !scale.is_finite() => {
                Err(TessellationError::InvalidParameters(format!(
                    "texture scale must be finite, got {scale}"
                ))
                .into())
            }
            Self::PerPoint(values) if values.len() != input_len && values.len() != working_len => {
                Err(TessellationError::TexCoordCount {
                    expected: working_len,
                    actual: values.len(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }

    /// Returns the `u` value of each working point.
    ///
    /// Per-point values given for the input points only are extended for the
    /// closing duplicate by repeating the first value.
    #[must_use]
    pub fn resolve(&self, seq: &WorkingSequence) -> Vec<f64> {
        let n = seq.len();
        match self {
            Self::Zero => vec![0.0; n],
            Self::Constant(u) => vec![*u; n],
            Self::ArcLength { scale } => seq.arc_lengths().into_iter().map(|s| s * scale).collect(),
            Self::PerPoint(values) => (0..n)
                .map(|i| values.get(i).or(values.first()).copied().unwrap_or(0.0))
                .collect(),
        }
    }
}
