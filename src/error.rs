use thiserror::Error;

/// Top-level error type for the Ribbon stroke tessellator.
#[derive(Debug, Error)]
pub enum RibbonError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors raised while building input geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("too few segments: {0} (at least 3 are required)")]
    TooFewSegments(u32),
}

/// Errors raised while configuring a stroke tessellation.
///
/// Tessellation itself never fails; these only come out of style and
/// texture-coordinate setup.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid stroke parameters: {0}")]
    InvalidParameters(String),

    #[error("expected {expected} texture coordinates, got {actual}")]
    TexCoordCount { expected: usize, actual: usize },
}

/// Convenience type alias for results using [`RibbonError`].
pub type Result<T> = std::result::Result<T, RibbonError>;
