use crate::error::{Result, TessellationError};

/// Style parameters for polyline stroke tessellation.
///
/// The width is constant for the whole stroke, in the same world units as
/// the input points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    width: f64,
    miter_limit: Option<f64>,
}

impl StrokeStyle {
    /// Creates a new stroke style with unbounded miter joins.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not a positive finite number.
    pub fn new(width: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "stroke width must be positive and finite, got {width}"
            ))
            .into());
        }
        Ok(Self {
            width,
            miter_limit: None,
        })
    }

    /// Creates a style from a half width (e.g. a brush radius).
    ///
    /// # Errors
    ///
    /// Returns an error if `half_width` is not a positive finite number.
    pub fn from_half_width(half_width: f64) -> Result<Self> {
        Self::new(half_width * 2.0)
    }

    /// Caps miter joins: when the miter offset would exceed `limit` times the
    /// half width, the join is bevelled instead.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is below 1 or not finite.
    pub fn with_miter_limit(mut self, limit: f64) -> Result<Self> {
        if !(limit.is_finite() && limit >= 1.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "miter limit must be finite and at least 1, got {limit}"
            ))
            .into());
        }
        self.miter_limit = Some(limit);
        Ok(self)
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns half the stroke width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    /// Returns the miter limit, `None` if joins are never bevelled.
    #[must_use]
    pub fn miter_limit(&self) -> Option<f64> {
        self.miter_limit
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            miter_limit: None,
        }
    }
}
