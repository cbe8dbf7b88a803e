//! Shape construction errors

/// Errors reported when a collision shape cannot be built
///
/// Every error is local to the call that produced it; factories and
/// registries stay usable afterwards.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A scalar or vector argument was non-positive or not finite
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex set cannot enclose a volume
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// An error raised while building a named shape
    #[error("Shape '{name}': {source}")]
    InShape {
        /// Name of the shape being built
        name: String,
        /// Underlying construction error
        source: Box<ShapeError>,
    },
}

impl ShapeError {
    /// Attach the name of the shape that failed to build
    pub fn in_shape(self, name: impl Into<String>) -> Self {
        Self::InShape {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with any shape names stripped
    pub fn root(&self) -> &ShapeError {
        match self {
            Self::InShape { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Check that a scalar is finite and strictly positive
pub(crate) fn require_positive(what: &str, value: f32) -> Result<f32, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidArgument(format!(
            "{what} must be positive and finite, got {value}"
        )))
    }
}
