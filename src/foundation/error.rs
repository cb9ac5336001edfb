/// Convenience result type used across depthflex.
pub type FlexResult<T> = Result<T, FlexError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum FlexError {
    /// A color literal could not be decoded.
    #[error("malformed color: {0}")]
    MalformedColor(String),

    /// A feature signal and a prior sequence disagree on frame count.
    #[error("length mismatch: feature has {feature} frames but the prior sequence has {prior}")]
    LengthMismatch {
        /// Frame count reported by the feature.
        feature: usize,
        /// Length of the supplied prior sequence.
        prior: usize,
    },

    /// An effects input was neither absent nor a mapping.
    #[error("invalid effects type: {0}")]
    InvalidEffectsType(String),

    /// A caller-supplied structure has the wrong shape.
    #[error("shape error: {0}")]
    Shape(String),

    /// Invalid user-provided parameters or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlexError {
    /// Build a [`FlexError::MalformedColor`] value.
    pub fn malformed_color(msg: impl Into<String>) -> Self {
        Self::MalformedColor(msg.into())
    }

    /// Build a [`FlexError::LengthMismatch`] value.
    pub fn length_mismatch(feature: usize, prior: usize) -> Self {
        Self::LengthMismatch { feature, prior }
    }

    /// Build a [`FlexError::InvalidEffectsType`] value.
    pub fn invalid_effects_type(msg: impl Into<String>) -> Self {
        Self::InvalidEffectsType(msg.into())
    }

    /// Build a [`FlexError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`FlexError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlexError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FlexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
