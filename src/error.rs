use thiserror::Error;

/// Errors raised while building an animation. Running animations never fail.
#[derive(Debug, Error)]
pub enum AnimationError {
    /// A grid, timing or sway setting is out of its valid range.
    #[error("invalid animation config: {0}")]
    InvalidConfig(String),
    /// Configuration text could not be parsed.
    #[error("could not parse animation config: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

impl AnimationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}
