/// Crate-wide result alias.
pub type InkwalkResult<T> = Result<T, InkwalkError>;

/// Crate-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum InkwalkError {
    /// Invalid input or configuration rejected at an API boundary.
    #[error("validation error: {0}")]
    Validation(String),

    /// Image bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Rasterization of a segment list failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, with its original source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkwalkError {
    /// Build a [`InkwalkError::Validation`] from any message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`InkwalkError::Decode`] from any message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`InkwalkError::Render`] from any message.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`InkwalkError::Serde`] from any message.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
