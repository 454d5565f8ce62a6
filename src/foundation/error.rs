/// Crate-wide result alias.
pub type EmocanvasResult<T> = Result<T, EmocanvasError>;

/// Errors reported by the rendering engine.
///
/// Validation failures (`InvalidInput`, `UnsupportedStyle`) are raised before any pixel work
/// starts. `Io`/`Encode` only come out of the persistence step and never invalidate an already
/// rendered canvas.
#[derive(thiserror::Error, Debug)]
pub enum EmocanvasError {
    /// Distribution, resolution or option values that cannot be rendered.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Style identifier outside the fixed vocabulary.
    #[error("unsupported style: \"{0}\" (expected one of dynamic, waves, aurora, abstract, marble)")]
    UnsupportedStyle(String),

    /// The render was cancelled through its [`crate::CancelToken`].
    #[error("render cancelled")]
    Cancelled,

    /// Failure while persisting an encoded image.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while encoding or decoding image bytes.
    #[error("encode error: {0}")]
    Encode(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EmocanvasError {
    /// Build an [`EmocanvasError::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build an [`EmocanvasError::UnsupportedStyle`].
    pub fn unsupported_style(name: impl Into<String>) -> Self {
        Self::UnsupportedStyle(name.into())
    }

    /// Build an [`EmocanvasError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

impl From<image::ImageError> for EmocanvasError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Self::Io(e),
            other => Self::Encode(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
