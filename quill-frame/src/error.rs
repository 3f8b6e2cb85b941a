use thiserror::Error;

/// Errors originating from frame configuration.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame initialized without a font")]
    MissingFont,
}

pub type Result<T> = std::result::Result<T, FrameError>;
