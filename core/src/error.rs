use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("image payload is not valid json: {0}")]
    Payload(String),
    #[error("invalid image id: {0}")]
    InvalidImageId(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("response body is not json: {0}")]
    Decode(String),
    #[error("request superseded by a newer click")]
    Aborted,
    #[error("request timed out after {0} ms")]
    TimedOut(u32),
}

impl GalleryError {
    /// True when the request was cancelled on purpose and nothing should be reported.
    pub fn is_superseded(&self) -> bool {
        matches!(self, GalleryError::Aborted)
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
