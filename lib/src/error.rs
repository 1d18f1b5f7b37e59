use thiserror::Error;

/// Errors emitted by mugshot operations.
///
/// Model construction and HTML rendering are total and never fail; the only
/// fallible surface is serializing a model for programmatic consumers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PageError {
    /// Failed to serialize the page model.
    #[error("Failed to serialize page model: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for mugshot operations.
pub type PageResult<T> = Result<T, PageError>;
