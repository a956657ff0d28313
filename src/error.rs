use thiserror::Error;

/// Conversion failures, one variant per pipeline stage.
///
/// The `Display` strings are the user-visible contract: callers of
/// [`crate::convert::Converter::convert`] see them verbatim in the result's
/// `error` field and nothing else.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The rendering engine (or the library it binds) could not be loaded.
    #[error("Failed to convert PDF: {0}")]
    EngineUnavailable(String),

    /// The input bytes are not a parsable PDF, or the first page is missing.
    #[error("Failed to convert PDF: {0}")]
    Decode(String),

    /// No pixel surface of the required dimensions could be provided.
    #[error("Canvas context could not be created")]
    SurfaceUnavailable,

    /// The rendered surface could not be serialized to PNG, or produced no
    /// data. The underlying cause is logged, never surfaced.
    #[error("Failed to create image blob")]
    Encode,

    /// Any other fault inside the pipeline, wrapped with its message.
    #[error("Failed to convert PDF: {0}")]
    Unexpected(String),
}

/// Engine loader failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("pdfium library could not be loaded: {0}")]
    Unavailable(String),
}
