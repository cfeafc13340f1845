use docattach_types::ObjectRef;

use crate::object::ObjectKind;

/// Errors from host document operations.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The requested object was never allocated.
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectRef),

    /// The object exists but is of a different kind.
    #[error("object {reference} is not a {expected}")]
    UnexpectedObject {
        reference: ObjectRef,
        expected: ObjectKind,
    },

    /// Encoding a stream payload failed.
    #[error("compression failed: {0}")]
    CompressionFailed(String),

    /// Decoding a stored stream payload failed.
    #[error("decompression failed: {0}")]
    DecompressionFailed(String),

    /// The document configuration could not be parsed or is out of range.
    #[error("invalid document config: {0}")]
    Config(String),
}

/// Result alias for host document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
