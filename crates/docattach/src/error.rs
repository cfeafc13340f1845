use std::io;
use std::path::PathBuf;

use docattach_host::DocumentError;

/// Errors raised by [`Attacher::attach`](crate::Attacher::attach).
#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    /// The source cannot supply file data (a directory or special file).
    #[error("invalid attachment source: {0}")]
    InvalidSource(String),

    /// The resolved content has zero length.
    #[error("source data is empty")]
    EmptyData,

    /// No file name was given and none could be derived from the source.
    #[error("attachment has no file name")]
    MissingName,

    /// A path source could not be inspected or read.
    #[error("failed to read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stream source failed while being drained.
    #[error("failed to read source stream: {0}")]
    StreamRead(#[source] io::Error),

    /// The source exceeds the configured size limit.
    ///
    /// For streams `size` is a lower bound: reading stops one byte past the
    /// limit.
    #[error("source is {size} bytes, exceeding the {limit} byte limit")]
    SourceTooLarge { size: u64, limit: u64 },

    /// The attach configuration could not be parsed.
    #[error("invalid attach config: {0}")]
    Config(String),

    /// The host document rejected an operation.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}

/// Result alias for attachment operations.
pub type AttachResult<T> = Result<T, AttachError>;
