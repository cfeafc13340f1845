use serde::{Deserialize, Serialize};

use crate::error::{AttachError, AttachResult};

/// Configuration for an [`Attacher`](crate::Attacher) session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachConfig {
    /// Largest payload accepted from a single source, in bytes.
    ///
    /// Sources are buffered in full before fingerprinting, so this bounds the
    /// memory one attach call can use. `None` disables the check.
    pub max_source_bytes: Option<u64>,
}

impl AttachConfig {
    /// A configuration that rejects sources larger than `limit` bytes.
    pub fn with_max_source_bytes(limit: u64) -> Self {
        Self {
            max_source_bytes: Some(limit),
        }
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> AttachResult<Self> {
        toml::from_str(s).map_err(|e| AttachError::Config(e.to_string()))
    }

    /// Fail with [`AttachError::SourceTooLarge`] if `size` exceeds the limit.
    pub(crate) fn check_size(&self, size: u64) -> AttachResult<()> {
        match self.max_source_bytes {
            Some(limit) if size > limit => Err(AttachError::SourceTooLarge { size, limit }),
            _ => Ok(()),
        }
    }
}
