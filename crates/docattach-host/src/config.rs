use serde::{Deserialize, Serialize};

use crate::error::{DocumentError, DocumentResult};

/// Configuration for an [`InMemoryDocument`](crate::InMemoryDocument).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Whether embedded-file streams are Flate-compressed when written.
    pub compress_streams: bool,
    /// zlib compression level, 0 (store) through 9 (best).
    pub compression_level: u32,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            compress_streams: true,
            compression_level: 6,
        }
    }
}

impl DocumentConfig {
    /// A configuration that writes every stream verbatim.
    pub fn uncompressed() -> Self {
        Self {
            compress_streams: false,
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> DocumentResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| DocumentError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that values are in range.
    pub fn validate(&self) -> DocumentResult<()> {
        if self.compression_level > 9 {
            return Err(DocumentError::Config(format!(
                "compression_level must be 0-9, got {}",
                self.compression_level
            )));
        }
        Ok(())
    }
}
