use std::io::{Read, Write};

use bytes::Bytes;
use docattach_types::{EmbeddedFile, Filespec, Fingerprint, Timestamp};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use crate::config::DocumentConfig;
use crate::error::{DocumentError, DocumentResult};
use crate::pdf;

/// The kind of object held by the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Stream holding an attachment payload.
    EmbeddedFile,
    /// Dictionary naming an embedded file.
    Filespec,
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmbeddedFile => write!(f, "embedded file"),
            Self::Filespec => write!(f, "filespec"),
        }
    }
}

/// Encoding applied to a stream payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamFilter {
    /// Stored verbatim.
    None,
    /// zlib/deflate, rendered as `/FlateDecode`.
    Flate,
}

// ---------------------------------------------------------------------------
// EmbeddedFileStream
// ---------------------------------------------------------------------------

/// An embedded-file stream as written into the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbeddedFileStream {
    /// Deduplication fingerprint of the decoded payload.
    pub fingerprint: Fingerprint,
    /// MD5 of the decoded payload, written as `/CheckSum`.
    pub checksum: [u8; 16],
    /// Decoded payload size in bytes.
    pub size: u64,
    pub creation_date: Timestamp,
    pub modification_date: Timestamp,
    /// Filter applied to `encoded`.
    pub filter: StreamFilter,
    /// Stream bytes as they appear in the document.
    pub encoded: Bytes,
}

impl EmbeddedFileStream {
    /// Encode `file` according to the document's compression policy.
    pub fn encode(file: &EmbeddedFile, config: &DocumentConfig) -> DocumentResult<Self> {
        let (filter, encoded) = if config.compress_streams {
            let mut encoder =
                ZlibEncoder::new(Vec::new(), Compression::new(config.compression_level));
            encoder
                .write_all(file.data())
                .map_err(|e| DocumentError::CompressionFailed(e.to_string()))?;
            let out = encoder
                .finish()
                .map_err(|e| DocumentError::CompressionFailed(e.to_string()))?;
            (StreamFilter::Flate, Bytes::from(out))
        } else {
            (StreamFilter::None, file.data().clone())
        };

        Ok(Self {
            fingerprint: file.fingerprint(),
            checksum: md5::compute(file.data()).0,
            size: file.size(),
            creation_date: file.creation_date(),
            modification_date: file.modification_date(),
            filter,
            encoded,
        })
    }

    /// Decode the stream back into the original payload.
    pub fn decode(&self) -> DocumentResult<Vec<u8>> {
        match self.filter {
            StreamFilter::None => Ok(self.encoded.to_vec()),
            StreamFilter::Flate => {
                let mut out = Vec::with_capacity(self.size as usize);
                ZlibDecoder::new(&self.encoded[..])
                    .read_to_end(&mut out)
                    .map_err(|e| DocumentError::DecompressionFailed(e.to_string()))?;
                Ok(out)
            }
        }
    }

    fn dictionary(&self) -> String {
        let mut dict = format!(
            "<< /Type /EmbeddedFile /Length {}",
            self.encoded.len()
        );
        if self.filter == StreamFilter::Flate {
            dict.push_str(" /Filter /FlateDecode");
        }
        dict.push_str(&format!(
            " /Params << /CreationDate {} /ModDate {} /CheckSum {} /Size {} >> >>",
            pdf::literal_string(&pdf::date(&self.creation_date)),
            pdf::literal_string(&pdf::date(&self.modification_date)),
            pdf::hex_string(&self.checksum),
            self.size
        ));
        dict
    }
}

// ---------------------------------------------------------------------------
// DocumentObject
// ---------------------------------------------------------------------------

/// An indirect object held by the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentObject {
    EmbeddedFile(EmbeddedFileStream),
    Filespec(Filespec),
}

impl DocumentObject {
    /// The kind of this object.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::EmbeddedFile(_) => ObjectKind::EmbeddedFile,
            Self::Filespec(_) => ObjectKind::Filespec,
        }
    }

    /// Render the object's dictionary in PDF syntax.
    pub fn to_pdf_dictionary(&self) -> String {
        match self {
            Self::EmbeddedFile(stream) => stream.dictionary(),
            Self::Filespec(spec) => {
                let name = pdf::text_string(&spec.file_name);
                let mut dict = format!("<< /Type /Filespec /F {name} /UF {name}");
                if let Some(desc) = &spec.description {
                    dict.push_str(&format!(" /Desc {}", pdf::text_string(desc)));
                }
                dict.push_str(&format!(" /EF << /F {} >> >>", spec.embedded_file));
                dict
            }
        }
    }
}
