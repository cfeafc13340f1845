use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;
use crate::object::ObjectRef;
use crate::temporal::Timestamp;

// ---------------------------------------------------------------------------
// EmbeddedFile
// ---------------------------------------------------------------------------

/// Payload of an attachment, ready to be written into the host document.
///
/// The fingerprint is computed once, in [`EmbeddedFile::new`], from the exact
/// bytes held by the record. The payload is immutable afterwards, so the
/// fingerprint can never drift from the data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbeddedFile {
    fingerprint: Fingerprint,
    data: Bytes,
    creation_date: Timestamp,
    modification_date: Timestamp,
}

impl EmbeddedFile {
    /// Create a record, fingerprinting `data`.
    pub fn new(data: Bytes, creation_date: Timestamp, modification_date: Timestamp) -> Self {
        let fingerprint = Fingerprint::of(&data);
        Self {
            fingerprint,
            data,
            creation_date,
            modification_date,
        }
    }

    /// Content fingerprint used as the deduplication key.
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// The raw payload.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Payload length in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn creation_date(&self) -> Timestamp {
        self.creation_date
    }

    pub fn modification_date(&self) -> Timestamp {
        self.modification_date
    }
}

// ---------------------------------------------------------------------------
// Filespec
// ---------------------------------------------------------------------------

/// File specification: the named entry that points at an embedded file.
///
/// Filespecs are never shared. Attaching the same payload twice yields two
/// filespecs referencing one embedded file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filespec {
    /// Name shown to readers of the document.
    pub file_name: String,
    /// Hidden filespecs are written but left out of the attachments catalog.
    pub hidden: bool,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// The embedded file this filespec refers to.
    pub embedded_file: ObjectRef,
}

impl Filespec {
    /// Returns `true` if the filespec must stay out of the catalog.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ts(secs: i64) -> Timestamp {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn embedded_file_fingerprints_its_data() {
        let file = EmbeddedFile::new(Bytes::from_static(b"{}"), ts(1), ts(2));
        assert_eq!(file.fingerprint(), Fingerprint::of(b"{}"));
        assert_eq!(file.size(), 2);
        assert_eq!(file.data().as_ref(), b"{}");
    }

    #[test]
    fn embedded_file_keeps_dates() {
        let file = EmbeddedFile::new(Bytes::from_static(b"x"), ts(10), ts(20));
        assert_eq!(file.creation_date(), ts(10));
        assert_eq!(file.modification_date(), ts(20));
    }

    #[test]
    fn same_data_different_dates_share_fingerprint() {
        let a = EmbeddedFile::new(Bytes::from_static(b"same"), ts(1), ts(1));
        let b = EmbeddedFile::new(Bytes::from_static(b"same"), ts(5), ts(9));
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a, b);
    }

    #[test]
    fn filespec_hidden_flag() {
        let spec = Filespec {
            file_name: "a.json".into(),
            hidden: true,
            description: None,
            embedded_file: ObjectRef::new(1, 0),
        };
        assert!(spec.is_hidden());
    }

    #[test]
    fn filespec_serde_roundtrip() {
        let spec = Filespec {
            file_name: "report.csv".into(),
            hidden: false,
            description: Some("quarterly numbers".into()),
            embedded_file: ObjectRef::new(3, 0),
        };
        let json = serde_json::to_string(&spec).unwrap();
        let parsed: Filespec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, parsed);
    }
}
