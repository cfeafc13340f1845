use std::collections::BTreeMap;

use docattach_types::{EmbeddedFile, Filespec, ObjectRef};
use tracing::debug;

use crate::catalog::{AttachmentCatalog, CatalogEntry};
use crate::config::DocumentConfig;
use crate::error::{DocumentError, DocumentResult};
use crate::object::{DocumentObject, EmbeddedFileStream, ObjectKind};
use crate::traits::HostDocument;

/// In-memory document host.
///
/// Objects are numbered sequentially from 1 and kept in a `BTreeMap` so that
/// iteration follows allocation order. Intended for tests and for embedders
/// that serialize the final document themselves.
pub struct InMemoryDocument {
    config: DocumentConfig,
    objects: BTreeMap<ObjectRef, DocumentObject>,
    catalog: AttachmentCatalog,
    next_number: u32,
}

impl InMemoryDocument {
    /// Create an empty document with the default configuration.
    pub fn new() -> Self {
        Self::empty(DocumentConfig::default())
    }

    /// Create an empty document with the given configuration.
    ///
    /// Fails with [`DocumentError::Config`] if the configuration is out of
    /// range.
    pub fn with_config(config: DocumentConfig) -> DocumentResult<Self> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: DocumentConfig) -> Self {
        Self {
            config,
            objects: BTreeMap::new(),
            catalog: AttachmentCatalog::new(),
            next_number: 1,
        }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Look up an object by reference.
    pub fn object(&self, reference: ObjectRef) -> Option<&DocumentObject> {
        self.objects.get(&reference)
    }

    /// All objects in allocation order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectRef, &DocumentObject)> {
        self.objects.iter().map(|(r, o)| (*r, o))
    }

    /// Number of objects written so far.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of embedded-file streams written so far.
    pub fn embedded_file_count(&self) -> usize {
        self.count_kind(ObjectKind::EmbeddedFile)
    }

    /// Number of filespec dictionaries written so far.
    pub fn filespec_count(&self) -> usize {
        self.count_kind(ObjectKind::Filespec)
    }

    /// Total encoded stream bytes across all embedded files.
    pub fn stored_bytes(&self) -> u64 {
        self.objects
            .values()
            .filter_map(|obj| match obj {
                DocumentObject::EmbeddedFile(stream) => Some(stream.encoded.len() as u64),
                DocumentObject::Filespec(_) => None,
            })
            .sum()
    }

    /// The visible attachments catalog.
    pub fn catalog(&self) -> &AttachmentCatalog {
        &self.catalog
    }

    /// Fetch a filespec by reference.
    pub fn filespec(&self, reference: ObjectRef) -> DocumentResult<&Filespec> {
        match self.objects.get(&reference) {
            Some(DocumentObject::Filespec(spec)) => Ok(spec),
            Some(_) => Err(DocumentError::UnexpectedObject {
                reference,
                expected: ObjectKind::Filespec,
            }),
            None => Err(DocumentError::ObjectNotFound(reference)),
        }
    }

    /// Fetch an embedded-file stream by reference.
    pub fn embedded_file(&self, reference: ObjectRef) -> DocumentResult<&EmbeddedFileStream> {
        match self.objects.get(&reference) {
            Some(DocumentObject::EmbeddedFile(stream)) => Ok(stream),
            Some(_) => Err(DocumentError::UnexpectedObject {
                reference,
                expected: ObjectKind::EmbeddedFile,
            }),
            None => Err(DocumentError::ObjectNotFound(reference)),
        }
    }

    /// Read back the decoded payload of an embedded file.
    pub fn read_embedded_file(&self, reference: ObjectRef) -> DocumentResult<Vec<u8>> {
        self.embedded_file(reference)?.decode()
    }

    fn count_kind(&self, kind: ObjectKind) -> usize {
        self.objects.values().filter(|o| o.kind() == kind).count()
    }

    fn allocate(&mut self, object: DocumentObject) -> ObjectRef {
        let reference = ObjectRef::new(self.next_number, 0);
        self.next_number += 1;
        self.objects.insert(reference, object);
        reference
    }
}

impl Default for InMemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDocument for InMemoryDocument {
    fn allocate_embedded_file(&mut self, file: &EmbeddedFile) -> DocumentResult<ObjectRef> {
        let stream = EmbeddedFileStream::encode(file, &self.config)?;
        let encoded_len = stream.encoded.len();
        let reference = self.allocate(DocumentObject::EmbeddedFile(stream));
        debug!(
            object = %reference,
            fingerprint = %file.fingerprint().short_hex(),
            size = file.size(),
            encoded_len,
            "embedded file written"
        );
        Ok(reference)
    }

    fn compression_enabled(&self) -> bool {
        self.config.compress_streams
    }

    fn publish_filespec(&mut self, spec: &Filespec) -> DocumentResult<ObjectRef> {
        if !self.objects.contains_key(&spec.embedded_file) {
            return Err(DocumentError::ObjectNotFound(spec.embedded_file));
        }
        let reference = self.allocate(DocumentObject::Filespec(spec.clone()));
        debug!(object = %reference, name = %spec.file_name, hidden = spec.hidden, "filespec written");
        Ok(reference)
    }

    fn register_visible_attachment(
        &mut self,
        name: &str,
        filespec: ObjectRef,
    ) -> DocumentResult<CatalogEntry> {
        self.filespec(filespec)?;
        let entry = CatalogEntry::new(name, filespec);
        self.catalog.insert(entry.clone());
        Ok(entry)
    }
}

impl std::fmt::Debug for InMemoryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDocument")
            .field("object_count", &self.objects.len())
            .field("catalog_len", &self.catalog.len())
            .finish()
    }
}
