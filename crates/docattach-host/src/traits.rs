use docattach_types::{EmbeddedFile, Filespec, ObjectRef};

use crate::catalog::CatalogEntry;
use crate::error::DocumentResult;

/// The document being generated, as seen by the attachment pipeline.
///
/// Implementations own object-reference allocation, stream writing and
/// compression, and the catalog of visible attachments. All methods take
/// `&mut self`: a host is driven by one generation session at a time.
pub trait HostDocument {
    /// Allocate an embedded-file stream object for `file` and return its
    /// reference.
    ///
    /// The host writes the payload together with its size, creation and
    /// modification dates and checksum, and compresses the stream when
    /// [`compression_enabled`](Self::compression_enabled) is `true`.
    fn allocate_embedded_file(&mut self, file: &EmbeddedFile) -> DocumentResult<ObjectRef>;

    /// Whether stream payloads are compressed when written.
    fn compression_enabled(&self) -> bool;

    /// Write a filespec dictionary and return its reference.
    fn publish_filespec(&mut self, spec: &Filespec) -> DocumentResult<ObjectRef>;

    /// List a filespec in the document's visible attachments under `name`.
    ///
    /// Only called for filespecs that are not hidden.
    fn register_visible_attachment(
        &mut self,
        name: &str,
        filespec: ObjectRef,
    ) -> DocumentResult<CatalogEntry>;
}

impl<T: HostDocument + ?Sized> HostDocument for &mut T {
    fn allocate_embedded_file(&mut self, file: &EmbeddedFile) -> DocumentResult<ObjectRef> {
        (**self).allocate_embedded_file(file)
    }

    fn compression_enabled(&self) -> bool {
        (**self).compression_enabled()
    }

    fn publish_filespec(&mut self, spec: &Filespec) -> DocumentResult<ObjectRef> {
        (**self).publish_filespec(spec)
    }

    fn register_visible_attachment(
        &mut self,
        name: &str,
        filespec: ObjectRef,
    ) -> DocumentResult<CatalogEntry> {
        (**self).register_visible_attachment(name, filespec)
    }
}
