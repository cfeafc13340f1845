use docattach_host::{CatalogEntry, HostDocument};
use docattach_types::temporal;
use tracing::{debug, info};

use crate::config::AttachConfig;
use crate::embedded::EmbeddedFileBuilder;
use crate::error::AttachResult;
use crate::filespec::FilespecBuilder;
use crate::options::AttachOptions;
use crate::registry::ContentRegistry;
use crate::source::{self, AttachmentSource};

/// One document-generation session.
///
/// Owns the host document and the [`ContentRegistry`] that deduplicates
/// payloads for it. Create one per generated document; the registry lives
/// exactly as long as the session.
pub struct Attacher<D: HostDocument> {
    document: D,
    registry: ContentRegistry,
    config: AttachConfig,
}

impl<D: HostDocument> Attacher<D> {
    /// Start a session over `document` with the default configuration.
    pub fn new(document: D) -> Self {
        Self::with_config(document, AttachConfig::default())
    }

    /// Start a session over `document` with the given configuration.
    pub fn with_config(document: D, config: AttachConfig) -> Self {
        Self {
            document,
            registry: ContentRegistry::new(),
            config,
        }
    }

    /// Attach file data to the document.
    ///
    /// The source is resolved, fingerprinted and written as an embedded file
    /// unless the session already holds identical bytes, in which case the
    /// existing object is reused. A new filespec is always written. Visible
    /// attachments are listed in the catalog and their entry is returned;
    /// hidden ones return `None`.
    ///
    /// Resolution failures leave the document untouched. Errors are returned
    /// as raised by the failing stage.
    pub fn attach(
        &mut self,
        source: impl Into<AttachmentSource>,
        options: AttachOptions,
    ) -> AttachResult<Option<CatalogEntry>> {
        let now = temporal::now();
        let resolved = source::resolve(source.into(), options, now, &self.config)?;
        let file = EmbeddedFileBuilder::build(resolved.data, &resolved.options);
        let fingerprint = file.fingerprint();

        let document = &mut self.document;
        let embedded = self
            .registry
            .get_or_build(fingerprint, || document.allocate_embedded_file(&file))?;
        debug!(
            fingerprint = %fingerprint.short_hex(),
            object = %embedded,
            size = file.size(),
            compressed = self.document.compression_enabled(),
            "embedded file resolved"
        );

        let filespec = FilespecBuilder::build(embedded, &resolved.options);
        let filespec_ref = self.document.publish_filespec(&filespec)?;

        if filespec.is_hidden() {
            debug!(name = %filespec.file_name, object = %filespec_ref, "hidden attachment written");
            return Ok(None);
        }

        let entry = self
            .document
            .register_visible_attachment(&filespec.file_name, filespec_ref)?;
        info!(name = %entry.name, filespec = %entry.filespec, "attachment added");
        Ok(Some(entry))
    }

    /// Attach several sources in order, stopping at the first failure.
    ///
    /// Attachments made before the failure stay in the document.
    pub fn attach_all<I, S>(&mut self, items: I) -> AttachResult<Vec<Option<CatalogEntry>>>
    where
        I: IntoIterator<Item = (S, AttachOptions)>,
        S: Into<AttachmentSource>,
    {
        items
            .into_iter()
            .map(|(source, options)| self.attach(source, options))
            .collect()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    pub fn config(&self) -> &AttachConfig {
        &self.config
    }

    /// End the session and hand back the document.
    pub fn into_document(self) -> D {
        self.document
    }
}

impl<D: HostDocument + std::fmt::Debug> std::fmt::Debug for Attacher<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attacher")
            .field("document", &self.document)
            .field("registry_len", &self.registry.len())
            .finish()
    }
}
