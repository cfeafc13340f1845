//! Attach file data to a document as embedded files.
//!
//! An [`Attacher`] wraps one document-generation session. Each call to
//! [`Attacher::attach`] takes a path, a byte buffer or a reader, turns it into
//! an embedded-file object plus a filespec naming it, and lists the filespec
//! in the document's attachments catalog unless it is hidden. Identical
//! payloads attached under different names are written once per session.
//!
//! # Pipeline
//!
//! 1. [`source::resolve`] -- read the source, apply option precedence
//!    (caller value > source-derived value > the call's single "now").
//! 2. [`EmbeddedFileBuilder`] -- fingerprint the bytes.
//! 3. [`ContentRegistry`] -- reuse or allocate the embedded-file object.
//! 4. [`FilespecBuilder`] -- describe the attachment.
//! 5. Publish the filespec and, when visible, register it in the catalog.
//!
//! ```rust,ignore
//! use docattach::{AttachOptions, Attacher};
//! use docattach_host::InMemoryDocument;
//!
//! let mut attacher = Attacher::new(InMemoryDocument::new());
//! attacher.attach(std::path::Path::new("./data.json"), AttachOptions::new())?;
//! attacher.attach(&b"{}"[..], AttachOptions::named("empty.json").hidden(true))?;
//! let document = attacher.into_document();
//! ```

pub mod config;
pub mod embedded;
pub mod error;
pub mod filespec;
pub mod options;
pub mod registry;
pub mod session;
pub mod source;

pub use config::AttachConfig;
pub use embedded::EmbeddedFileBuilder;
pub use error::{AttachError, AttachResult};
pub use filespec::FilespecBuilder;
pub use options::{AttachOptions, EffectiveOptions};
pub use registry::ContentRegistry;
pub use session::Attacher;
pub use source::{AttachmentSource, ResolvedSource};

// Re-export key types
pub use docattach_host::{CatalogEntry, HostDocument};
pub use docattach_types::{EmbeddedFile, Filespec, Fingerprint, ObjectRef};
