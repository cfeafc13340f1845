//! Host document boundary for docattach.
//!
//! The attachment pipeline never writes document structures itself. It asks
//! a [`HostDocument`] to allocate object references, write (and possibly
//! compress) embedded-file streams, publish filespec dictionaries, and list
//! visible attachments in the document catalog.
//!
//! # Hosts
//!
//! - [`InMemoryDocument`] -- reference host that keeps every object in memory
//!   and renders dictionaries in PDF syntax. Used by tests and embedders that
//!   assemble the final file themselves.
//!
//! # Rules
//!
//! 1. Object numbers are allocated sequentially and never reused.
//! 2. Stream payloads are immutable once written.
//! 3. Only non-hidden filespecs appear in the [`AttachmentCatalog`].
//! 4. All compression errors are propagated, never silently ignored.

pub mod catalog;
pub mod config;
pub mod error;
pub mod memory;
pub mod object;
pub mod pdf;
pub mod traits;

pub use catalog::{AttachmentCatalog, CatalogEntry};
pub use config::DocumentConfig;
pub use error::{DocumentError, DocumentResult};
pub use memory::InMemoryDocument;
pub use object::{DocumentObject, EmbeddedFileStream, ObjectKind, StreamFilter};
pub use traits::HostDocument;
