//! Foundation types for docattach.
//!
//! This crate provides the identifiers and records shared by the host
//! document boundary and the attachment pipeline. Every other docattach
//! crate depends on `docattach-types`.
//!
//! # Key Types
//!
//! - [`Fingerprint`]: 128-bit content digest used as the deduplication key
//! - [`ObjectRef`]: Reference to an indirect object inside the host document
//! - [`EmbeddedFile`]: Payload bytes plus size, timestamps and checksum
//! - [`Filespec`]: Named, optionally hidden pointer at an embedded file

pub mod error;
pub mod fingerprint;
pub mod object;
pub mod record;
pub mod temporal;

pub use error::TypeError;
pub use fingerprint::Fingerprint;
pub use object::ObjectRef;
pub use record::{EmbeddedFile, Filespec};
pub use temporal::Timestamp;
