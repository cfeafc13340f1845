use bytes::Bytes;
use docattach_types::EmbeddedFile;

use crate::options::EffectiveOptions;

/// Builds [`EmbeddedFile`] records from resolved content.
pub struct EmbeddedFileBuilder;

impl EmbeddedFileBuilder {
    /// Fingerprint `data` and attach the effective dates.
    ///
    /// Dates are already concrete in `options`, so the result depends only on
    /// the inputs.
    pub fn build(data: Bytes, options: &EffectiveOptions) -> EmbeddedFile {
        EmbeddedFile::new(data, options.creation_date, options.modification_date)
    }
}
