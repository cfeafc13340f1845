use docattach_types::{Filespec, ObjectRef};

use crate::options::EffectiveOptions;

/// Builds [`Filespec`] records pointing at embedded files.
pub struct FilespecBuilder;

impl FilespecBuilder {
    /// Describe `embedded_file` under the effective name.
    ///
    /// Catalog registration is left to the caller; see
    /// [`Filespec::is_hidden`].
    pub fn build(embedded_file: ObjectRef, options: &EffectiveOptions) -> Filespec {
        Filespec {
            file_name: options.name.clone(),
            hidden: options.hidden,
            description: options.description.clone(),
            embedded_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn options(hidden: bool) -> EffectiveOptions {
        let now = Utc::now();
        EffectiveOptions {
            name: "report.pdf".into(),
            creation_date: now,
            modification_date: now,
            description: Some("annual report".into()),
            hidden,
        }
    }

    #[test]
    fn build_copies_name_and_description() {
        let spec = FilespecBuilder::build(ObjectRef::new(7, 0), &options(false));
        assert_eq!(spec.file_name, "report.pdf");
        assert_eq!(spec.description.as_deref(), Some("annual report"));
        assert_eq!(spec.embedded_file, ObjectRef::new(7, 0));
        assert!(!spec.is_hidden());
    }

    #[test]
    fn build_keeps_hidden_flag() {
        let spec = FilespecBuilder::build(ObjectRef::new(1, 0), &options(true));
        assert!(spec.is_hidden());
    }
}
