use docattach_types::ObjectRef;
use serde::{Deserialize, Serialize};

/// A single visible attachment listed in the document catalog.
///
/// This is the handle returned to callers for non-hidden attachments.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Name under which the attachment is listed.
    pub name: String,
    /// The filespec dictionary the entry points at.
    pub filespec: ObjectRef,
}

impl CatalogEntry {
    /// Create a new catalog entry.
    pub fn new(name: impl Into<String>, filespec: ObjectRef) -> Self {
        Self {
            name: name.into(),
            filespec,
        }
    }
}

/// Name tree of visible attachments (the catalog's `EmbeddedFiles` tree).
///
/// Entries are kept sorted by name, as name trees require. Attaching two
/// files under the same name keeps both entries in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentCatalog {
    entries: Vec<CatalogEntry>,
}

impl AttachmentCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keeping the tree sorted by name.
    pub fn insert(&mut self, entry: CatalogEntry) {
        let at = self
            .entries
            .partition_point(|existing| existing.name <= entry.name);
        self.entries.insert(at, entry);
    }

    /// Look up the first entry with the given name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries in name order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Names in tree order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no attachment is visible.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_sorted_by_name() {
        let mut catalog = AttachmentCatalog::new();
        catalog.insert(CatalogEntry::new("zebra.txt", ObjectRef::new(1, 0)));
        catalog.insert(CatalogEntry::new("alpha.txt", ObjectRef::new(2, 0)));
        catalog.insert(CatalogEntry::new("middle.csv", ObjectRef::new(3, 0)));
        assert_eq!(catalog.names(), vec!["alpha.txt", "middle.csv", "zebra.txt"]);
    }

    #[test]
    fn duplicate_names_keep_insertion_order() {
        let mut catalog = AttachmentCatalog::new();
        catalog.insert(CatalogEntry::new("data.json", ObjectRef::new(4, 0)));
        catalog.insert(CatalogEntry::new("data.json", ObjectRef::new(9, 0)));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].filespec, ObjectRef::new(4, 0));
        assert_eq!(catalog.entries()[1].filespec, ObjectRef::new(9, 0));
        assert_eq!(catalog.get("data.json").unwrap().filespec, ObjectRef::new(4, 0));
    }

    #[test]
    fn get_missing() {
        let catalog = AttachmentCatalog::new();
        assert!(catalog.get("missing").is_none());
        assert!(catalog.is_empty());
    }
}
