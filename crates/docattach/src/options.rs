use docattach_types::{temporal, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{AttachError, AttachResult};

/// Caller-supplied options for a single attach call.
///
/// Every field set here wins over the value derived from the source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachOptions {
    /// Attachment name. Required for byte and stream sources.
    pub name: Option<String>,
    pub creation_date: Option<Timestamp>,
    pub modification_date: Option<Timestamp>,
    /// Human-readable description written to the filespec.
    pub description: Option<String>,
    /// Keep the attachment out of the visible attachments catalog.
    pub hidden: bool,
}

impl AttachOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().name(name)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn creation_date(mut self, date: Timestamp) -> Self {
        self.creation_date = Some(date);
        self
    }

    pub fn modification_date(mut self, date: Timestamp) -> Self {
        self.modification_date = Some(date);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Values a source supplies when the caller leaves a field unset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SourceDefaults {
    pub name: Option<String>,
    pub creation_date: Timestamp,
    pub modification_date: Timestamp,
}

impl SourceDefaults {
    /// Defaults for sources without metadata: no name, both dates `now`.
    pub fn at(now: Timestamp) -> Self {
        Self {
            name: None,
            creation_date: now,
            modification_date: now,
        }
    }
}

/// Fully resolved options: every field concrete, name non-empty.
///
/// Only produced by source resolution, so the invariants hold for every
/// value a caller can observe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveOptions {
    pub(crate) name: String,
    pub(crate) creation_date: Timestamp,
    pub(crate) modification_date: Timestamp,
    pub(crate) description: Option<String>,
    pub(crate) hidden: bool,
}

impl EffectiveOptions {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn creation_date(&self) -> Timestamp {
        self.creation_date
    }

    pub fn modification_date(&self) -> Timestamp {
        self.modification_date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Merge caller options over source defaults.
    ///
    /// An empty caller name counts as unset. Caller dates are truncated to
    /// whole seconds like every other document date.
    pub(crate) fn merge(options: AttachOptions, defaults: SourceDefaults) -> AttachResult<Self> {
        let name = options
            .name
            .filter(|n| !n.is_empty())
            .or(defaults.name)
            .filter(|n| !n.is_empty())
            .ok_or(AttachError::MissingName)?;

        Ok(Self {
            name,
            creation_date: options
                .creation_date
                .map_or(defaults.creation_date, temporal::truncate),
            modification_date: options
                .modification_date
                .map_or(defaults.modification_date, temporal::truncate),
            description: options.description,
            hidden: options.hidden,
        })
    }
}
