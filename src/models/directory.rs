//! Organization directory records and lookup index.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// One entry in the organization directory.
///
/// Deserialized from newline-delimited JSON; everything beyond the identity
/// fields is optional because directory exports are frequently incomplete.
/// Records are read-only after load and shared via [`Arc`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryRecord {
    /// Unique person identifier.
    pub id: String,
    /// Primary email address, as stored in the source.
    pub email: String,
    /// Job title.
    #[serde(default)]
    pub title: Option<String>,
    /// Office code (resolved to a name via the office table).
    #[serde(default)]
    pub office_code: Option<String>,
    /// Employment start date.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Identifier of this person's manager, forming a tree.
    #[serde(default)]
    pub manager_id: Option<String>,
}

/// Lookup structures over directory records.
///
/// Provides identifier and email lookups plus manager-chain resolution.
/// Email keys are normalized to lowercase at build time to tolerate case
/// variance in source data; duplicate keys follow last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct DirectoryIndex {
    by_id: HashMap<String, Arc<DirectoryRecord>>,
    by_email: HashMap<String, Arc<DirectoryRecord>>,
}

impl DirectoryIndex {
    /// Builds an index from a sequence of records.
    #[must_use]
    pub fn build(records: impl IntoIterator<Item = DirectoryRecord>) -> Self {
        let mut index = Self::default();
        for record in records {
            let record = Arc::new(record);
            index
                .by_email
                .insert(record.email.to_lowercase(), Arc::clone(&record));
            index.by_id.insert(record.id.clone(), record);
        }
        index
    }

    /// Looks up a record by person identifier.
    #[must_use]
    pub fn lookup_by_id(&self, id: &str) -> Option<&Arc<DirectoryRecord>> {
        self.by_id.get(id)
    }

    /// Looks up a record by email, case-insensitively.
    #[must_use]
    pub fn lookup_by_email(&self, email: &str) -> Option<&Arc<DirectoryRecord>> {
        self.by_email.get(&email.to_lowercase())
    }

    /// Resolves the chain of managers above a record, immediate manager
    /// first.
    ///
    /// Walks `manager_id` references until the field is absent or a lookup
    /// fails; a dangling reference ends the walk rather than erroring, so
    /// the chain terminates even when the directory is malformed.
    #[must_use]
    pub fn manager_chain(&self, record: &DirectoryRecord) -> Vec<Arc<DirectoryRecord>> {
        let mut chain = Vec::new();
        let mut manager_id = record.manager_id.clone();
        while let Some(id) = manager_id {
            let Some(manager) = self.lookup_by_id(&id) else {
                break;
            };
            chain.push(Arc::clone(manager));
            manager_id = manager.manager_id.clone();
        }
        chain
    }

    /// Returns the number of indexed identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns `true` if the index holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
