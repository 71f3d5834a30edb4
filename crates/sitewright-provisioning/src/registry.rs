//! Run-scoped registry of provisioned lists.

use sitewright_client::types::ListInfo;

/// Record of the lists ensured during one provisioning run.
///
/// The ensure phase appends each list's remote identity as it completes;
/// token resolution reads the registry when preparing field definitions.
/// The registry lives for one list-group run and is never persisted, so a
/// field definition can only reference lists processed earlier in the
/// same run.
#[derive(Debug, Default)]
pub struct ProvisionedListRegistry {
    lists: Vec<ListInfo>,
}

impl ProvisionedListRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// Record a list's remote identity.
    pub fn record(&mut self, list: ListInfo) {
        self.lists.push(list);
    }

    /// Resolve a title to a recorded list, only when exactly one entry
    /// matches.
    pub fn resolve_unique(&self, title: &str) -> Option<&ListInfo> {
        let mut matches = self.lists.iter().filter(|l| l.title == title);
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// Number of recorded lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether no list has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
