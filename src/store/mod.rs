//! In-memory profile store.
//!
//! [`ProfileStore`] is the single source of truth for rendering and filtering.
//! It is filled exactly once per plugin load with the fetched batch, in
//! response order, and is read-only afterwards. A record's position in the
//! store (its *store index*) is its identity everywhere in the UI: cards,
//! click resolution and the detail modal all refer to records by index.

use crate::domain::error::{DirectoryError, Result};
use crate::domain::ProfileRecord;

/// Ordered, load-once collection of fetched profiles.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    records: Vec<ProfileRecord>,
    loaded: bool,
}

impl ProfileStore {
    /// Creates an empty, not yet loaded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the store with the fetched batch.
    ///
    /// Indices are assigned in the order of `records`. The store accepts a
    /// single load; later calls are ignored and return `false` so the indices
    /// handed out to the UI stay valid.
    pub fn load(&mut self, records: Vec<ProfileRecord>) -> bool {
        if self.loaded {
            tracing::warn!(
                existing = self.records.len(),
                rejected = records.len(),
                "profile store already loaded, ignoring second batch"
            );
            return false;
        }

        tracing::debug!(profile_count = records.len(), "profile store loaded");
        self.records = records;
        self.loaded = true;
        true
    }

    /// Returns the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::OutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&ProfileRecord> {
        self.records.get(index).ok_or(DirectoryError::OutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Iterates over `(store index, record)` pairs in store order.
    pub fn all(&self) -> impl Iterator<Item = (usize, &ProfileRecord)> + '_ {
        self.records.iter().enumerate()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the batch has been loaded (possibly with zero records).
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }
}
