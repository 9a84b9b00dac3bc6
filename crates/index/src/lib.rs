//! # Docsim Index
//!
//! [`AnalysisIndex`] is the single source of truth for every document the
//! process has analyzed. It maps a fingerprint to its [`AnalysisRecord`].
//!
//! ## Concurrency
//!
//! The map sits behind one `RwLock`:
//!
//! - [`AnalysisIndex::put`] takes the write lock, so no reader ever sees a
//!   half-written record.
//! - [`AnalysisIndex::get`], [`AnalysisIndex::all_except`] and
//!   [`AnalysisIndex::scan_except`] share the read lock with each other and
//!   wait for any in-flight insert.
//! - `scan_except` holds the read lock for the whole scan, so one comparison
//!   sees one consistent view of the index.
//!
//! Once `put` returns, every later read on any thread observes the record.
//!
//! ## Lifecycle
//!
//! Empty at construction, grows monotonically, lives as long as its owner.
//! There is no delete path and no persistence. Share it with `Arc`; separate
//! instances are fully independent, which keeps tests isolated.
//!
//! ## Example Usage
//!
//! ```
//! use analysis::AnalysisRecord;
//! use index::AnalysisIndex;
//!
//! let index = AnalysisIndex::new();
//! let a = AnalysisRecord::from_text("alpha beta");
//! let b = AnalysisRecord::from_text("gamma delta");
//! index.put(a.clone());
//! index.put(b.clone());
//!
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.get(&a.fingerprint).unwrap().word_count, 2);
//!
//! let others = index.all_except(&a.fingerprint);
//! assert_eq!(others.len(), 1);
//! assert_eq!(others[0].0, b.fingerprint);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use analysis::AnalysisRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shared, concurrently accessible store of analysis records.
#[derive(Debug, Default)]
pub struct AnalysisIndex {
    records: RwLock<HashMap<String, Arc<AnalysisRecord>>>,
}

/// Aggregate counters over the whole index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub records: usize,
    pub total_words: usize,
    pub total_unique_words: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("fingerprint not found: {0}")]
    NotFound(String),
}

impl AnalysisIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the map for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    // Records are swapped in whole, so a lock poisoned by a panicking
    // visitor still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<AnalysisRecord>>> {
        self.records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<AnalysisRecord>>> {
        self.records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Insert or overwrite the record stored under its fingerprint.
    ///
    /// Returns the record it replaced, if any. Never fails.
    pub fn put(&self, record: AnalysisRecord) -> Option<Arc<AnalysisRecord>> {
        let key = record.fingerprint.clone();
        let record = Arc::new(record);
        // The write lock is held only for the map insert.
        let previous = self.write().insert(key, record);
        if let Some(prev) = &previous {
            log::debug!("replaced analysis record {}", prev.fingerprint);
        }
        previous
    }

    /// Exact-key lookup.
    pub fn get(&self, fingerprint: &str) -> Result<Arc<AnalysisRecord>, IndexError> {
        self.read()
            .get(fingerprint)
            .cloned()
            .ok_or_else(|| IndexError::NotFound(fingerprint.to_string()))
    }

    pub fn contains(&self, fingerprint: &str) -> bool {
        self.read().contains_key(fingerprint)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Every stored record except the one keyed by `fingerprint`.
    ///
    /// The key does not have to exist. Order is unspecified.
    pub fn all_except(&self, fingerprint: &str) -> Vec<(String, Arc<AnalysisRecord>)> {
        self.read()
            .iter()
            .filter(|(key, _)| key.as_str() != fingerprint)
            .map(|(key, record)| (key.clone(), Arc::clone(record)))
            .collect()
    }

    /// Resolve `fingerprint` and visit every other record, all under one
    /// read guard.
    ///
    /// The visitor receives `(query, other_fingerprint, other)`. Returns the
    /// number of records visited, or [`IndexError::NotFound`] without
    /// visiting anything when the query is absent.
    pub fn scan_except(
        &self,
        fingerprint: &str,
        visitor: &mut dyn FnMut(&AnalysisRecord, &str, &AnalysisRecord),
    ) -> Result<usize, IndexError> {
        // A read lock is held for the duration of the scan.
        let guard = self.read();
        let query = guard
            .get(fingerprint)
            .ok_or_else(|| IndexError::NotFound(fingerprint.to_string()))?;

        let mut visited = 0;
        for (key, record) in guard.iter() {
            if key.as_str() == fingerprint {
                continue;
            }
            visitor(query, key, record);
            visited += 1;
        }
        log::trace!("scanned {visited} records against {fingerprint}");
        Ok(visited)
    }

    pub fn stats(&self) -> IndexStats {
        let guard = self.read();
        guard.values().fold(
            IndexStats {
                records: guard.len(),
                ..IndexStats::default()
            },
            |mut acc, record| {
                acc.total_words += record.word_count;
                acc.total_unique_words += record.unique_word_count;
                acc
            },
        )
    }
}
