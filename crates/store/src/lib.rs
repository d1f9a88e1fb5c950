//! In-memory record storage.
//!
//! [`RecordStore`] is the backing collection for one resource type: an
//! ordered list of records plus the counter used to mint identifiers.
//! Records are never mutated or removed once appended; state lives for
//! the lifetime of the process.

use std::sync::Mutex;

use depot_core::{DomainError, DomainResult, Record, RecordId};

/// Ordered, identifier-indexed collection of records of one resource type.
///
/// Identifiers are assigned sequentially from 1 and carried as decimal
/// strings. Insertion order is the listing order. Each store owns its
/// collection and counter exclusively; nothing is shared across stores.
#[derive(Debug)]
pub struct RecordStore<R> {
    inner: Mutex<Inner<R>>,
}

#[derive(Debug)]
struct Inner<R> {
    records: Vec<R>,
    next_id: u64,
}

impl<R: Record> RecordStore<R> {
    /// Empty collection, counter at 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of all records in insertion order.
    ///
    /// Returns an owned copy, never the live collection.
    pub fn list(&self) -> Vec<R> {
        self.inner.lock().unwrap().records.clone()
    }

    /// Look up a record by exact identifier match.
    ///
    /// The id is compared as a raw string (case-sensitive, untrimmed).
    /// A miss leaves the store fully usable.
    pub fn get(&self, id: &str) -> DomainResult<R> {
        self.inner
            .lock()
            .unwrap()
            .records
            .iter()
            .find(|r| r.id().as_str() == id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    /// Mint the next identifier and append a record built from `draft`.
    ///
    /// The counter increment and the append share one critical section, so
    /// parallel creates cannot mint duplicate ids or reorder the
    /// collection. Fields are copied verbatim from the draft.
    pub fn create(&self, draft: R::Draft) -> R {
        let mut inner = self.inner.lock().unwrap();
        let id = RecordId::from_sequence(inner.next_id);
        inner.next_id += 1;

        let record = R::materialize(id, draft);
        inner.records.push(record.clone());
        tracing::debug!(id = %record.id(), "record appended");
        record
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
