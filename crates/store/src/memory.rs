//! In-memory record stores.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use recordkit_core::{
    AuditStamps, Clock, ExternalId, SequencedRecord, SurrogateKey, SystemClock, UuidRecord,
};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::record_store::RecordStore;

/// In-memory store for uuid-primary records ([`UuidRecord`]).
///
/// Records are keyed by their `external_id` alone; there is no surrogate
/// ledger. The injected clock drives both stamping moments.
#[derive(Debug)]
pub struct InMemoryStore<R, C = SystemClock> {
    records: RwLock<HashMap<ExternalId, R>>,
    clock: C,
}

impl<R> InMemoryStore<R> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<R> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, C> InMemoryStore<R, C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            clock,
        }
    }
}

impl<R, C> RecordStore<R> for InMemoryStore<R, C>
where
    R: UuidRecord + Clone + Send + Sync + 'static,
    C: Clock,
{
    fn insert(&self, mut record: R) -> StoreResult<R> {
        let id = record.external_id();

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::conflict("lock poisoned"))?;

        if records.contains_key(&id) {
            warn!(%id, "insert rejected: duplicate external id");
            return Err(StoreError::DuplicateExternalId(id));
        }

        // First durable write: construction-time stamps are overwritten here.
        *record.audit_mut() = AuditStamps::stamp(self.clock.now());
        records.insert(id, record.clone());
        debug!(%id, "record inserted");

        Ok(record)
    }

    fn update(&self, mut record: R) -> StoreResult<R> {
        let id = record.external_id();

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::conflict("lock poisoned"))?;

        // Stamps come from the stored copy, so a stale caller-side record
        // cannot rewind created_at or updated_at.
        let mut stamps = *records.get(&id).ok_or(StoreError::NotFound)?.audit();
        stamps.touch(self.clock.now());
        *record.audit_mut() = stamps;

        records.insert(id, record.clone());
        debug!(%id, "record updated");

        Ok(record)
    }

    fn get(&self, id: ExternalId) -> Option<R> {
        let records = self.records.read().ok()?;
        records.get(&id).cloned()
    }

    fn remove(&self, id: ExternalId) -> StoreResult<R> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::conflict("lock poisoned"))?;

        let record = records.remove(&id).ok_or(StoreError::NotFound)?;
        debug!(%id, "record removed");

        Ok(record)
    }

    fn list(&self) -> Vec<R> {
        match self.records.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => vec![],
        }
    }
}

#[derive(Debug)]
struct SequencedState<R> {
    records: HashMap<ExternalId, R>,
    by_key: HashMap<SurrogateKey, ExternalId>,
    next_key: i64,
}

/// In-memory store for surrogate-primary records ([`SequencedRecord`]).
///
/// `insert` binds the next sequential [`SurrogateKey`] (strictly increasing,
/// starting at 1) and maintains a secondary index so records resolve by
/// either key.
#[derive(Debug)]
pub struct InMemorySequencedStore<R, C = SystemClock> {
    inner: RwLock<SequencedState<R>>,
    clock: C,
}

impl<R> InMemorySequencedStore<R> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<R> Default for InMemorySequencedStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, C> InMemorySequencedStore<R, C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            inner: RwLock::new(SequencedState {
                records: HashMap::new(),
                by_key: HashMap::new(),
                next_key: 1,
            }),
            clock,
        }
    }
}

impl<R, C> InMemorySequencedStore<R, C>
where
    R: SequencedRecord + Clone + Send + Sync + 'static,
    C: Clock,
{
    /// Lookup by storage-assigned surrogate key.
    pub fn get_by_key(&self, key: SurrogateKey) -> Option<R> {
        let state = self.inner.read().ok()?;
        let id = state.by_key.get(&key)?;
        state.records.get(id).cloned()
    }
}

impl<R, C> RecordStore<R> for InMemorySequencedStore<R, C>
where
    R: SequencedRecord + Clone + Send + Sync + 'static,
    C: Clock,
{
    fn insert(&self, mut record: R) -> StoreResult<R> {
        let id = record.external_id();

        // The key slot belongs to this store; a pre-bound key means the
        // record went through some other ledger.
        if let Some(key) = record.surrogate_key() {
            return Err(StoreError::conflict(format!(
                "surrogate key {key} already bound before first insert"
            )));
        }

        let mut state = self
            .inner
            .write()
            .map_err(|_| StoreError::conflict("lock poisoned"))?;

        if state.records.contains_key(&id) {
            warn!(%id, "insert rejected: duplicate external id");
            return Err(StoreError::DuplicateExternalId(id));
        }

        let key = SurrogateKey::from_raw(state.next_key);
        state.next_key += 1;

        record.bind_surrogate_key(key);
        *record.audit_mut() = AuditStamps::stamp(self.clock.now());

        state.by_key.insert(key, id);
        state.records.insert(id, record.clone());
        debug!(%id, %key, "record inserted");

        Ok(record)
    }

    fn update(&self, mut record: R) -> StoreResult<R> {
        let id = record.external_id();

        let mut state = self
            .inner
            .write()
            .map_err(|_| StoreError::conflict("lock poisoned"))?;

        let (stored_key, mut stamps) = {
            let stored = state.records.get(&id).ok_or(StoreError::NotFound)?;
            (stored.surrogate_key(), *stored.audit())
        };

        // The binding is permanent; an update carrying a different key is a
        // ledger inconsistency, not a rebind request.
        if record.surrogate_key() != stored_key {
            return Err(StoreError::conflict("surrogate key mismatch on update"));
        }

        stamps.touch(self.clock.now());
        *record.audit_mut() = stamps;

        state.records.insert(id, record.clone());
        debug!(%id, "record updated");

        Ok(record)
    }

    fn get(&self, id: ExternalId) -> Option<R> {
        let state = self.inner.read().ok()?;
        state.records.get(&id).cloned()
    }

    fn remove(&self, id: ExternalId) -> StoreResult<R> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| StoreError::conflict("lock poisoned"))?;

        let record = state.records.remove(&id).ok_or(StoreError::NotFound)?;
        if let Some(key) = record.surrogate_key() {
            state.by_key.remove(&key);
        }
        debug!(%id, "record removed");

        Ok(record)
    }

    fn list(&self) -> Vec<R> {
        match self.inner.read() {
            Ok(state) => state.records.values().cloned().collect(),
            Err(_) => vec![],
        }
    }
}
