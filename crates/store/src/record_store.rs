//! CRUD surface of the storage collaborator.

use std::sync::Arc;

use recordkit_core::ExternalId;

use crate::error::StoreResult;

/// CRUD store for records composing the identity/audit conventions.
///
/// ## Stamping moments
///
/// Implementations own the two timestamp assignments:
///
/// - `insert` is the record's **first durable write**: both audit stamps are
///   set to the store clock's current time, overwriting whatever the record
///   carried from construction.
/// - `update` refreshes `updated_at` against the **stored** copy's stamps
///   (so a stale in-memory record cannot rewind them) and preserves
///   `created_at`.
///
/// ## Identifier semantics
///
/// `external_id` uniqueness is enforced on insert; a violation is fatal to
/// the operation and surfaced unchanged. The identifier also addresses
/// records on update/remove, so "editing" it simply makes the record
/// unaddressable rather than rebinding the stored one.
pub trait RecordStore<R>: Send + Sync {
    /// First durable write of `record`. Returns the stamped record.
    fn insert(&self, record: R) -> StoreResult<R>;

    /// Persist a new state of an existing record. Returns the stamped record.
    fn update(&self, record: R) -> StoreResult<R>;

    /// Indexed lookup by public identifier.
    fn get(&self, id: ExternalId) -> Option<R>;

    /// Remove a record, returning its last stored state.
    fn remove(&self, id: ExternalId) -> StoreResult<R>;

    /// All records, in no particular order.
    fn list(&self) -> Vec<R>;
}

impl<R, S> RecordStore<R> for Arc<S>
where
    S: RecordStore<R> + ?Sized,
{
    fn insert(&self, record: R) -> StoreResult<R> {
        (**self).insert(record)
    }

    fn update(&self, record: R) -> StoreResult<R> {
        (**self).update(record)
    }

    fn get(&self, id: ExternalId) -> Option<R> {
        (**self).get(id)
    }

    fn remove(&self, id: ExternalId) -> StoreResult<R> {
        (**self).remove(id)
    }

    fn list(&self) -> Vec<R> {
        (**self).list()
    }
}
