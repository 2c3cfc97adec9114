//! Record conventions: identity + audit field groups, explicitly composed.
//!
//! A concrete record type lists the field groups it carries by implementing
//! the matching traits, then opts into exactly one of the two combined
//! conventions ([`UuidRecord`] or [`SequencedRecord`]). There is no
//! inheritance chain to untangle; composition is spelled out at the type.

use crate::audit::AuditStamps;
use crate::id::{ExternalId, SurrogateKey};

/// A record with a stable public identifier.
pub trait Identified {
    /// Returns the record's public identifier.
    ///
    /// Generated before first persistence, never regenerated. Read-only:
    /// normal mutation paths cannot change it.
    fn external_id(&self) -> ExternalId;
}

/// A record that additionally carries a storage-assigned surrogate key.
pub trait SurrogateKeyed: Identified {
    /// The key slot. `None` until the store binds it on first insert.
    fn surrogate_key(&self) -> Option<SurrogateKey>;

    /// Bind the storage-assigned key.
    ///
    /// Called exactly once, by the store, during the record's first insert.
    fn bind_surrogate_key(&mut self, key: SurrogateKey);
}

/// A record carrying audit timestamps.
///
/// The store writes through `audit_mut` at the two stamping moments; record
/// code itself only reads.
pub trait Audited {
    fn audit(&self) -> &AuditStamps;

    fn audit_mut(&mut self) -> &mut AuditStamps;
}

/// Combined convention: the external id is the record's sole primary key.
///
/// Opt-in marker. A record type implements exactly one of [`UuidRecord`] and
/// [`SequencedRecord`]; the two key strategies never coexist on one type.
pub trait UuidRecord: Identified + Audited {}

/// Combined convention: surrogate key primary, external id secondary.
///
/// Opt-in marker, mutually exclusive with [`UuidRecord`].
pub trait SequencedRecord: SurrogateKeyed + Audited {}
