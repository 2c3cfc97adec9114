//! Audit timestamps: creation/modification tracking for persisted records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation/modification timestamp pair.
///
/// A composable field group: record types embed it and expose it through
/// [`crate::record::Audited`]. The storage layer owns the two stamping
/// moments (first insert, each update) and calls [`AuditStamps::stamp`] /
/// [`AuditStamps::touch`] explicitly at those points.
///
/// Invariant: `created_at <= updated_at` at every observation point. Both
/// constructors below preserve it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStamps {
    /// Set once, at the record's first durable write. Never changed afterward.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update. Never decreases.
    pub updated_at: DateTime<Utc>,
}

impl AuditStamps {
    /// Stamp a record at its first durable write: both fields set to `now`.
    pub fn stamp(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at` for a successful update.
    ///
    /// Clamped so `updated_at` never moves backwards when the wall clock
    /// does. `created_at` is left untouched.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now);
    }
}
