//! Identifier newtypes for persisted records.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Public identifier of a persisted record.
///
/// Randomly generated (UUIDv4), unique across the whole collection, and safe
/// to expose outside the storage system. Immutable once assigned: there is no
/// setter, and stores never regenerate it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalId(Uuid);

impl ExternalId {
    /// Generate a fresh random identifier.
    ///
    /// Prefer passing IDs explicitly in tests for determinism.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for ExternalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ExternalId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ExternalId> for Uuid {
    fn from(value: ExternalId) -> Self {
        value.0
    }
}

impl FromStr for ExternalId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| CoreError::invalid_id(format!("ExternalId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Storage-assigned sequential handle for a record.
///
/// Unique within one collection and meaningless outside it. The slot is empty
/// until a store binds it on first insert; ordering follows assignment order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurrogateKey(i64);

impl SurrogateKey {
    /// Wrap a raw key value. Only stores should mint new keys.
    pub fn from_raw(key: i64) -> Self {
        Self(key)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for SurrogateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SurrogateKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = i64::from_str(s)
            .map_err(|e| CoreError::invalid_id(format!("SurrogateKey: {e}")))?;
        Ok(Self(key))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn external_id_is_random_v4_and_non_nil() {
        let id = ExternalId::new();
        assert!(!id.as_uuid().is_nil());
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn freshly_generated_ids_are_distinct() {
        let ids: HashSet<ExternalId> = (0..10_000).map(|_| ExternalId::new()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn external_id_round_trips_through_display() {
        let id = ExternalId::new();
        let parsed: ExternalId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn malformed_external_id_is_rejected() {
        let err = "not-a-uuid".parse::<ExternalId>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidId(_)));
    }

    #[test]
    fn surrogate_keys_order_by_assignment_value() {
        assert!(SurrogateKey::from_raw(1) < SurrogateKey::from_raw(2));
        assert_eq!(SurrogateKey::from_raw(42).as_i64(), 42);
    }

    #[test]
    fn surrogate_key_parses_from_decimal() {
        let key: SurrogateKey = "42".parse().unwrap();
        assert_eq!(key, SurrogateKey::from_raw(42));

        let err = "forty-two".parse::<SurrogateKey>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidId(_)));
    }
}
