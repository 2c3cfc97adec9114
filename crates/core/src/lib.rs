//! `recordkit-core` — identity & audit conventions for persisted records.
//!
//! This crate contains **pure data shape** (no storage, no I/O). Stamping and
//! key assignment are performed by a store at well-defined moments; nothing
//! here fires implicitly.

pub mod audit;
pub mod clock;
pub mod error;
pub mod id;
pub mod record;

pub use audit::AuditStamps;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, CoreResult};
pub use id::{ExternalId, SurrogateKey};
pub use record::{Audited, Identified, SequencedRecord, SurrogateKeyed, UuidRecord};
