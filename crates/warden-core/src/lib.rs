//! warden-core: Foundation types for the Warden compliance engine
//!
//! This crate provides the shared building blocks for Warden:
//! - Types: per-axis observed-record schemas, collection aliases, timestamps
//! - Config: rule thresholds with validation and TOML loading
//! - Errors: structured error enums with stable error codes
//! - Events: audit lifecycle handler trait
//! - Tracing: logging setup
//! - Constants: sentinels, formats, and default thresholds

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use config::{
    AuditConfig, CapacityConfig, JobStatusConfig, PlacementPolicy, RecencyConfig,
    ReplicationConfig, RetentionThresholds, RpoRequirements, SubscriptionConfig, TierPolicy,
};
pub use errors::{ConfigError, RuleError, WardenErrorCode};
pub use events::{
    AuditCompletedEvent, AuditEventHandler, NoopEventHandler, RuleCompletedEvent,
    RuleStartedEvent, ViolationDetectedEvent,
};
pub use types::{
    BackupTimestampRecord, DatastoreCapacityRecord, DatastoreTierRecord, JobRecord,
    PolicyRecord, ReplicationRecord, RetentionRecord, ScheduleRecord, SubscriptionRecord,
    VmCriticality, VmPlacementRecord,
};
pub use crate::tracing::init_tracing;
