//! Threshold configuration for the compliance rules.
//!
//! Every recognized threshold is named explicitly; nothing is inferred from
//! the observed data. Each section validates itself before evaluation.

pub mod audit_config;
pub mod backup_config;
pub mod datastore_config;

pub use audit_config::AuditConfig;
pub use backup_config::{
    JobStatusConfig, RecencyConfig, ReplicationConfig, RetentionThresholds, RpoRequirements,
};
pub use datastore_config::{CapacityConfig, PlacementPolicy, SubscriptionConfig, TierPolicy};
