//! Observed-record schemas, one per collection axis.
//!
//! Upstream collectors produce one record per entity per axis. Records for
//! different axes are never merged; each rule consumes only the axes it
//! needs. Fields every rule requires are concrete; fields collectors may
//! omit are `Option`.

use serde::{Deserialize, Serialize};

/// Backup policy assignment for one VM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub vm: String,
    pub policy_applied: bool,
    #[serde(default)]
    pub policy_name: Option<String>,
    #[serde(default)]
    pub policy_id: Option<String>,
}

/// Backup schedule for one VM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub vm: String,
    /// Effective backup interval in hours.
    pub rpo_hours: u32,
    #[serde(default)]
    pub frequency: Option<String>,
}

/// Criticality classification for one VM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmCriticality {
    pub vm: String,
    pub level: String,
}

/// Retention settings for one VM, in restore points per window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionRecord {
    pub vm: String,
    pub daily: u32,
    pub weekly: u32,
    pub monthly: u32,
}

/// One historical backup job run. Multiple records may exist per VM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub vm: String,
    pub job_id: String,
    pub status: String,
    /// Completion time, wall-clock `%Y-%m-%d %H:%M:%S`.
    pub end_time: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Latest successful backup timestamp for one VM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupTimestampRecord {
    pub vm: String,
    /// Wall-clock `%Y-%m-%d %H:%M:%S`.
    pub last_backup_time: String,
}

/// Offsite replication state for one VM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationRecord {
    pub vm: String,
    pub offsite_enabled: bool,
    #[serde(default)]
    pub replication_status: Option<String>,
    #[serde(default)]
    pub offsite_target: Option<String>,
}

/// Datastore assignment for one VM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmPlacementRecord {
    pub vm: String,
    pub datastore: String,
    #[serde(default)]
    pub app_type: Option<String>,
}

/// Capacity figures for one datastore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatastoreCapacityRecord {
    pub name: String,
    pub free_gb: f64,
    pub total_gb: f64,
}

/// Performance tier label for one datastore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatastoreTierRecord {
    pub name: String,
    pub performance_tier: String,
}

/// Subscription figures for one datastore. The ratio arrives precomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub name: String,
    pub subscription_ratio: f64,
    pub provisioned_gb: f64,
}
