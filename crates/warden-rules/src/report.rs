//! Report types: rule identifiers, reason codes, violations, and verdicts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 10 compliance rule identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    PolicyApplied,
    RpoAlignment,
    RetentionCompliance,
    JobStatus,
    BackupRecency,
    OffsiteReplication,
    VmPlacement,
    DatastoreCapacity,
    PerformanceTier,
    SubscriptionRatio,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PolicyApplied => "policy-applied",
            Self::RpoAlignment => "rpo-alignment",
            Self::RetentionCompliance => "retention-compliance",
            Self::JobStatus => "job-status",
            Self::BackupRecency => "backup-recency",
            Self::OffsiteReplication => "offsite-replication",
            Self::VmPlacement => "vm-placement",
            Self::DatastoreCapacity => "datastore-capacity",
            Self::PerformanceTier => "performance-tier",
            Self::SubscriptionRatio => "subscription-ratio",
        }
    }

    pub fn all() -> &'static [RuleId] {
        &[
            Self::PolicyApplied,
            Self::RpoAlignment,
            Self::RetentionCompliance,
            Self::JobStatus,
            Self::BackupRecency,
            Self::OffsiteReplication,
            Self::VmPlacement,
            Self::DatastoreCapacity,
            Self::PerformanceTier,
            Self::SubscriptionRatio,
        ]
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-readable classification of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonCode {
    NoPolicyData,
    PolicyNotApplied,
    NoPolicyAssigned,
    NoScheduleData,
    RpoExceeded,
    NoRetentionData,
    RetentionBelowMinimum,
    NoJobHistory,
    JobFailed,
    NoBackupTimestamp,
    BackupStale,
    NoReplicationData,
    ReplicationDisabled,
    ReplicationUnhealthy,
    NoPlacementData,
    PlacementViolation,
    TierMismatch,
    NoCapacityData,
    LowFreeCapacity,
    NoSubscriptionData,
    Oversubscribed,
    DataError,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoPolicyData => "no-policy-data",
            Self::PolicyNotApplied => "policy-not-applied",
            Self::NoPolicyAssigned => "no-policy-assigned",
            Self::NoScheduleData => "no-schedule-data",
            Self::RpoExceeded => "rpo-exceeded",
            Self::NoRetentionData => "no-retention-data",
            Self::RetentionBelowMinimum => "retention-below-minimum",
            Self::NoJobHistory => "no-job-history",
            Self::JobFailed => "job-failed",
            Self::NoBackupTimestamp => "no-backup-timestamp",
            Self::BackupStale => "backup-stale",
            Self::NoReplicationData => "no-replication-data",
            Self::ReplicationDisabled => "replication-disabled",
            Self::ReplicationUnhealthy => "replication-unhealthy",
            Self::NoPlacementData => "no-placement-data",
            Self::PlacementViolation => "placement-violation",
            Self::TierMismatch => "tier-mismatch",
            Self::NoCapacityData => "no-capacity-data",
            Self::LowFreeCapacity => "low-free-capacity",
            Self::NoSubscriptionData => "no-subscription-data",
            Self::Oversubscribed => "oversubscribed",
            Self::DataError => "data-error",
        }
    }

    /// Whether this code marks a data-quality failure rather than a
    /// compliance violation.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::DataError)
    }

    /// Whether this code reports an entity absent from the observed set.
    pub fn is_missing_data(&self) -> bool {
        matches!(
            self,
            Self::NoPolicyData
                | Self::NoScheduleData
                | Self::NoRetentionData
                | Self::NoJobHistory
                | Self::NoBackupTimestamp
                | Self::NoReplicationData
                | Self::NoPlacementData
                | Self::NoCapacityData
                | Self::NoSubscriptionData
        )
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observed values attached to a violation for remediation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationDetail {
    Policy {
        policy_name: Option<String>,
        policy_id: Option<String>,
    },
    Schedule {
        criticality: String,
        required_rpo_hours: u32,
        current_rpo_hours: Option<u32>,
    },
    Retention {
        daily: u32,
        weekly: u32,
        monthly: u32,
        min_daily: u32,
        min_weekly: u32,
        min_monthly: u32,
    },
    Job {
        job_id: String,
        status: String,
        end_time: String,
        error_message: String,
    },
    Recency {
        last_backup_time: String,
        age_hours: f64,
        max_age_hours: f64,
    },
    Replication {
        observed_status: Option<String>,
        expected_status: String,
        offsite_target: Option<String>,
    },
    Placement {
        datastore: String,
        app_type: String,
        required_tags: Vec<String>,
    },
    Tier {
        current_tier: String,
        required_tier: String,
        datastore: String,
    },
    Capacity {
        free_percent: f64,
        free_gb: f64,
        total_gb: f64,
        min_free_percent: f64,
    },
    Subscription {
        ratio: f64,
        provisioned_gb: f64,
        max_ratio: f64,
    },
    Data {
        field: String,
        message: String,
    },
}

/// A single violation produced by a rule evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Entity (VM or datastore) name.
    pub entity: String,
    pub code: ReasonCode,
    /// Deterministic human-readable reason.
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ViolationDetail>,
}

impl Violation {
    pub fn new(entity: impl Into<String>, code: ReasonCode, reason: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            code,
            reason: reason.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: ViolationDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Per-entity data-quality failure. Reported alongside compliance
    /// violations so the batch keeps going, distinguishable by code.
    pub fn data_error(
        entity: impl Into<String>,
        field: &str,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        Self {
            entity: entity.into(),
            code: ReasonCode::DataError,
            reason: format!("Data error in {field}: {message}"),
            detail: Some(ViolationDetail::Data {
                field: field.to_string(),
                message,
            }),
        }
    }
}

/// Verdict produced by one rule evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleReport {
    pub rule_id: RuleId,
    /// Cardinality of the rule's target list.
    pub total: usize,
    /// Entities with no violation. Always `total - violations.len()`.
    pub compliant: usize,
    pub violations: Vec<Violation>,
}

impl RuleReport {
    /// Build a report; `compliant` is derived from the target count.
    pub fn new(rule_id: RuleId, total: usize, violations: Vec<Violation>) -> Self {
        let compliant = total.saturating_sub(violations.len());
        Self {
            rule_id,
            total,
            compliant,
            violations,
        }
    }

    /// True when no entity violated the rule.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations classified as data-quality failures.
    pub fn data_errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.code.is_data_error())
    }
}

/// Round a computed value to 2 decimal places for display.
/// Comparisons always run on the unrounded value.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
