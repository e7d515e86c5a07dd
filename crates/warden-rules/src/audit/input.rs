//! Audit input: one immutable snapshot of observed infrastructure state.

use chrono::NaiveDateTime;

use warden_core::types::{
    BackupTimestampRecord, DatastoreCapacityRecord, DatastoreTierRecord, JobRecord,
    PolicyRecord, ReplicationRecord, RetentionRecord, ScheduleRecord, SubscriptionRecord,
    VmCriticality, VmPlacementRecord,
};

/// Input provided to each rule by the audit runner.
///
/// Target lists are authoritative: they define every rule's denominator and
/// drive missing-data violations. Observed collections may cover more or
/// fewer entities than the targets.
#[derive(Debug, Clone, Default)]
pub struct AuditInput {
    /// VM fleet that must comply.
    pub target_vms: Vec<String>,
    /// Datastores that must comply.
    pub target_datastores: Vec<String>,
    /// VMs required to replicate offsite.
    pub replication_required_vms: Vec<String>,
    pub policies: Vec<PolicyRecord>,
    pub schedules: Vec<ScheduleRecord>,
    pub vm_criticality: Vec<VmCriticality>,
    pub retention: Vec<RetentionRecord>,
    pub job_history: Vec<JobRecord>,
    pub backup_timestamps: Vec<BackupTimestampRecord>,
    pub replication: Vec<ReplicationRecord>,
    pub placements: Vec<VmPlacementRecord>,
    pub capacity: Vec<DatastoreCapacityRecord>,
    pub tiers: Vec<DatastoreTierRecord>,
    pub subscriptions: Vec<SubscriptionRecord>,
    /// Evaluation clock for the recency rule. Always injected, never read
    /// from the system clock.
    pub now: Option<NaiveDateTime>,
}

/// Builder for constructing a populated `AuditInput` from upstream
/// collector output.
#[derive(Debug, Default)]
pub struct AuditInputBuilder {
    input: AuditInput,
}

impl AuditInputBuilder {
    pub fn new() -> Self {
        Self {
            input: AuditInput::default(),
        }
    }

    pub fn target_vms(mut self, targets: Vec<String>) -> Self {
        self.input.target_vms = targets;
        self
    }

    pub fn target_datastores(mut self, targets: Vec<String>) -> Self {
        self.input.target_datastores = targets;
        self
    }

    pub fn replication_required_vms(mut self, targets: Vec<String>) -> Self {
        self.input.replication_required_vms = targets;
        self
    }

    pub fn policies(mut self, records: Vec<PolicyRecord>) -> Self {
        self.input.policies = records;
        self
    }

    pub fn schedules(mut self, records: Vec<ScheduleRecord>) -> Self {
        self.input.schedules = records;
        self
    }

    pub fn vm_criticality(mut self, records: Vec<VmCriticality>) -> Self {
        self.input.vm_criticality = records;
        self
    }

    pub fn retention(mut self, records: Vec<RetentionRecord>) -> Self {
        self.input.retention = records;
        self
    }

    pub fn job_history(mut self, records: Vec<JobRecord>) -> Self {
        self.input.job_history = records;
        self
    }

    pub fn backup_timestamps(mut self, records: Vec<BackupTimestampRecord>) -> Self {
        self.input.backup_timestamps = records;
        self
    }

    pub fn replication(mut self, records: Vec<ReplicationRecord>) -> Self {
        self.input.replication = records;
        self
    }

    pub fn placements(mut self, records: Vec<VmPlacementRecord>) -> Self {
        self.input.placements = records;
        self
    }

    pub fn capacity(mut self, records: Vec<DatastoreCapacityRecord>) -> Self {
        self.input.capacity = records;
        self
    }

    pub fn tiers(mut self, records: Vec<DatastoreTierRecord>) -> Self {
        self.input.tiers = records;
        self
    }

    pub fn subscriptions(mut self, records: Vec<SubscriptionRecord>) -> Self {
        self.input.subscriptions = records;
        self
    }

    /// Set the evaluation clock used by the recency rule.
    pub fn now(mut self, now: NaiveDateTime) -> Self {
        self.input.now = Some(now);
        self
    }

    /// Build the final `AuditInput`.
    pub fn build(self) -> AuditInput {
        self.input
    }
}
