//! Data-source traits modeling upstream collectors.
//!
//! Real collectors (vCenter sessions, CMDB lookups) implement these outside
//! the engine; test doubles supply fixed tables. By the time data reaches
//! the engine it is already shaped, so the methods return plain collections.
//! Transport failures, retries, and timeouts belong to the collector layer.

use warden_core::types::{
    BackupTimestampRecord, DatastoreCapacityRecord, DatastoreTierRecord, JobRecord,
    PolicyRecord, ReplicationRecord, RetentionRecord, ScheduleRecord, SubscriptionRecord,
    VmCriticality, VmPlacementRecord,
};

use crate::audit::AuditInput;

/// Supplies backup-axis observations for a VM fleet.
pub trait BackupInventorySource: Send + Sync {
    fn target_vms(&self) -> Vec<String>;
    fn replication_required_vms(&self) -> Vec<String>;
    fn policies(&self) -> Vec<PolicyRecord>;
    fn schedules(&self) -> Vec<ScheduleRecord>;
    fn vm_criticality(&self) -> Vec<VmCriticality>;
    fn retention(&self) -> Vec<RetentionRecord>;
    fn job_history(&self) -> Vec<JobRecord>;
    fn backup_timestamps(&self) -> Vec<BackupTimestampRecord>;
    fn replication(&self) -> Vec<ReplicationRecord>;
}

/// Supplies datastore-axis observations.
pub trait DatastoreInventorySource: Send + Sync {
    fn target_datastores(&self) -> Vec<String>;
    fn placements(&self) -> Vec<VmPlacementRecord>;
    fn capacity(&self) -> Vec<DatastoreCapacityRecord>;
    fn tiers(&self) -> Vec<DatastoreTierRecord>;
    fn subscriptions(&self) -> Vec<SubscriptionRecord>;
}

impl AuditInput {
    /// Assemble an input snapshot from collector sources.
    ///
    /// The evaluation clock is not supplied by collectors; set `now` on the
    /// returned input before running time-window rules.
    pub fn from_sources(
        backup: &dyn BackupInventorySource,
        datastore: &dyn DatastoreInventorySource,
    ) -> Self {
        Self {
            target_vms: backup.target_vms(),
            target_datastores: datastore.target_datastores(),
            replication_required_vms: backup.replication_required_vms(),
            policies: backup.policies(),
            schedules: backup.schedules(),
            vm_criticality: backup.vm_criticality(),
            retention: backup.retention(),
            job_history: backup.job_history(),
            backup_timestamps: backup.backup_timestamps(),
            replication: backup.replication(),
            placements: datastore.placements(),
            capacity: datastore.capacity(),
            tiers: datastore.tiers(),
            subscriptions: datastore.subscriptions(),
            now: None,
        }
    }
}
