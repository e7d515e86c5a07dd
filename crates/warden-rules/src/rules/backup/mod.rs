//! Backup compliance rules: policy, RPO, retention, jobs, recency,
//! replication.

pub mod job_status;
pub mod policy;
pub mod recency;
pub mod replication;
pub mod retention;
pub mod rpo;

pub use job_status::JobStatusRule;
pub use policy::PolicyAppliedRule;
pub use recency::BackupRecencyRule;
pub use replication::OffsiteReplicationRule;
pub use retention::RetentionComplianceRule;
pub use rpo::RpoAlignmentRule;
