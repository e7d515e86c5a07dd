//! warden-rules: Compliance rule engine for virtualization infrastructure
//!
//! This crate provides the evaluation core for Warden:
//! - Join: observed-record lookup by entity name
//! - Report: reason codes, violations, and per-rule verdicts
//! - Rules: ten compliance evaluators over backup and datastore axes
//! - Audit: input assembly and parallel rule orchestration
//! - Providers: collector-facing data-source traits
//! - Reporters: JSON rendering of audit results

pub mod audit;
pub mod join;
pub mod providers;
pub mod report;
pub mod reporters;
pub mod rules;

// Re-exports for convenience
pub use audit::{AuditInput, AuditInputBuilder, AuditResult, AuditRunner, AuditSummary};
pub use providers::{BackupInventorySource, DatastoreInventorySource};
pub use report::{ReasonCode, RuleId, RuleReport, Violation, ViolationDetail};
pub use reporters::{JsonReporter, Reporter};
pub use rules::backup::{
    BackupRecencyRule, JobStatusRule, OffsiteReplicationRule, PolicyAppliedRule,
    RetentionComplianceRule, RpoAlignmentRule,
};
pub use rules::datastore::{
    DatastoreCapacityRule, PerformanceTierRule, SubscriptionRatioRule, VmPlacementRule,
};
pub use rules::ComplianceRule;
