//! Audit runner: evaluates the configured rule set over one input snapshot.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use warden_core::config::AuditConfig;
use warden_core::errors::RuleError;
use warden_core::events::{
    AuditCompletedEvent, AuditEventHandler, NoopEventHandler, RuleCompletedEvent,
    RuleStartedEvent, ViolationDetectedEvent,
};

use super::input::AuditInput;
use crate::report::RuleReport;
use crate::rules::backup::{
    BackupRecencyRule, JobStatusRule, OffsiteReplicationRule, PolicyAppliedRule,
    RetentionComplianceRule, RpoAlignmentRule,
};
use crate::rules::datastore::{
    DatastoreCapacityRule, PerformanceTierRule, SubscriptionRatioRule, VmPlacementRule,
};
use crate::rules::ComplianceRule;

/// Runs a set of compliance rules over one audit input.
///
/// Rules are independent pure computations and evaluate in parallel; the
/// report order always matches the rule order.
pub struct AuditRunner {
    rules: Vec<Box<dyn ComplianceRule>>,
    handler: Arc<dyn AuditEventHandler>,
}

impl AuditRunner {
    /// Build a runner with all ten rules configured from `config`.
    ///
    /// Configuration problems surface here, before any entity is processed.
    pub fn from_config(config: &AuditConfig) -> Result<Self, RuleError> {
        config.validate()?;
        let rules: Vec<Box<dyn ComplianceRule>> = vec![
            Box::new(PolicyAppliedRule),
            Box::new(RpoAlignmentRule::new(config.rpo.clone())),
            Box::new(RetentionComplianceRule::new(config.retention.clone())),
            Box::new(JobStatusRule::new(config.jobs.clone())),
            Box::new(BackupRecencyRule::new(config.recency.clone())),
            Box::new(OffsiteReplicationRule::new(config.replication.clone())),
            Box::new(VmPlacementRule::new(config.placement.clone())),
            Box::new(DatastoreCapacityRule::new(config.capacity.clone())),
            Box::new(PerformanceTierRule::new(config.tiers.clone())),
            Box::new(SubscriptionRatioRule::new(config.subscription.clone())),
        ];
        Ok(Self {
            rules,
            handler: Arc::new(NoopEventHandler),
        })
    }

    /// Build a runner over an explicit rule set.
    pub fn from_rules(rules: Vec<Box<dyn ComplianceRule>>) -> Self {
        Self {
            rules,
            handler: Arc::new(NoopEventHandler),
        }
    }

    /// Replace the event handler.
    pub fn with_handler(mut self, handler: Arc<dyn AuditEventHandler>) -> Self {
        self.handler = handler;
        self
    }

    /// Evaluate every configured rule against `input`.
    pub fn run(&self, input: &AuditInput) -> Result<AuditResult, RuleError> {
        let start = Instant::now();

        let reports: Vec<RuleReport> = self
            .rules
            .par_iter()
            .map(|rule| {
                let rule_id = rule.id().as_str().to_string();
                self.handler.on_rule_started(&RuleStartedEvent {
                    rule_id: rule_id.clone(),
                });

                let rule_start = Instant::now();
                let report = rule.evaluate(input)?;

                for violation in &report.violations {
                    self.handler.on_violation_detected(&ViolationDetectedEvent {
                        rule_id: rule_id.clone(),
                        entity: violation.entity.clone(),
                        reason_code: violation.code.as_str().to_string(),
                    });
                }
                tracing::debug!(
                    rule = rule_id.as_str(),
                    total = report.total,
                    violations = report.violations.len(),
                    elapsed_ms = rule_start.elapsed().as_millis() as u64,
                    "rule evaluated"
                );
                self.handler.on_rule_completed(&RuleCompletedEvent {
                    rule_id,
                    total: report.total,
                    compliant: report.compliant,
                    violation_count: report.violations.len(),
                });

                Ok(report)
            })
            .collect::<Result<Vec<_>, RuleError>>()?;

        let summary = AuditSummary::from_reports(&reports);
        self.handler.on_audit_completed(&AuditCompletedEvent {
            rules_run: summary.rules_run,
            rules_passed: summary.rules_passed,
            total_violations: summary.total_violations,
            passed: summary.passed,
        });
        tracing::info!(
            rules_run = summary.rules_run,
            total_violations = summary.total_violations,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "audit completed"
        );

        Ok(AuditResult { reports, summary })
    }
}

/// Aggregate accounting across one audit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub rules_run: usize,
    pub rules_passed: usize,
    pub total_violations: usize,
    pub passed: bool,
}

impl AuditSummary {
    pub fn from_reports(reports: &[RuleReport]) -> Self {
        let rules_passed = reports.iter().filter(|r| r.passed()).count();
        let total_violations = reports.iter().map(|r| r.violations.len()).sum();
        Self {
            rules_run: reports.len(),
            rules_passed,
            total_violations,
            passed: rules_passed == reports.len(),
        }
    }
}

/// Output of one audit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    pub reports: Vec<RuleReport>,
    pub summary: AuditSummary,
}
