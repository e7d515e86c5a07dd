//! Offsite replication rule: critical VMs must replicate and stay healthy.

use warden_core::config::ReplicationConfig;
use warden_core::errors::RuleError;
use warden_core::types::ReplicationRecord;

use crate::audit::AuditInput;
use crate::join::index_by_name;
use crate::report::{ReasonCode, RuleId, RuleReport, Violation, ViolationDetail};
use crate::rules::ComplianceRule;

/// Checks offsite replication for the VMs that require it.
#[derive(Debug)]
pub struct OffsiteReplicationRule {
    config: ReplicationConfig,
}

impl OffsiteReplicationRule {
    pub fn new(config: ReplicationConfig) -> Self {
        Self { config }
    }

    /// Evaluate replication for `required_vms` against observed state.
    ///
    /// Per entity the first matching condition wins: missing record, then
    /// replication disabled, then a reported status other than the expected
    /// healthy value. A record with no status field is compliant once
    /// replication is enabled.
    pub fn evaluate_replication(
        &self,
        required_vms: &[String],
        replication: &[ReplicationRecord],
    ) -> Result<RuleReport, RuleError> {
        self.config.validate()?;
        let expected = self.config.healthy_status.as_str();

        let by_vm = index_by_name(replication, |r| r.vm.as_str());
        let mut violations = Vec::new();

        for vm in required_vms {
            match by_vm.get(vm.as_str()) {
                None => violations.push(Violation::new(
                    vm.clone(),
                    ReasonCode::NoReplicationData,
                    "No offsite replication configuration found",
                )),
                Some(record) if !record.offsite_enabled => violations.push(
                    Violation::new(
                        vm.clone(),
                        ReasonCode::ReplicationDisabled,
                        "Offsite replication is not enabled (required for critical VM)",
                    )
                    .with_detail(ViolationDetail::Replication {
                        observed_status: record.replication_status.clone(),
                        expected_status: expected.to_string(),
                        offsite_target: record.offsite_target.clone(),
                    }),
                ),
                Some(record) => {
                    if let Some(status) = &record.replication_status {
                        if status != expected {
                            violations.push(
                                Violation::new(
                                    vm.clone(),
                                    ReasonCode::ReplicationUnhealthy,
                                    format!(
                                        "Offsite replication status is {status} (expected: {expected})"
                                    ),
                                )
                                .with_detail(ViolationDetail::Replication {
                                    observed_status: Some(status.clone()),
                                    expected_status: expected.to_string(),
                                    offsite_target: record.offsite_target.clone(),
                                }),
                            );
                        }
                    }
                }
            }
        }

        Ok(RuleReport::new(
            RuleId::OffsiteReplication,
            required_vms.len(),
            violations,
        ))
    }
}

impl ComplianceRule for OffsiteReplicationRule {
    fn id(&self) -> RuleId {
        RuleId::OffsiteReplication
    }

    fn name(&self) -> &'static str {
        "Offsite Replication"
    }

    fn description(&self) -> &'static str {
        "Verifies that replication-required VMs replicate offsite and report healthy"
    }

    fn evaluate(&self, input: &AuditInput) -> Result<RuleReport, RuleError> {
        self.evaluate_replication(&input.replication_required_vms, &input.replication)
    }
}
