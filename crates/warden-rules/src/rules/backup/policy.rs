//! Backup policy rule: every target VM must have a policy applied.

use warden_core::constants::NO_POLICY_SENTINEL;
use warden_core::errors::RuleError;
use warden_core::types::PolicyRecord;

use crate::audit::AuditInput;
use crate::join::index_by_name;
use crate::report::{ReasonCode, RuleId, RuleReport, Violation, ViolationDetail};
use crate::rules::ComplianceRule;

/// Checks that every target VM has a backup policy applied.
#[derive(Debug, Default)]
pub struct PolicyAppliedRule;

impl PolicyAppliedRule {
    /// Evaluate policy coverage for `targets` against observed `policies`.
    ///
    /// Per entity the first matching condition wins: missing record, then
    /// policy not applied, then the "None" policy sentinel.
    pub fn evaluate_policies(&self, targets: &[String], policies: &[PolicyRecord]) -> RuleReport {
        let by_vm = index_by_name(policies, |p| p.vm.as_str());
        let mut violations = Vec::new();

        for vm in targets {
            match by_vm.get(vm.as_str()) {
                None => violations.push(Violation::new(
                    vm.clone(),
                    ReasonCode::NoPolicyData,
                    "No backup policy found for VM",
                )),
                Some(record) if !record.policy_applied => {
                    let display_name = record
                        .policy_name
                        .as_deref()
                        .unwrap_or(NO_POLICY_SENTINEL);
                    violations.push(
                        Violation::new(
                            vm.clone(),
                            ReasonCode::PolicyNotApplied,
                            format!("Backup policy not applied (Policy: {display_name})"),
                        )
                        .with_detail(ViolationDetail::Policy {
                            policy_name: record.policy_name.clone(),
                            policy_id: record.policy_id.clone(),
                        }),
                    );
                }
                Some(record) if record.policy_name.as_deref() == Some(NO_POLICY_SENTINEL) => {
                    violations.push(
                        Violation::new(
                            vm.clone(),
                            ReasonCode::NoPolicyAssigned,
                            "VM has no backup policy assigned",
                        )
                        .with_detail(ViolationDetail::Policy {
                            policy_name: record.policy_name.clone(),
                            policy_id: record.policy_id.clone(),
                        }),
                    );
                }
                Some(_) => {}
            }
        }

        RuleReport::new(RuleId::PolicyApplied, targets.len(), violations)
    }
}

impl ComplianceRule for PolicyAppliedRule {
    fn id(&self) -> RuleId {
        RuleId::PolicyApplied
    }

    fn name(&self) -> &'static str {
        "Backup Policy Applied"
    }

    fn description(&self) -> &'static str {
        "Verifies that every target VM has a backup policy applied"
    }

    fn evaluate(&self, input: &AuditInput) -> Result<RuleReport, RuleError> {
        Ok(self.evaluate_policies(&input.target_vms, &input.policies))
    }
}
