//! Placement rule: governed app categories require tagged storage.

use warden_core::config::PlacementPolicy;
use warden_core::errors::RuleError;
use warden_core::types::VmPlacementRecord;

use crate::audit::AuditInput;
use crate::join::index_by_name;
use crate::report::{ReasonCode, RuleId, RuleReport, Violation, ViolationDetail};
use crate::rules::ComplianceRule;

/// Checks datastore assignments against the per-category placement policy.
#[derive(Debug)]
pub struct VmPlacementRule {
    policy: PlacementPolicy,
}

impl VmPlacementRule {
    pub fn new(policy: PlacementPolicy) -> Self {
        Self { policy }
    }

    /// Evaluate placements for `targets` against the policy table.
    ///
    /// VMs whose app category is not governed by the table are compliant.
    pub fn evaluate_placement(
        &self,
        targets: &[String],
        placements: &[VmPlacementRecord],
    ) -> Result<RuleReport, RuleError> {
        self.policy.validate()?;

        let by_vm = index_by_name(placements, |p| p.vm.as_str());
        let mut violations = Vec::new();

        for vm in targets {
            let Some(record) = by_vm.get(vm.as_str()) else {
                violations.push(Violation::new(
                    vm.clone(),
                    ReasonCode::NoPlacementData,
                    "No datastore assignment found for VM",
                ));
                continue;
            };

            let Some(app_type) = record.app_type.as_deref() else {
                continue;
            };
            if self.policy.matches(app_type, &record.datastore) == Some(false) {
                // required_tags is Some for every governed category
                let tags = self.policy.required_tags(app_type).unwrap_or_default();
                violations.push(
                    Violation::new(
                        vm.clone(),
                        ReasonCode::PlacementViolation,
                        format!(
                            "{app_type} VM requires storage tagged {} (assigned: {})",
                            tags.join("/"),
                            record.datastore
                        ),
                    )
                    .with_detail(ViolationDetail::Placement {
                        datastore: record.datastore.clone(),
                        app_type: app_type.to_string(),
                        required_tags: tags.to_vec(),
                    }),
                );
            }
        }

        Ok(RuleReport::new(
            RuleId::VmPlacement,
            targets.len(),
            violations,
        ))
    }
}

impl ComplianceRule for VmPlacementRule {
    fn id(&self) -> RuleId {
        RuleId::VmPlacement
    }

    fn name(&self) -> &'static str {
        "VM Placement"
    }

    fn description(&self) -> &'static str {
        "Verifies that governed app categories sit on approved storage"
    }

    fn evaluate(&self, input: &AuditInput) -> Result<RuleReport, RuleError> {
        self.evaluate_placement(&input.target_vms, &input.placements)
    }
}
