//! RPO alignment rule: backup schedules must meet per-criticality RPO.

use warden_core::config::RpoRequirements;
use warden_core::errors::RuleError;
use warden_core::types::{ScheduleRecord, VmCriticality};

use crate::audit::AuditInput;
use crate::join::index_by_name;
use crate::report::{ReasonCode, RuleId, RuleReport, Violation, ViolationDetail};
use crate::rules::ComplianceRule;

/// Checks that each VM's backup interval fits its criticality's RPO.
#[derive(Debug)]
pub struct RpoAlignmentRule {
    requirements: RpoRequirements,
}

impl RpoAlignmentRule {
    pub fn new(requirements: RpoRequirements) -> Self {
        Self { requirements }
    }

    /// Evaluate RPO alignment for the criticality-mapped VM set.
    ///
    /// The criticality mapping is the target list; levels absent from the
    /// requirements table fall back to the configured default.
    pub fn evaluate_rpo(
        &self,
        criticality: &[VmCriticality],
        schedules: &[ScheduleRecord],
    ) -> Result<RuleReport, RuleError> {
        self.requirements.validate()?;

        let by_vm = index_by_name(schedules, |s| s.vm.as_str());
        let mut violations = Vec::new();

        for entry in criticality {
            let required = self.requirements.required_for(&entry.level);
            match by_vm.get(entry.vm.as_str()) {
                None => violations.push(
                    Violation::new(
                        entry.vm.clone(),
                        ReasonCode::NoScheduleData,
                        "No backup schedule found",
                    )
                    .with_detail(ViolationDetail::Schedule {
                        criticality: entry.level.clone(),
                        required_rpo_hours: required,
                        current_rpo_hours: None,
                    }),
                ),
                Some(schedule) if schedule.rpo_hours > required => violations.push(
                    Violation::new(
                        entry.vm.clone(),
                        ReasonCode::RpoExceeded,
                        format!(
                            "RPO exceeds requirement ({}h > {}h)",
                            schedule.rpo_hours, required
                        ),
                    )
                    .with_detail(ViolationDetail::Schedule {
                        criticality: entry.level.clone(),
                        required_rpo_hours: required,
                        current_rpo_hours: Some(schedule.rpo_hours),
                    }),
                ),
                Some(_) => {}
            }
        }

        Ok(RuleReport::new(
            RuleId::RpoAlignment,
            criticality.len(),
            violations,
        ))
    }
}

impl ComplianceRule for RpoAlignmentRule {
    fn id(&self) -> RuleId {
        RuleId::RpoAlignment
    }

    fn name(&self) -> &'static str {
        "RPO Alignment"
    }

    fn description(&self) -> &'static str {
        "Verifies that backup schedules meet per-criticality RPO requirements"
    }

    fn evaluate(&self, input: &AuditInput) -> Result<RuleReport, RuleError> {
        self.evaluate_rpo(&input.vm_criticality, &input.schedules)
    }
}
