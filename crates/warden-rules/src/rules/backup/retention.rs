//! Retention rule: restore-point counts must meet the configured minimums.

use warden_core::config::RetentionThresholds;
use warden_core::errors::RuleError;
use warden_core::types::{RetentionRecord, SmallVec4};

use crate::audit::AuditInput;
use crate::join::index_by_name;
use crate::report::{ReasonCode, RuleId, RuleReport, Violation, ViolationDetail};
use crate::rules::ComplianceRule;

/// Checks daily/weekly/monthly retention against independent minimums.
#[derive(Debug)]
pub struct RetentionComplianceRule {
    thresholds: RetentionThresholds,
}

impl RetentionComplianceRule {
    pub fn new(thresholds: RetentionThresholds) -> Self {
        Self { thresholds }
    }

    /// Evaluate retention for `targets` against observed `retention` records.
    ///
    /// Unlike the presence rules, the three sub-checks are cumulative: every
    /// failing window lands in the same violation, reasons joined with "; ".
    pub fn evaluate_retention(
        &self,
        targets: &[String],
        retention: &[RetentionRecord],
    ) -> RuleReport {
        let t = &self.thresholds;
        let by_vm = index_by_name(retention, |r| r.vm.as_str());
        let mut violations = Vec::new();

        for vm in targets {
            let Some(record) = by_vm.get(vm.as_str()) else {
                violations.push(Violation::new(
                    vm.clone(),
                    ReasonCode::NoRetentionData,
                    "No retention policy found for VM",
                ));
                continue;
            };

            let mut reasons: SmallVec4<String> = SmallVec4::new();
            if record.daily < t.min_daily {
                reasons.push(format!(
                    "Daily retention {} < {} required",
                    record.daily, t.min_daily
                ));
            }
            if record.weekly < t.min_weekly {
                reasons.push(format!(
                    "Weekly retention {} < {} required",
                    record.weekly, t.min_weekly
                ));
            }
            if record.monthly < t.min_monthly {
                reasons.push(format!(
                    "Monthly retention {} < {} required",
                    record.monthly, t.min_monthly
                ));
            }

            if !reasons.is_empty() {
                violations.push(
                    Violation::new(
                        vm.clone(),
                        ReasonCode::RetentionBelowMinimum,
                        reasons.join("; "),
                    )
                    .with_detail(ViolationDetail::Retention {
                        daily: record.daily,
                        weekly: record.weekly,
                        monthly: record.monthly,
                        min_daily: t.min_daily,
                        min_weekly: t.min_weekly,
                        min_monthly: t.min_monthly,
                    }),
                );
            }
        }

        RuleReport::new(RuleId::RetentionCompliance, targets.len(), violations)
    }
}

impl ComplianceRule for RetentionComplianceRule {
    fn id(&self) -> RuleId {
        RuleId::RetentionCompliance
    }

    fn name(&self) -> &'static str {
        "Retention Compliance"
    }

    fn description(&self) -> &'static str {
        "Verifies that retention settings meet the configured minimum restore points"
    }

    fn evaluate(&self, input: &AuditInput) -> Result<RuleReport, RuleError> {
        Ok(self.evaluate_retention(&input.target_vms, &input.retention))
    }
}
