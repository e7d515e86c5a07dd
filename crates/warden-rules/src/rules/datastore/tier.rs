//! Performance tier rule: governed categories require a specific tier.

use warden_core::config::TierPolicy;
use warden_core::constants::UNKNOWN_TIER;
use warden_core::errors::RuleError;
use warden_core::types::{DatastoreTierRecord, VmPlacementRecord};

use crate::audit::AuditInput;
use crate::join::index_by_name;
use crate::report::{ReasonCode, RuleId, RuleReport, Violation, ViolationDetail};
use crate::rules::ComplianceRule;

/// Checks the tier of each governed VM's datastore via a two-level join:
/// placement record to datastore name, datastore name to tier label.
#[derive(Debug)]
pub struct PerformanceTierRule {
    policy: TierPolicy,
}

impl PerformanceTierRule {
    pub fn new(policy: TierPolicy) -> Self {
        Self { policy }
    }

    /// Evaluate tiers for the governed subset of `placements`.
    ///
    /// Placements whose category has no required-tier entry are excluded
    /// from the total as well as from the violations. A datastore absent
    /// from the tier inventory resolves to the UNKNOWN sentinel, which
    /// never matches a requirement.
    pub fn evaluate_tiers(
        &self,
        placements: &[VmPlacementRecord],
        tiers: &[DatastoreTierRecord],
    ) -> Result<RuleReport, RuleError> {
        self.policy.validate()?;

        let tier_by_datastore = index_by_name(tiers, |t| t.name.as_str());
        let mut total = 0usize;
        let mut violations = Vec::new();

        for record in placements {
            let Some(app_type) = record.app_type.as_deref() else {
                continue;
            };
            let Some(required) = self.policy.required_for(app_type) else {
                continue;
            };
            total += 1;

            let current = tier_by_datastore
                .get(record.datastore.as_str())
                .map(|t| t.performance_tier.as_str())
                .unwrap_or(UNKNOWN_TIER);

            if current != required {
                violations.push(
                    Violation::new(
                        record.vm.clone(),
                        ReasonCode::TierMismatch,
                        format!(
                            "VM requires {required} tier storage, found {current} on {}",
                            record.datastore
                        ),
                    )
                    .with_detail(ViolationDetail::Tier {
                        current_tier: current.to_string(),
                        required_tier: required.to_string(),
                        datastore: record.datastore.clone(),
                    }),
                );
            }
        }

        Ok(RuleReport::new(RuleId::PerformanceTier, total, violations))
    }
}

impl ComplianceRule for PerformanceTierRule {
    fn id(&self) -> RuleId {
        RuleId::PerformanceTier
    }

    fn name(&self) -> &'static str {
        "Performance Tier"
    }

    fn description(&self) -> &'static str {
        "Verifies that governed app categories sit on the required performance tier"
    }

    fn evaluate(&self, input: &AuditInput) -> Result<RuleReport, RuleError> {
        self.evaluate_tiers(&input.placements, &input.tiers)
    }
}
