//! Subscription rule: datastores must not exceed the subscription ceiling.

use warden_core::config::SubscriptionConfig;
use warden_core::errors::RuleError;
use warden_core::types::SubscriptionRecord;

use crate::audit::AuditInput;
use crate::join::index_by_name;
use crate::report::{round2, ReasonCode, RuleId, RuleReport, Violation, ViolationDetail};
use crate::rules::ComplianceRule;

/// Checks the precomputed subscription ratio against the configured maximum.
#[derive(Debug)]
pub struct SubscriptionRatioRule {
    config: SubscriptionConfig,
}

impl SubscriptionRatioRule {
    pub fn new(config: SubscriptionConfig) -> Self {
        Self { config }
    }

    /// Evaluate subscription ratios for `targets`.
    pub fn evaluate_subscription(
        &self,
        targets: &[String],
        subscriptions: &[SubscriptionRecord],
    ) -> Result<RuleReport, RuleError> {
        self.config.validate()?;
        let max_ratio = self.config.max_ratio;

        let by_name = index_by_name(subscriptions, |s| s.name.as_str());
        let mut violations = Vec::new();

        for name in targets {
            let Some(record) = by_name.get(name.as_str()) else {
                violations.push(Violation::new(
                    name.clone(),
                    ReasonCode::NoSubscriptionData,
                    "No subscription data found for datastore",
                ));
                continue;
            };

            if !record.subscription_ratio.is_finite() {
                violations.push(Violation::data_error(
                    name.clone(),
                    "subscription_ratio",
                    format!("ratio is not a number, got {}", record.subscription_ratio),
                ));
                continue;
            }

            if record.subscription_ratio > max_ratio {
                violations.push(
                    Violation::new(
                        name.clone(),
                        ReasonCode::Oversubscribed,
                        format!(
                            "Subscription ratio {} exceeds {max_ratio} maximum",
                            round2(record.subscription_ratio)
                        ),
                    )
                    .with_detail(ViolationDetail::Subscription {
                        ratio: record.subscription_ratio,
                        provisioned_gb: record.provisioned_gb,
                        max_ratio,
                    }),
                );
            }
        }

        Ok(RuleReport::new(
            RuleId::SubscriptionRatio,
            targets.len(),
            violations,
        ))
    }
}

impl ComplianceRule for SubscriptionRatioRule {
    fn id(&self) -> RuleId {
        RuleId::SubscriptionRatio
    }

    fn name(&self) -> &'static str {
        "Subscription Ratio"
    }

    fn description(&self) -> &'static str {
        "Verifies that datastore subscription ratios stay under the ceiling"
    }

    fn evaluate(&self, input: &AuditInput) -> Result<RuleReport, RuleError> {
        self.evaluate_subscription(&input.target_datastores, &input.subscriptions)
    }
}
