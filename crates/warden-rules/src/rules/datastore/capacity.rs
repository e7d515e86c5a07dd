//! Capacity rule: datastores must keep a minimum free percentage.

use warden_core::config::CapacityConfig;
use warden_core::errors::RuleError;
use warden_core::types::DatastoreCapacityRecord;

use crate::audit::AuditInput;
use crate::join::index_by_name;
use crate::report::{round2, ReasonCode, RuleId, RuleReport, Violation, ViolationDetail};
use crate::rules::ComplianceRule;

/// Checks free capacity against the configured floor.
#[derive(Debug)]
pub struct DatastoreCapacityRule {
    config: CapacityConfig,
}

impl DatastoreCapacityRule {
    pub fn new(config: CapacityConfig) -> Self {
        Self { config }
    }

    /// Evaluate free capacity for `targets` against observed figures.
    ///
    /// A non-positive or non-finite total is a data error for that
    /// datastore, never a division result.
    pub fn evaluate_capacity(
        &self,
        targets: &[String],
        capacity: &[DatastoreCapacityRecord],
    ) -> Result<RuleReport, RuleError> {
        self.config.validate()?;
        let min_free = self.config.min_free_percent;

        let by_name = index_by_name(capacity, |c| c.name.as_str());
        let mut violations = Vec::new();

        for name in targets {
            let Some(record) = by_name.get(name.as_str()) else {
                violations.push(Violation::new(
                    name.clone(),
                    ReasonCode::NoCapacityData,
                    "No capacity data found for datastore",
                ));
                continue;
            };

            if !record.total_gb.is_finite() || record.total_gb <= 0.0 {
                violations.push(Violation::data_error(
                    name.clone(),
                    "total_gb",
                    format!("total capacity must be positive, got {}", record.total_gb),
                ));
                continue;
            }
            if !record.free_gb.is_finite() || record.free_gb < 0.0 {
                violations.push(Violation::data_error(
                    name.clone(),
                    "free_gb",
                    format!("free capacity must be non-negative, got {}", record.free_gb),
                ));
                continue;
            }

            let free_percent = record.free_gb / record.total_gb * 100.0;
            if free_percent < min_free {
                let display_percent = round2(free_percent);
                violations.push(
                    Violation::new(
                        name.clone(),
                        ReasonCode::LowFreeCapacity,
                        format!(
                            "Free capacity {display_percent}% below {min_free}% minimum"
                        ),
                    )
                    .with_detail(ViolationDetail::Capacity {
                        free_percent: display_percent,
                        free_gb: record.free_gb,
                        total_gb: record.total_gb,
                        min_free_percent: min_free,
                    }),
                );
            }
        }

        Ok(RuleReport::new(
            RuleId::DatastoreCapacity,
            targets.len(),
            violations,
        ))
    }
}

impl ComplianceRule for DatastoreCapacityRule {
    fn id(&self) -> RuleId {
        RuleId::DatastoreCapacity
    }

    fn name(&self) -> &'static str {
        "Datastore Capacity"
    }

    fn description(&self) -> &'static str {
        "Verifies that datastores keep the minimum free capacity percentage"
    }

    fn evaluate(&self, input: &AuditInput) -> Result<RuleReport, RuleError> {
        self.evaluate_capacity(&input.target_datastores, &input.capacity)
    }
}
