//! Backup recency rule: the latest backup must be inside the allowed window.

use chrono::NaiveDateTime;

use warden_core::config::RecencyConfig;
use warden_core::errors::RuleError;
use warden_core::types::{parse_timestamp, BackupTimestampRecord};

use crate::audit::AuditInput;
use crate::join::index_by_name;
use crate::report::{round2, ReasonCode, RuleId, RuleReport, Violation, ViolationDetail};
use crate::rules::ComplianceRule;

/// Checks backup age against the configured maximum.
///
/// The evaluation clock is an explicit parameter; this rule never reads
/// ambient wall-clock time.
#[derive(Debug)]
pub struct BackupRecencyRule {
    config: RecencyConfig,
}

impl BackupRecencyRule {
    pub fn new(config: RecencyConfig) -> Self {
        Self { config }
    }

    /// Evaluate backup recency for `targets` at the `now` reference.
    pub fn evaluate_recency(
        &self,
        targets: &[String],
        timestamps: &[BackupTimestampRecord],
        now: NaiveDateTime,
    ) -> Result<RuleReport, RuleError> {
        self.config.validate()?;
        let max_age = self.config.max_age_hours;

        let by_vm = index_by_name(timestamps, |t| t.vm.as_str());
        let mut violations = Vec::new();

        for vm in targets {
            let Some(record) = by_vm.get(vm.as_str()) else {
                violations.push(Violation::new(
                    vm.clone(),
                    ReasonCode::NoBackupTimestamp,
                    "No backup timestamp found for VM",
                ));
                continue;
            };

            let last = match parse_timestamp(&record.last_backup_time) {
                Ok(parsed) => parsed,
                Err(e) => {
                    violations.push(Violation::data_error(
                        vm.clone(),
                        "last_backup_time",
                        e.to_string(),
                    ));
                    continue;
                }
            };

            let age_hours = (now - last).num_seconds() as f64 / 3600.0;
            if age_hours > max_age {
                let display_age = round2(age_hours);
                violations.push(
                    Violation::new(
                        vm.clone(),
                        ReasonCode::BackupStale,
                        format!("Backup is {display_age}h old (exceeds {max_age}h threshold)"),
                    )
                    .with_detail(ViolationDetail::Recency {
                        last_backup_time: record.last_backup_time.clone(),
                        age_hours: display_age,
                        max_age_hours: max_age,
                    }),
                );
            } else if age_hours < 0.0 {
                tracing::debug!(
                    entity = vm.as_str(),
                    age_hours,
                    "backup timestamp is ahead of the evaluation clock"
                );
            }
        }

        Ok(RuleReport::new(
            RuleId::BackupRecency,
            targets.len(),
            violations,
        ))
    }
}

impl ComplianceRule for BackupRecencyRule {
    fn id(&self) -> RuleId {
        RuleId::BackupRecency
    }

    fn name(&self) -> &'static str {
        "Backup Recency"
    }

    fn description(&self) -> &'static str {
        "Verifies that the latest backup per VM is within the allowed age window"
    }

    fn evaluate(&self, input: &AuditInput) -> Result<RuleReport, RuleError> {
        let now = input.now.ok_or_else(|| RuleError::MissingParameter {
            rule: RuleId::BackupRecency.as_str().to_string(),
            param: "now".to_string(),
        })?;
        self.evaluate_recency(&input.target_vms, &input.backup_timestamps, now)
    }
}
