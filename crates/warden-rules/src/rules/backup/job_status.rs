//! Job status rule: the most recent backup job per VM must have succeeded.

use chrono::NaiveDateTime;
use rustc_hash::FxHashMap;

use warden_core::config::JobStatusConfig;
use warden_core::errors::RuleError;
use warden_core::types::{parse_timestamp, JobRecord};

use crate::audit::AuditInput;
use crate::join::index_latest_by;
use crate::report::{ReasonCode, RuleId, RuleReport, Violation, ViolationDetail};
use crate::rules::ComplianceRule;

/// Checks the latest backup job outcome per target VM.
#[derive(Debug)]
pub struct JobStatusRule {
    config: JobStatusConfig,
}

impl JobStatusRule {
    pub fn new(config: JobStatusConfig) -> Self {
        Self { config }
    }

    /// Evaluate job outcomes for `targets` against the run history in `jobs`.
    ///
    /// Per VM only the record with the latest completion time counts; an
    /// older failure superseded by a later success is not reported. Equal
    /// timestamps keep the record encountered first.
    pub fn evaluate_job_status(
        &self,
        targets: &[String],
        jobs: &[JobRecord],
    ) -> Result<RuleReport, RuleError> {
        self.config.validate()?;
        let success = self.config.success_status.as_str();

        // An entity is rejected on its first malformed end_time; records for
        // other entities keep being evaluated.
        let mut malformed: FxHashMap<&str, String> = FxHashMap::default();
        let mut parsed: Vec<(&JobRecord, NaiveDateTime)> = Vec::with_capacity(jobs.len());
        for job in jobs {
            if malformed.contains_key(job.vm.as_str()) {
                continue;
            }
            match parse_timestamp(&job.end_time) {
                Ok(end) => parsed.push((job, end)),
                Err(e) => {
                    tracing::debug!(
                        entity = job.vm.as_str(),
                        job_id = job.job_id.as_str(),
                        "unparseable job end_time"
                    );
                    malformed.insert(job.vm.as_str(), e.to_string());
                }
            }
        }

        let latest = index_latest_by(&parsed, |(job, _)| job.vm.as_str(), |(_, end)| *end);

        let mut violations = Vec::new();
        for vm in targets {
            if let Some(message) = malformed.get(vm.as_str()) {
                violations.push(Violation::data_error(vm.clone(), "end_time", message.clone()));
                continue;
            }
            match latest.get(vm.as_str()) {
                None => violations.push(Violation::new(
                    vm.clone(),
                    ReasonCode::NoJobHistory,
                    "No recent backup jobs found for VM",
                )),
                Some((job, _)) if job.status != success => {
                    let error_message = job
                        .error_message
                        .clone()
                        .unwrap_or_else(|| "Unknown error".to_string());
                    violations.push(
                        Violation::new(
                            vm.clone(),
                            ReasonCode::JobFailed,
                            format!(
                                "Latest backup job ended with status {} (expected: {success})",
                                job.status
                            ),
                        )
                        .with_detail(ViolationDetail::Job {
                            job_id: job.job_id.clone(),
                            status: job.status.clone(),
                            end_time: job.end_time.clone(),
                            error_message,
                        }),
                    );
                }
                Some(_) => {}
            }
        }

        Ok(RuleReport::new(RuleId::JobStatus, targets.len(), violations))
    }
}

impl ComplianceRule for JobStatusRule {
    fn id(&self) -> RuleId {
        RuleId::JobStatus
    }

    fn name(&self) -> &'static str {
        "Backup Job Status"
    }

    fn description(&self) -> &'static str {
        "Verifies that the most recent backup job per VM completed successfully"
    }

    fn evaluate(&self, input: &AuditInput) -> Result<RuleReport, RuleError> {
        self.evaluate_job_status(&input.target_vms, &input.job_history)
    }
}
