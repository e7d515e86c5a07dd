//! Backup rule evaluator tests: policy, RPO, retention, jobs, recency,
//! replication.

use warden_core::config::{
    JobStatusConfig, RecencyConfig, ReplicationConfig, RetentionThresholds, RpoRequirements,
};
use warden_core::types::{
    parse_timestamp, BackupTimestampRecord, JobRecord, PolicyRecord, ReplicationRecord,
    RetentionRecord, ScheduleRecord, VmCriticality,
};
use warden_rules::{
    BackupRecencyRule, JobStatusRule, OffsiteReplicationRule, PolicyAppliedRule, ReasonCode,
    RetentionComplianceRule, RpoAlignmentRule, ViolationDetail,
};

fn vms(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn make_policy(vm: &str, applied: bool, name: Option<&str>) -> PolicyRecord {
    PolicyRecord {
        vm: vm.to_string(),
        policy_applied: applied,
        policy_name: name.map(|n| n.to_string()),
        policy_id: applied.then(|| format!("policy-{vm}")),
    }
}

fn make_job(vm: &str, job_id: &str, status: &str, end_time: &str) -> JobRecord {
    JobRecord {
        vm: vm.to_string(),
        job_id: job_id.to_string(),
        status: status.to_string(),
        end_time: end_time.to_string(),
        start_time: None,
        error_message: (status != "Success").then(|| "Snapshot quiesce timeout".to_string()),
    }
}

fn make_retention(vm: &str, daily: u32, weekly: u32, monthly: u32) -> RetentionRecord {
    RetentionRecord {
        vm: vm.to_string(),
        daily,
        weekly,
        monthly,
    }
}

// ---- Policy applied ----

/// Missing record, unapplied policy, and the "None" sentinel each produce
/// exactly one violation; healthy VMs stay compliant.
#[test]
fn policy_rule_classifies_each_failure_mode() {
    let rule = PolicyAppliedRule;
    let targets = vms(&["vm-ok", "vm-missing", "vm-unapplied", "vm-none"]);
    let policies = vec![
        make_policy("vm-ok", true, Some("Critical-DB-Policy")),
        make_policy("vm-unapplied", false, Some("Standard-Policy")),
        make_policy("vm-none", true, Some("None")),
    ];

    let report = rule.evaluate_policies(&targets, &policies);
    assert_eq!(report.total, 4);
    assert_eq!(report.compliant, 1);
    assert_eq!(report.violations.len(), 3);

    let missing = report
        .violations
        .iter()
        .find(|v| v.entity == "vm-missing")
        .unwrap();
    assert_eq!(missing.code, ReasonCode::NoPolicyData);

    let unapplied = report
        .violations
        .iter()
        .find(|v| v.entity == "vm-unapplied")
        .unwrap();
    assert_eq!(unapplied.code, ReasonCode::PolicyNotApplied);
    assert!(unapplied.reason.contains("Standard-Policy"));

    let none = report
        .violations
        .iter()
        .find(|v| v.entity == "vm-none")
        .unwrap();
    assert_eq!(none.code, ReasonCode::NoPolicyAssigned);
}

/// Only the first matching condition fires: a record that is both
/// unapplied and carries the "None" sentinel reports once, as unapplied.
#[test]
fn policy_rule_short_circuits_per_entity() {
    let rule = PolicyAppliedRule;
    let targets = vms(&["vm-a"]);
    let policies = vec![make_policy("vm-a", false, Some("None"))];

    let report = rule.evaluate_policies(&targets, &policies);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].code, ReasonCode::PolicyNotApplied);
}

// ---- RPO alignment ----

/// A criticality level absent from the table uses the 24-hour default, so
/// a 20-hour schedule is compliant.
#[test]
fn rpo_rule_applies_default_for_unmapped_criticality() {
    let rule = RpoAlignmentRule::new(RpoRequirements::default());
    let criticality = vec![VmCriticality {
        vm: "vm-a".to_string(),
        level: "unknown-tier".to_string(),
    }];
    let schedules = vec![ScheduleRecord {
        vm: "vm-a".to_string(),
        rpo_hours: 20,
        frequency: None,
    }];

    let report = rule.evaluate_rpo(&criticality, &schedules).unwrap();
    assert_eq!(report.total, 1);
    assert!(report.passed());
}

#[test]
fn rpo_rule_flags_exceeded_requirement_strictly() {
    let mut requirements = RpoRequirements::default();
    requirements
        .hours_by_level
        .insert("critical".to_string(), 4);
    let rule = RpoAlignmentRule::new(requirements);

    let criticality = vec![
        VmCriticality {
            vm: "vm-exceeds".to_string(),
            level: "critical".to_string(),
        },
        VmCriticality {
            vm: "vm-on-boundary".to_string(),
            level: "critical".to_string(),
        },
    ];
    let schedules = vec![
        ScheduleRecord {
            vm: "vm-exceeds".to_string(),
            rpo_hours: 12,
            frequency: Some("Every 12 hours".to_string()),
        },
        ScheduleRecord {
            vm: "vm-on-boundary".to_string(),
            rpo_hours: 4,
            frequency: Some("Every 4 hours".to_string()),
        },
    ];

    let report = rule.evaluate_rpo(&criticality, &schedules).unwrap();
    assert_eq!(report.violations.len(), 1);
    let violation = &report.violations[0];
    assert_eq!(violation.entity, "vm-exceeds");
    assert_eq!(violation.code, ReasonCode::RpoExceeded);
    assert_eq!(
        violation.detail,
        Some(ViolationDetail::Schedule {
            criticality: "critical".to_string(),
            required_rpo_hours: 4,
            current_rpo_hours: Some(12),
        })
    );
}

#[test]
fn rpo_rule_reports_missing_schedule_distinctly() {
    let rule = RpoAlignmentRule::new(RpoRequirements::default());
    let criticality = vec![VmCriticality {
        vm: "vm-unscheduled".to_string(),
        level: "standard".to_string(),
    }];

    let report = rule.evaluate_rpo(&criticality, &[]).unwrap();
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].code, ReasonCode::NoScheduleData);
}

// ---- Retention ----

/// All failing windows land in ONE violation with every reason listed.
#[test]
fn retention_rule_combines_all_failing_windows() {
    let rule = RetentionComplianceRule::new(RetentionThresholds {
        min_daily: 7,
        min_weekly: 4,
        min_monthly: 3,
    });
    let targets = vms(&["vm-a"]);
    let retention = vec![make_retention("vm-a", 3, 2, 1)];

    let report = rule.evaluate_retention(&targets, &retention);
    assert_eq!(report.violations.len(), 1);

    let violation = &report.violations[0];
    assert_eq!(violation.code, ReasonCode::RetentionBelowMinimum);
    assert!(violation.reason.contains("Daily retention 3 < 7 required"));
    assert!(violation.reason.contains("Weekly retention 2 < 4 required"));
    assert!(violation.reason.contains("Monthly retention 1 < 3 required"));
}

/// Values equal to the minimum are compliant: the comparison is strict.
#[test]
fn retention_rule_boundary_values_are_compliant() {
    let rule = RetentionComplianceRule::new(RetentionThresholds::default());
    let targets = vms(&["vm-a"]);
    let retention = vec![make_retention("vm-a", 7, 4, 3)];

    let report = rule.evaluate_retention(&targets, &retention);
    assert!(report.passed());
}

#[test]
fn retention_rule_reports_missing_record() {
    let rule = RetentionComplianceRule::new(RetentionThresholds::default());
    let targets = vms(&["vm-a", "vm-b"]);
    let retention = vec![make_retention("vm-a", 14, 8, 6)];

    let report = rule.evaluate_retention(&targets, &retention);
    assert_eq!(report.compliant, 1);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].entity, "vm-b");
    assert_eq!(report.violations[0].code, ReasonCode::NoRetentionData);
}

// ---- Job status ----

/// Two records, Success at T1 then Failed at T2 > T1: the violation
/// reflects the latest record only.
#[test]
fn job_rule_latest_failure_supersedes_earlier_success() {
    let rule = JobStatusRule::new(JobStatusConfig::default());
    let targets = vms(&["vm-a"]);
    let jobs = vec![
        make_job("vm-a", "job-1", "Success", "2024-01-08 06:00:00"),
        make_job("vm-a", "job-2", "Failed", "2024-01-09 06:00:00"),
    ];

    let report = rule.evaluate_job_status(&targets, &jobs).unwrap();
    assert_eq!(report.violations.len(), 1);
    let violation = &report.violations[0];
    assert_eq!(violation.code, ReasonCode::JobFailed);
    match &violation.detail {
        Some(ViolationDetail::Job { job_id, end_time, .. }) => {
            assert_eq!(job_id, "job-2");
            assert_eq!(end_time, "2024-01-09 06:00:00");
        }
        other => panic!("expected job detail, got {other:?}"),
    }
}

/// An older failure superseded by a later success is not reported.
#[test]
fn job_rule_later_success_clears_earlier_failure() {
    let rule = JobStatusRule::new(JobStatusConfig::default());
    let targets = vms(&["vm-a"]);
    let jobs = vec![
        make_job("vm-a", "job-1", "Failed", "2024-01-08 06:00:00"),
        make_job("vm-a", "job-2", "Success", "2024-01-09 06:00:00"),
    ];

    let report = rule.evaluate_job_status(&targets, &jobs).unwrap();
    assert!(report.passed());
}

/// Identical timestamps keep the first record seen.
#[test]
fn job_rule_timestamp_ties_keep_first_seen() {
    let rule = JobStatusRule::new(JobStatusConfig::default());
    let targets = vms(&["vm-a"]);
    let jobs = vec![
        make_job("vm-a", "job-1", "Success", "2024-01-09 06:00:00"),
        make_job("vm-a", "job-2", "Failed", "2024-01-09 06:00:00"),
    ];

    let report = rule.evaluate_job_status(&targets, &jobs).unwrap();
    assert!(report.passed());
}

#[test]
fn job_rule_reports_missing_history() {
    let rule = JobStatusRule::new(JobStatusConfig::default());
    let targets = vms(&["vm-a"]);

    let report = rule.evaluate_job_status(&targets, &[]).unwrap();
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].code, ReasonCode::NoJobHistory);
}

/// A malformed end_time is a data error for that VM only; the rest of the
/// batch still evaluates.
#[test]
fn job_rule_isolates_malformed_timestamps() {
    let rule = JobStatusRule::new(JobStatusConfig::default());
    let targets = vms(&["vm-bad", "vm-good"]);
    let jobs = vec![
        make_job("vm-bad", "job-1", "Success", "yesterday-ish"),
        make_job("vm-good", "job-2", "Success", "2024-01-09 06:00:00"),
    ];

    let report = rule.evaluate_job_status(&targets, &jobs).unwrap();
    assert_eq!(report.total, 2);
    assert_eq!(report.compliant, 1);
    assert_eq!(report.violations.len(), 1);
    let violation = &report.violations[0];
    assert_eq!(violation.entity, "vm-bad");
    assert_eq!(violation.code, ReasonCode::DataError);
    assert_eq!(report.data_errors().count(), 1);
}

// ---- Backup recency ----

/// now fixed at 2024-01-10 12:00:00, last backup 2024-01-09 00:00:00,
/// threshold 24h: age is 36.0h, flagged with the rounded age.
#[test]
fn recency_rule_flags_stale_backup_with_rounded_age() {
    let rule = BackupRecencyRule::new(RecencyConfig {
        max_age_hours: 24.0,
    });
    let now = parse_timestamp("2024-01-10 12:00:00").unwrap();
    let targets = vms(&["vm-a"]);
    let timestamps = vec![BackupTimestampRecord {
        vm: "vm-a".to_string(),
        last_backup_time: "2024-01-09 00:00:00".to_string(),
    }];

    let report = rule.evaluate_recency(&targets, &timestamps, now).unwrap();
    assert_eq!(report.violations.len(), 1);
    let violation = &report.violations[0];
    assert_eq!(violation.code, ReasonCode::BackupStale);
    match &violation.detail {
        Some(ViolationDetail::Recency {
            age_hours,
            max_age_hours,
            ..
        }) => {
            assert_eq!(*age_hours, 36.0);
            assert_eq!(*max_age_hours, 24.0);
        }
        other => panic!("expected recency detail, got {other:?}"),
    }
    assert!(violation.reason.contains("36"));
}

/// Age exactly at the threshold is compliant: the comparison is strict.
#[test]
fn recency_rule_boundary_age_is_compliant() {
    let rule = BackupRecencyRule::new(RecencyConfig {
        max_age_hours: 24.0,
    });
    let now = parse_timestamp("2024-01-10 00:00:00").unwrap();
    let targets = vms(&["vm-a"]);
    let timestamps = vec![BackupTimestampRecord {
        vm: "vm-a".to_string(),
        last_backup_time: "2024-01-09 00:00:00".to_string(),
    }];

    let report = rule.evaluate_recency(&targets, &timestamps, now).unwrap();
    assert!(report.passed());
}

#[test]
fn recency_rule_isolates_malformed_timestamp() {
    let rule = BackupRecencyRule::new(RecencyConfig::default());
    let now = parse_timestamp("2024-01-10 12:00:00").unwrap();
    let targets = vms(&["vm-bad", "vm-missing"]);
    let timestamps = vec![BackupTimestampRecord {
        vm: "vm-bad".to_string(),
        last_backup_time: "01/09/2024".to_string(),
    }];

    let report = rule.evaluate_recency(&targets, &timestamps, now).unwrap();
    assert_eq!(report.violations.len(), 2);
    let bad = report
        .violations
        .iter()
        .find(|v| v.entity == "vm-bad")
        .unwrap();
    assert_eq!(bad.code, ReasonCode::DataError);
    let missing = report
        .violations
        .iter()
        .find(|v| v.entity == "vm-missing")
        .unwrap();
    assert_eq!(missing.code, ReasonCode::NoBackupTimestamp);
}

// ---- Offsite replication ----

#[test]
fn replication_rule_classifies_each_failure_mode() {
    let rule = OffsiteReplicationRule::new(ReplicationConfig::default());
    let required = vms(&["vm-ok", "vm-missing", "vm-disabled", "vm-degraded"]);
    let replication = vec![
        ReplicationRecord {
            vm: "vm-ok".to_string(),
            offsite_enabled: true,
            replication_status: Some("Healthy".to_string()),
            offsite_target: Some("DR-Site-East".to_string()),
        },
        ReplicationRecord {
            vm: "vm-disabled".to_string(),
            offsite_enabled: false,
            replication_status: Some("Disabled".to_string()),
            offsite_target: None,
        },
        ReplicationRecord {
            vm: "vm-degraded".to_string(),
            offsite_enabled: true,
            replication_status: Some("Degraded".to_string()),
            offsite_target: Some("DR-Site-East".to_string()),
        },
    ];

    let report = rule.evaluate_replication(&required, &replication).unwrap();
    assert_eq!(report.total, 4);
    assert_eq!(report.compliant, 1);

    let missing = report
        .violations
        .iter()
        .find(|v| v.entity == "vm-missing")
        .unwrap();
    assert_eq!(missing.code, ReasonCode::NoReplicationData);

    let disabled = report
        .violations
        .iter()
        .find(|v| v.entity == "vm-disabled")
        .unwrap();
    assert_eq!(disabled.code, ReasonCode::ReplicationDisabled);

    let degraded = report
        .violations
        .iter()
        .find(|v| v.entity == "vm-degraded")
        .unwrap();
    assert_eq!(degraded.code, ReasonCode::ReplicationUnhealthy);
    assert!(degraded.reason.contains("Degraded"));
    assert!(degraded.reason.contains("Healthy"));
}

/// A record with replication enabled and no status field is compliant.
#[test]
fn replication_rule_absent_status_is_compliant() {
    let rule = OffsiteReplicationRule::new(ReplicationConfig::default());
    let required = vms(&["vm-a"]);
    let replication = vec![ReplicationRecord {
        vm: "vm-a".to_string(),
        offsite_enabled: true,
        replication_status: None,
        offsite_target: Some("DR-Site-East".to_string()),
    }];

    let report = rule.evaluate_replication(&required, &replication).unwrap();
    assert!(report.passed());
}
