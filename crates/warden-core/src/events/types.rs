//! Audit lifecycle event payloads.

use serde::{Deserialize, Serialize};

/// A rule evaluation has started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleStartedEvent {
    pub rule_id: String,
}

/// A rule evaluation has completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCompletedEvent {
    pub rule_id: String,
    pub total: usize,
    pub compliant: usize,
    pub violation_count: usize,
}

/// A violation was detected during rule evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationDetectedEvent {
    pub rule_id: String,
    pub entity: String,
    pub reason_code: String,
}

/// An audit run has completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditCompletedEvent {
    pub rules_run: usize,
    pub rules_passed: usize,
    pub total_violations: usize,
    pub passed: bool,
}
