//! Report rendering for the downstream harness.

use serde_json::json;

use crate::audit::AuditResult;

/// Trait for audit result reporters.
pub trait Reporter {
    fn name(&self) -> &'static str;
    fn generate(&self, result: &AuditResult) -> Result<String, String>;
}

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, result: &AuditResult) -> Result<String, String> {
        let rules: Vec<serde_json::Value> = result
            .reports
            .iter()
            .map(|r| {
                json!({
                    "rule_id": r.rule_id,
                    "passed": r.passed(),
                    "total": r.total,
                    "compliant": r.compliant,
                    "violation_count": r.violations.len(),
                    "violations": r.violations,
                })
            })
            .collect();

        let output = json!({
            "overall_passed": result.summary.passed,
            "total_violations": result.summary.total_violations,
            "rule_count": result.summary.rules_run,
            "rules": rules,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
