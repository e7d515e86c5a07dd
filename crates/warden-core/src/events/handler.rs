//! AuditEventHandler trait with no-op defaults.

use super::types::*;

/// Trait for observing audit lifecycle events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. The trait requires `Send + Sync`
/// because rule evaluations run on worker threads.
pub trait AuditEventHandler: Send + Sync {
    fn on_rule_started(&self, _event: &RuleStartedEvent) {}
    fn on_rule_completed(&self, _event: &RuleCompletedEvent) {}
    fn on_violation_detected(&self, _event: &ViolationDetectedEvent) {}
    fn on_audit_completed(&self, _event: &AuditCompletedEvent) {}
}

/// Handler that ignores every event.
#[derive(Debug, Default)]
pub struct NoopEventHandler;

impl AuditEventHandler for NoopEventHandler {}
