//! Compliance rules: ten evaluators over observed infrastructure records.
//!
//! Each rule is a pure computation over a target list and one or more
//! observed-record collections. A rule never drops an entity: every name
//! in its target list lands in the compliant count or the violation list
//! exactly once.

pub mod backup;
pub mod datastore;

use warden_core::errors::RuleError;

use crate::audit::AuditInput;
use crate::report::{RuleId, RuleReport};

/// Trait for compliance rule implementations.
pub trait ComplianceRule: Send + Sync {
    fn id(&self) -> RuleId;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn evaluate(&self, input: &AuditInput) -> Result<RuleReport, RuleError>;
}
