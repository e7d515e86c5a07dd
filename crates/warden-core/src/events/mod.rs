//! Audit lifecycle events and the handler trait.

pub mod handler;
pub mod types;

pub use handler::{AuditEventHandler, NoopEventHandler};
pub use types::{
    AuditCompletedEvent, RuleCompletedEvent, RuleStartedEvent, ViolationDetectedEvent,
};
