//! Logging setup for the Warden engine.

pub mod setup;

pub use setup::init_tracing;
