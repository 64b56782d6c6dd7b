//! Observability setup for botledger binaries.

pub mod attrs;
pub mod tracing_setup;
