//! # Logging Collaborator
//!
//! The orchestrator reports through an injected [`OptimizerLogger`]
//! instead of a global logger. The library ships two sinks:
//! - [`DiscardLogger`]: drops everything (the default)
//! - [`TracingLogger`]: forwards to `tracing` at INFO / ERROR level
//!
//! Installing a `tracing` subscriber is left to the application.

/// Sink for the orchestrator's progress lines.
pub trait OptimizerLogger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Logger that discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardLogger;

impl OptimizerLogger for DiscardLogger {
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Logger that emits `tracing` events under the `image_optimizer` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl OptimizerLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "image_optimizer", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "image_optimizer", "{}", message);
    }
}
