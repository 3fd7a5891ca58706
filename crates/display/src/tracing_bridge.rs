//! Bridge between the trace sink and the `tracing` ecosystem.
//!
//! Enables routing plugin trace lines through whatever `tracing` subscriber
//! the embedding process already runs, instead of a dedicated writer. Each
//! emitted line becomes one debug-level event under the `connection::trace`
//! target.

use tracing_subscriber::EnvFilter;

use crate::sink::TraceSink;

/// Sink that forwards every line as a `tracing` debug event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Installs a process-global `fmt` subscriber honouring `RUST_LOG`, for
    /// embedders that have not configured `tracing` themselves.
    ///
    /// Returns `false` when a global subscriber was already installed.
    pub fn init_default_subscriber() -> bool {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init()
            .is_ok()
    }
}

impl TraceSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::debug!(target: "connection::trace", "{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_emits_without_a_subscriber() {
        // No subscriber installed: the event is dropped, not panicked on.
        TracingSink::new().emit("unobserved line");
    }
}
