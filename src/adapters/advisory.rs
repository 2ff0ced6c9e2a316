//! Advisory sinks.

use std::sync::Mutex;

use tracing::warn;

use crate::domain::models::Advisory;
use crate::domain::ports::AdvisorySink;

/// Forwards advisories to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAdvisorySink;

impl AdvisorySink for TracingAdvisorySink {
    fn emit(&self, advisory: &Advisory) {
        match advisory {
            Advisory::EnvironmentFallback { service, variable } => {
                warn!(service = %service, variable = %variable, "{}", advisory.message());
            }
        }
    }
}

/// Records advisories so callers can inspect them afterwards.
#[derive(Debug, Default)]
pub struct CollectingAdvisorySink {
    seen: Mutex<Vec<Advisory>>,
}

impl CollectingAdvisorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advisories received so far, oldest first.
    pub fn advisories(&self) -> Vec<Advisory> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }

    /// Number of advisories received.
    pub fn len(&self) -> usize {
        self.seen.lock().map(|seen| seen.len()).unwrap_or(0)
    }

    /// True when nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AdvisorySink for CollectingAdvisorySink {
    fn emit(&self, advisory: &Advisory) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(advisory.clone());
        }
    }
}
