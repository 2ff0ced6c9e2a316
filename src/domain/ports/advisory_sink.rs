//! Advisory delivery port.

use crate::domain::models::Advisory;

/// Observer for advisories raised during resolution.
///
/// Emission never affects control flow.
pub trait AdvisorySink: Send + Sync {
    /// Deliver one advisory.
    fn emit(&self, advisory: &Advisory);
}
