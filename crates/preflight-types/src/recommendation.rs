//! Execution policy recommendation.

use serde::{Deserialize, Serialize};

/// Whether a job should run immediately or be throttled and queued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionPolicyRecommendation {
    /// True if the caller should limit concurrency and defer work.
    pub should_throttle_and_queue: bool,
    /// Warning to show the user, if any.
    pub warning_message: Option<String>,
}

impl ExecutionPolicyRecommendation {
    /// Creates a recommendation.
    #[must_use]
    pub const fn new(should_throttle_and_queue: bool, warning_message: Option<String>) -> Self {
        Self {
            should_throttle_and_queue,
            warning_message,
        }
    }

    /// Run immediately with no warning.
    #[must_use]
    pub const fn proceed() -> Self {
        Self::new(false, None)
    }

    /// Returns the warning text, if any.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning_message.as_deref()
    }
}
