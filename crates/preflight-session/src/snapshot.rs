//! Published results of one recompute cycle.

use serde::Serialize;

use preflight_types::{
    ExecutionPolicyRecommendation, InputProfilingResult, MemoryEstimate, PerformanceSettings,
};

/// Profile, estimate, and recommendation from one completed cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Cycle number, starting at 1 for the cycle run on construction.
    pub generation: u64,
    /// Settings the cycle ran with.
    pub settings: PerformanceSettings,
    /// Profile of the selection.
    pub profile: InputProfilingResult,
    /// Memory estimate.
    pub estimate: MemoryEstimate,
    /// Execution policy derived from the estimate.
    pub recommendation: ExecutionPolicyRecommendation,
}

impl Snapshot {
    /// Returns true if the recommendation calls for throttling.
    #[must_use]
    pub const fn should_throttle(&self) -> bool {
        self.recommendation.should_throttle_and_queue
    }

    /// Formats the estimate range, e.g. `"84-94 MB"`.
    #[must_use]
    pub fn estimate_label(&self) -> String {
        self.estimate.label()
    }
}
