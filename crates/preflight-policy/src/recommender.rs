//! Status to policy mapping.

use preflight_types::{EstimateStatus, ExecutionPolicyRecommendation, MemoryEstimate};

/// Derives an execution policy from an estimate's status.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyRecommender;

impl PolicyRecommender {
    /// Creates a new recommender.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Recommends whether to throttle and queue, with an optional warning.
    #[must_use]
    pub fn recommend(
        &self,
        estimate: &MemoryEstimate,
        cap_mb: u32,
    ) -> ExecutionPolicyRecommendation {
        match estimate.status() {
            EstimateStatus::Safe => ExecutionPolicyRecommendation::proceed(),
            EstimateStatus::NearCap => ExecutionPolicyRecommendation::new(
                false,
                Some(format!(
                    "Estimated RAM usage is near the configured cap ({cap_mb} MB)."
                )),
            ),
            EstimateStatus::OverCap => ExecutionPolicyRecommendation::new(
                true,
                Some(format!(
                    "Estimated RAM usage exceeds the configured cap ({cap_mb} MB). \
                     Throttle + queue is recommended."
                )),
            ),
        }
    }
}
