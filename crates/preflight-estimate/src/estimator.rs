//! Memory estimation logic.

use preflight_types::{
    EstimateConfidence, EstimateStatus, InputProfilingResult, MemoryEstimate, MemoryEstimateInput,
};

use crate::weights::{
    APP_BASELINE_MB, HIGH_CONFIDENCE_MIN_FILES, HIGH_SPREAD, LOW_SPREAD, MIN_ESTIMATE_MB,
    default_size_multiplier, format_weight, mode_multiplier, size_multiplier, worker_overhead_mb,
};

/// Intermediate terms of one estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateBreakdown {
    /// Workers after clamping.
    pub workers: u32,
    /// Mode multiplier applied to the workload term.
    pub mode_multiplier: f64,
    /// Lower per-worker overhead floor (`workers * low overhead`).
    pub process_floor_min_mb: f64,
    /// Upper per-worker overhead floor (`workers * high overhead`).
    pub process_floor_max_mb: f64,
    /// Sum of file counts weighted by format parse cost.
    pub format_load: f64,
    /// Count-weighted average size multiplier.
    pub size_multiplier: f64,
    /// Unrounded lower bound in MB.
    pub raw_min_mb: f64,
    /// Unrounded upper bound in MB.
    pub raw_max_mb: f64,
}

impl EstimateBreakdown {
    /// Workload term before the best/worst-case spread.
    #[must_use]
    pub fn workload_mb(&self) -> f64 {
        self.format_load * self.size_multiplier * self.mode_multiplier
    }
}

/// Runtime memory estimator.
///
/// Deterministic and free of side effects: every estimate depends only on
/// its [`MemoryEstimateInput`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryEstimator;

impl MemoryEstimator {
    /// Creates a new estimator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Estimates the memory range, status, and confidence for a job.
    #[must_use]
    pub fn estimate(&self, input: &MemoryEstimateInput) -> MemoryEstimate {
        let breakdown = self.breakdown(input);

        let min_mb = ceil_mb(breakdown.raw_min_mb).max(MIN_ESTIMATE_MB);
        let max_mb = ceil_mb(breakdown.raw_max_mb).max(min_mb);

        let status = EstimateStatus::classify(max_mb, input.configured_max_ram_mb());
        let confidence = Self::confidence(input.profile());

        MemoryEstimate::new(min_mb, max_mb, status, confidence)
    }

    /// Computes the intermediate terms of an estimate.
    #[must_use]
    pub fn breakdown(&self, input: &MemoryEstimateInput) -> EstimateBreakdown {
        let workers = input.worker_count().max(1);
        let mode_multiplier = mode_multiplier(input.mode());

        let (low_overhead, high_overhead) = worker_overhead_mb(input.multiprocess_enabled());
        let process_floor_min_mb = f64::from(workers) * low_overhead;
        let process_floor_max_mb = f64::from(workers) * high_overhead;

        let format_load = Self::format_load(input.profile());
        let size_multiplier = Self::size_multiplier(input.profile());
        let workload = format_load * size_multiplier * mode_multiplier;

        EstimateBreakdown {
            workers,
            mode_multiplier,
            process_floor_min_mb,
            process_floor_max_mb,
            format_load,
            size_multiplier,
            raw_min_mb: APP_BASELINE_MB + process_floor_min_mb + workload * LOW_SPREAD,
            raw_max_mb: APP_BASELINE_MB + process_floor_max_mb + workload * HIGH_SPREAD,
        }
    }

    /// Sum over observed formats of count times parse-cost weight.
    fn format_load(profile: &InputProfilingResult) -> f64 {
        profile
            .format_counts()
            .iter()
            .map(|(format, count)| *count as f64 * format_weight(*format))
            .sum()
    }

    /// Count-weighted average of the size multipliers, or the medium
    /// multiplier when nothing was profiled.
    fn size_multiplier(profile: &InputProfilingResult) -> f64 {
        let total = profile.total_bucketed();
        if total == 0 {
            return default_size_multiplier();
        }

        let weighted: f64 = profile
            .size_buckets()
            .iter()
            .map(|(bucket, count)| *count as f64 * size_multiplier(*bucket))
            .sum();
        weighted / total as f64
    }

    fn confidence(profile: &InputProfilingResult) -> EstimateConfidence {
        let by_format = profile.total_files();
        if by_format >= HIGH_CONFIDENCE_MIN_FILES && profile.total_bucketed() == by_format {
            EstimateConfidence::High
        } else {
            EstimateConfidence::Medium
        }
    }

    /// Formats an estimate as a human-readable summary.
    #[must_use]
    pub fn format_estimate(estimate: &MemoryEstimate, cap_mb: u32) -> String {
        format!(
            "Estimated runtime RAM: {}\n\
             Configured cap: {} MB\n\
             Status: {}\n\
             Confidence: {}",
            estimate.label(),
            cap_mb,
            estimate.status().label(),
            estimate.confidence().label(),
        )
    }
}

/// Rounds megabytes up, saturating at `u32::MAX`.
fn ceil_mb(value: f64) -> u32 {
    value.ceil() as u32
}
