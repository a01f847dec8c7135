//! Memory estimate inputs and outputs.

use serde::{Deserialize, Serialize};

use crate::settings::{clamp_max_ram_mb, clamp_worker_count};
use crate::{ConversionMode, InputProfilingResult, PerformanceSettings};

/// Fraction of the cap at which an estimate counts as near the cap.
pub const NEAR_CAP_RATIO: f64 = 0.85;

/// Classification of an estimate's upper bound against the configured cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EstimateStatus {
    /// Comfortably below the cap.
    Safe,
    /// At or above 85% of the cap, but not over it.
    NearCap,
    /// Above the cap.
    OverCap,
}

impl EstimateStatus {
    /// Classifies an upper memory bound against a cap, both in megabytes.
    ///
    /// Over-cap is checked first, then near-cap. The near-cap threshold is
    /// `floor(cap * 0.85)`.
    #[must_use]
    pub fn classify(max_mb: u32, cap_mb: u32) -> Self {
        let near_cap_threshold = (f64::from(cap_mb) * NEAR_CAP_RATIO) as u32;
        if max_mb > cap_mb {
            Self::OverCap
        } else if max_mb >= near_cap_threshold {
            Self::NearCap
        } else {
            Self::Safe
        }
    }

    /// Returns the status as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::NearCap => "nearCap",
            Self::OverCap => "overCap",
        }
    }

    /// Returns the short human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::NearCap => "Near cap",
            Self::OverCap => "Over cap",
        }
    }
}

impl std::fmt::Display for EstimateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How representative the profiled sample is.
///
/// Advisory only: there is deliberately no "low" level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateConfidence {
    /// Large sample, every file classified by format and size.
    High,
    /// Small or partially classified sample.
    Medium,
}

impl EstimateConfidence {
    /// Returns the confidence as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }

    /// Returns the capitalized label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

impl std::fmt::Display for EstimateConfidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Frozen input to a single memory estimation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEstimateInput {
    mode: ConversionMode,
    worker_count: u32,
    multiprocess_enabled: bool,
    profile: InputProfilingResult,
    configured_max_ram_mb: u32,
}

impl MemoryEstimateInput {
    /// Creates an estimation input, clamping the worker count and RAM cap.
    #[must_use]
    pub const fn new(
        mode: ConversionMode,
        worker_count: u32,
        multiprocess_enabled: bool,
        profile: InputProfilingResult,
        configured_max_ram_mb: u32,
    ) -> Self {
        Self {
            mode,
            worker_count: clamp_worker_count(worker_count),
            multiprocess_enabled,
            profile,
            configured_max_ram_mb: clamp_max_ram_mb(configured_max_ram_mb),
        }
    }

    /// Combines a profile with the current settings.
    #[must_use]
    pub fn from_settings(profile: &InputProfilingResult, settings: &PerformanceSettings) -> Self {
        Self::new(
            settings.mode(),
            settings.worker_count(),
            settings.multiprocess_enabled(),
            profile.clone(),
            settings.max_ram_mb(),
        )
    }

    /// Returns the conversion mode.
    #[must_use]
    pub const fn mode(&self) -> ConversionMode {
        self.mode
    }

    /// Returns the worker count (at least 1).
    #[must_use]
    pub const fn worker_count(&self) -> u32 {
        self.worker_count
    }

    /// Returns true if workers run as separate processes.
    #[must_use]
    pub const fn multiprocess_enabled(&self) -> bool {
        self.multiprocess_enabled
    }

    /// Returns the profiled format and size-bucket counts.
    #[must_use]
    pub const fn profile(&self) -> &InputProfilingResult {
        &self.profile
    }

    /// Returns the RAM cap in megabytes (at least 128).
    #[must_use]
    pub const fn configured_max_ram_mb(&self) -> u32 {
        self.configured_max_ram_mb
    }
}

/// Predicted runtime memory range with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawEstimate")]
pub struct MemoryEstimate {
    min_mb: u32,
    max_mb: u32,
    status: EstimateStatus,
    confidence: EstimateConfidence,
}

impl MemoryEstimate {
    /// Creates an estimate; bounds given out of order are swapped.
    #[must_use]
    pub const fn new(
        min_mb: u32,
        max_mb: u32,
        status: EstimateStatus,
        confidence: EstimateConfidence,
    ) -> Self {
        let (min_mb, max_mb) = if min_mb <= max_mb {
            (min_mb, max_mb)
        } else {
            (max_mb, min_mb)
        };
        Self {
            min_mb,
            max_mb,
            status,
            confidence,
        }
    }

    /// Lower bound in megabytes.
    #[must_use]
    pub const fn min_mb(&self) -> u32 {
        self.min_mb
    }

    /// Upper bound in megabytes.
    #[must_use]
    pub const fn max_mb(&self) -> u32 {
        self.max_mb
    }

    /// Status of the upper bound against the cap.
    #[must_use]
    pub const fn status(&self) -> EstimateStatus {
        self.status
    }

    /// Confidence in the estimate.
    #[must_use]
    pub const fn confidence(&self) -> EstimateConfidence {
        self.confidence
    }

    /// Formats the range as `"{min}-{max} MB"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{} MB", self.min_mb, self.max_mb)
    }
}

/// Estimate fields as they appear in serialized form, before ordering.
#[derive(Debug, Deserialize)]
struct RawEstimate {
    min_mb: u32,
    max_mb: u32,
    status: EstimateStatus,
    confidence: EstimateConfidence,
}

impl From<RawEstimate> for MemoryEstimate {
    fn from(raw: RawEstimate) -> Self {
        Self::new(raw.min_mb, raw.max_mb, raw.status, raw.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(EstimateStatus::classify(501, 500), EstimateStatus::OverCap);
        assert_eq!(EstimateStatus::classify(500, 500), EstimateStatus::NearCap);
        assert_eq!(EstimateStatus::classify(425, 500), EstimateStatus::NearCap);
        assert_eq!(EstimateStatus::classify(424, 500), EstimateStatus::Safe);
    }

    #[test]
    fn test_near_cap_threshold_truncates() {
        // 650 * 0.85 = 552.5
        assert_eq!(EstimateStatus::classify(552, 650), EstimateStatus::NearCap);
        assert_eq!(EstimateStatus::classify(551, 650), EstimateStatus::Safe);
    }

    #[test]
    fn test_estimate_swaps_bounds() {
        let estimate =
            MemoryEstimate::new(300, 200, EstimateStatus::Safe, EstimateConfidence::High);
        assert_eq!(estimate.min_mb(), 200);
        assert_eq!(estimate.max_mb(), 300);
        assert_eq!(estimate.label(), "200-300 MB");
    }

    #[test]
    fn test_input_clamps() {
        let input = MemoryEstimateInput::new(
            ConversionMode::Speed,
            0,
            true,
            InputProfilingResult::new(),
            0,
        );
        assert_eq!(input.worker_count(), 1);
        assert_eq!(input.configured_max_ram_mb(), 128);
    }

    #[test]
    fn test_input_from_settings() {
        let settings = PerformanceSettings::new(ConversionMode::Speed, 1024, 4, false);
        let profile = InputProfilingResult::from_counts(
            [(crate::InputFormat::Csv, 3)],
            [(crate::FileSizeBucket::Tiny, 3)],
        );
        let input = MemoryEstimateInput::from_settings(&profile, &settings);

        assert_eq!(input.mode(), ConversionMode::Speed);
        assert_eq!(input.worker_count(), 4);
        assert!(!input.multiprocess_enabled());
        assert_eq!(input.configured_max_ram_mb(), 1024);
        assert_eq!(input.profile(), &profile);
    }

    #[test]
    fn test_labels() {
        assert_eq!(EstimateStatus::NearCap.label(), "Near cap");
        assert_eq!(EstimateStatus::OverCap.as_str(), "overCap");
        assert_eq!(EstimateConfidence::Medium.label(), "Medium");
    }

    #[test]
    fn test_deserialized_bounds_are_ordered() {
        let estimate: MemoryEstimate = serde_json::from_str(
            r#"{"min_mb":300,"max_mb":200,"status":"safe","confidence":"high"}"#,
        )
        .unwrap();

        assert_eq!(estimate.min_mb(), 200);
        assert_eq!(estimate.max_mb(), 300);
        assert_eq!(estimate.status(), EstimateStatus::Safe);
        assert_eq!(estimate.confidence(), EstimateConfidence::High);
    }
}
