//! Pre-run memory estimation and admission control for batch document conversion.
//!
//! This is a facade crate that re-exports functionality from the preflight
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use preflight_lib::prelude::*;
//!
//! let files = vec!["deck.pptx", "report.docx", "data.csv"];
//! let profile = InputProfiler::new().profile(&files);
//!
//! let settings = PerformanceSettings::new(ConversionMode::Speed, 1024, 4, true);
//! let input = MemoryEstimateInput::from_settings(&profile, &settings);
//! let estimate = MemoryEstimator::new().estimate(&input);
//! let recommendation = PolicyRecommender::new().recommend(&estimate, settings.max_ram_mb());
//!
//! println!("{} ({})", estimate.label(), estimate.status().label());
//! if let Some(warning) = recommendation.warning() {
//!     println!("{warning}");
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/preflight/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use preflight_types::*;

pub use preflight_estimate::{EstimateBreakdown, MemoryEstimator, weights};
pub use preflight_policy::PolicyRecommender;
pub use preflight_profile::{
    DEFAULT_CONCURRENCY, FALLBACK_BUCKET, FsProbe, InputProfiler, SizeProbe, profile_concurrent,
};

#[cfg(feature = "session")]
pub use preflight_session::{Observer, Session, Snapshot};

#[cfg(feature = "config")]
pub use preflight_config::{SettingsStore, StoreError, StoredSettings};

/// Profiles a file selection from the filesystem.
pub fn profile<I>(files: I) -> InputProfilingResult
where
    I: IntoIterator,
    I::Item: AsRef<std::path::Path>,
{
    InputProfiler::new().profile(files)
}

/// Estimates memory for one input.
#[must_use]
pub fn estimate(input: &MemoryEstimateInput) -> MemoryEstimate {
    MemoryEstimator::new().estimate(input)
}

/// Derives the execution policy for an estimate and cap.
#[must_use]
pub fn recommend(estimate: &MemoryEstimate, cap_mb: u32) -> ExecutionPolicyRecommendation {
    PolicyRecommender::new().recommend(estimate, cap_mb)
}

/// Prelude module for convenient imports.
///
/// ```
/// use preflight_lib::prelude::*;
/// ```
pub mod prelude {
    pub use preflight_types::{
        ConversionMode, EstimateConfidence, EstimateStatus, ExecutionPolicyRecommendation,
        FileSizeBucket, InputFormat, InputProfilingResult, MemoryEstimate, MemoryEstimateInput,
        PerformanceSettings, PreflightError,
    };

    pub use preflight_estimate::MemoryEstimator;
    pub use preflight_policy::PolicyRecommender;
    pub use preflight_profile::{InputProfiler, SizeProbe, profile_concurrent};

    #[cfg(feature = "session")]
    pub use preflight_session::{Session, Snapshot};

    #[cfg(feature = "config")]
    pub use preflight_config::SettingsStore;
}
