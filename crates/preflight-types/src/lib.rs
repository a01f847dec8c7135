//! Core types for preflight memory estimation.
//!
//! This crate provides the value types shared across the preflight pipeline:
//!
//! - [`InputFormat`] - Document format derived from a file extension
//! - [`FileSizeBucket`] - Coarse size class derived from a byte count
//! - [`InputProfilingResult`] - Per-format and per-bucket file counts
//! - [`ConversionMode`] and [`PerformanceSettings`] - Execution settings
//! - [`MemoryEstimateInput`] and [`MemoryEstimate`] - Estimator input and output
//! - [`ExecutionPolicyRecommendation`] - Throttle-and-queue decision

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/preflight/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod estimate;
mod format;
mod mode;
mod profile;
mod recommendation;
mod settings;
mod size_bucket;

pub use error::{PreflightError, Result};
pub use estimate::{
    EstimateConfidence, EstimateStatus, MemoryEstimate, MemoryEstimateInput, NEAR_CAP_RATIO,
};
pub use format::InputFormat;
pub use mode::ConversionMode;
pub use profile::InputProfilingResult;
pub use recommendation::ExecutionPolicyRecommendation;
pub use settings::{
    MIN_MAX_RAM_MB, MIN_WORKER_COUNT, PerformanceSettings, clamp_max_ram_mb, clamp_worker_count,
};
pub use size_bucket::FileSizeBucket;
