//! Runtime memory estimation for batch document conversion jobs.
//!
//! This crate turns an input profile plus execution settings into a memory
//! range using fixed calibration tables:
//!
//! - [`MemoryEstimator`] - Computes a [`MemoryEstimate`](preflight_types::MemoryEstimate)
//! - [`EstimateBreakdown`] - Intermediate terms of one estimation
//! - [`weights`] - Per-format weights, per-bucket multipliers and overhead constants

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/preflight/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
pub mod weights;

pub use estimator::{EstimateBreakdown, MemoryEstimator};
