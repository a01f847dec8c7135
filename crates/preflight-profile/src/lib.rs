//! Input file profiling for preflight memory estimation.
//!
//! - [`InputProfiler`] - Classifies a selection of files by format and size bucket
//! - [`SizeProbe`] - Source of file sizes, [`FsProbe`] reads filesystem metadata
//! - [`profile_concurrent`] - Async profiling with bounded concurrent metadata reads

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/preflight/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod concurrent;
mod profiler;

pub use concurrent::{DEFAULT_CONCURRENCY, profile_concurrent};
pub use profiler::{FALLBACK_BUCKET, FsProbe, InputProfiler, SizeProbe};
