//! Recompute orchestration for preflight memory estimation.
//!
//! - [`Session`] - Current selection and settings, rerun on every change
//! - [`Snapshot`] - Results of one complete cycle
//! - [`Observer`] - Callback notified of each published snapshot

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/preflight/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod session;
mod snapshot;

pub use session::{Observer, Session};
pub use snapshot::Snapshot;
