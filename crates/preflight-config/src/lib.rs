//! Persistent performance settings for preflight.
//!
//! - [`SettingsStore`] - Loads and saves
//!   [`PerformanceSettings`](preflight_types::PerformanceSettings)
//! - [`StoredSettings`] - On-disk representation with save timestamp
//! - [`StoreError`] - Errors from reading or writing the settings file

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/preflight/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod store;

pub use store::{Result, SETTINGS_FILE, SettingsStore, StoreError, StoredSettings};
