//! CLI command implementations.

pub(crate) mod estimate;
pub(crate) mod formats;
pub(crate) mod settings;

use anyhow::{Context, Result};
use clap::Args;
use preflight_lib::prelude::*;
use std::path::PathBuf;

/// Settings flags shared by `estimate` and `settings set`.
///
/// Out-of-range numbers are clamped rather than rejected.
#[derive(Args, Debug, Default)]
pub(crate) struct SettingsOverrides {
    /// Conversion mode (speed, power)
    #[arg(short, long)]
    pub(crate) mode: Option<String>,

    /// Maximum RAM in MB (minimum 128)
    #[arg(long = "max-ram", allow_negative_numbers = true)]
    pub(crate) max_ram_mb: Option<i64>,

    /// Number of conversion workers (minimum 1)
    #[arg(short, long, allow_negative_numbers = true)]
    pub(crate) workers: Option<i64>,

    /// Run workers as separate processes
    #[arg(long, conflicts_with = "no_multiprocess")]
    pub(crate) multiprocess: bool,

    /// Run workers inside the main process
    #[arg(long)]
    pub(crate) no_multiprocess: bool,
}

impl SettingsOverrides {
    /// Returns true if no flag was given.
    pub(crate) const fn is_empty(&self) -> bool {
        self.mode.is_none()
            && self.max_ram_mb.is_none()
            && self.workers.is_none()
            && self.multiprocess_enabled().is_none()
    }

    /// Returns the requested multiprocess setting, if either switch was given.
    const fn multiprocess_enabled(&self) -> Option<bool> {
        if self.multiprocess {
            Some(true)
        } else if self.no_multiprocess {
            Some(false)
        } else {
            None
        }
    }

    /// Applies the given flags on top of `settings`.
    pub(crate) fn apply(&self, mut settings: PerformanceSettings) -> Result<PerformanceSettings> {
        if let Some(mode) = &self.mode {
            let mode = mode
                .parse::<ConversionMode>()
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            settings.set_mode(mode);
        }
        if let Some(max_ram_mb) = self.max_ram_mb {
            settings.set_max_ram_mb(narrow(max_ram_mb));
        }
        if let Some(workers) = self.workers {
            settings.set_worker_count(narrow(workers));
        }
        if let Some(enabled) = self.multiprocess_enabled() {
            settings.set_multiprocess_enabled(enabled);
        }
        Ok(settings)
    }
}

/// Narrows a signed flag value to `u32`; negatives become 0 and are then clamped.
fn narrow(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Opens the settings store at `dir`, or at the default location.
pub(crate) fn open_store(dir: Option<PathBuf>) -> Result<SettingsStore> {
    let store = match dir {
        Some(dir) => SettingsStore::new(dir),
        None => SettingsStore::with_default_path(),
    };
    store.context("Failed to open settings directory")
}
