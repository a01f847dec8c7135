//! User-configurable performance settings.

use serde::{Deserialize, Serialize};

use crate::ConversionMode;

/// Smallest accepted RAM cap in megabytes.
pub const MIN_MAX_RAM_MB: u32 = 128;

/// Smallest accepted worker count.
pub const MIN_WORKER_COUNT: u32 = 1;

/// Clamps a RAM cap to [`MIN_MAX_RAM_MB`].
#[must_use]
pub const fn clamp_max_ram_mb(max_ram_mb: u32) -> u32 {
    if max_ram_mb < MIN_MAX_RAM_MB {
        MIN_MAX_RAM_MB
    } else {
        max_ram_mb
    }
}

/// Clamps a worker count to [`MIN_WORKER_COUNT`].
#[must_use]
pub const fn clamp_worker_count(worker_count: u32) -> u32 {
    if worker_count < MIN_WORKER_COUNT {
        MIN_WORKER_COUNT
    } else {
        worker_count
    }
}

/// Execution settings for a conversion job.
///
/// Out-of-range values are never rejected; the constructor and every setter
/// clamp them to their floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawSettings")]
pub struct PerformanceSettings {
    mode: ConversionMode,
    max_ram_mb: u32,
    worker_count: u32,
    multiprocess_enabled: bool,
}

impl PerformanceSettings {
    /// Default RAM cap in megabytes.
    pub const DEFAULT_MAX_RAM_MB: u32 = 500;
    /// Default worker count.
    pub const DEFAULT_WORKER_COUNT: u32 = 2;

    /// Creates settings, clamping the RAM cap and worker count.
    #[must_use]
    pub const fn new(
        mode: ConversionMode,
        max_ram_mb: u32,
        worker_count: u32,
        multiprocess_enabled: bool,
    ) -> Self {
        Self {
            mode,
            max_ram_mb: clamp_max_ram_mb(max_ram_mb),
            worker_count: clamp_worker_count(worker_count),
            multiprocess_enabled,
        }
    }

    /// Returns the conversion mode.
    #[must_use]
    pub const fn mode(&self) -> ConversionMode {
        self.mode
    }

    /// Returns the configured RAM cap in megabytes.
    #[must_use]
    pub const fn max_ram_mb(&self) -> u32 {
        self.max_ram_mb
    }

    /// Returns the number of conversion workers.
    #[must_use]
    pub const fn worker_count(&self) -> u32 {
        self.worker_count
    }

    /// Returns true if workers run as separate processes.
    #[must_use]
    pub const fn multiprocess_enabled(&self) -> bool {
        self.multiprocess_enabled
    }

    /// Sets the conversion mode.
    pub const fn set_mode(&mut self, mode: ConversionMode) {
        self.mode = mode;
    }

    /// Sets the RAM cap, clamped to [`MIN_MAX_RAM_MB`].
    pub const fn set_max_ram_mb(&mut self, max_ram_mb: u32) {
        self.max_ram_mb = clamp_max_ram_mb(max_ram_mb);
    }

    /// Sets the worker count, clamped to [`MIN_WORKER_COUNT`].
    pub const fn set_worker_count(&mut self, worker_count: u32) {
        self.worker_count = clamp_worker_count(worker_count);
    }

    /// Enables or disables multiprocess execution.
    pub const fn set_multiprocess_enabled(&mut self, enabled: bool) {
        self.multiprocess_enabled = enabled;
    }
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self::new(
            ConversionMode::Power,
            Self::DEFAULT_MAX_RAM_MB,
            Self::DEFAULT_WORKER_COUNT,
            true,
        )
    }
}

/// Unvalidated settings as they appear on disk.
///
/// Signed fields let negative values normalize instead of failing to parse.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawSettings {
    mode: ConversionMode,
    max_ram_mb: i64,
    worker_count: i64,
    multiprocess_enabled: bool,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            mode: ConversionMode::Power,
            max_ram_mb: i64::from(PerformanceSettings::DEFAULT_MAX_RAM_MB),
            worker_count: i64::from(PerformanceSettings::DEFAULT_WORKER_COUNT),
            multiprocess_enabled: true,
        }
    }
}

impl From<RawSettings> for PerformanceSettings {
    fn from(raw: RawSettings) -> Self {
        let narrow = |value: i64| u32::try_from(value.max(0)).unwrap_or(u32::MAX);
        Self::new(
            raw.mode,
            narrow(raw.max_ram_mb),
            narrow(raw.worker_count),
            raw.multiprocess_enabled,
        )
    }
}
