//! Static calibration tables.

use preflight_types::{ConversionMode, FileSizeBucket, InputFormat};

/// Resident memory of the host application in MB.
pub const APP_BASELINE_MB: f64 = 72.0;

/// Irreducible process floor in MB; no estimate goes below it.
pub const MIN_ESTIMATE_MB: u32 = 64;

/// Per-worker overhead range in MB when workers are separate processes.
pub const MULTIPROCESS_WORKER_MB: (f64, f64) = (24.0, 42.0);

/// Per-worker overhead range in MB when workers share the host process.
pub const IN_PROCESS_WORKER_MB: (f64, f64) = (12.0, 22.0);

/// Best-case spread applied to the workload term.
pub const LOW_SPREAD: f64 = 0.45;

/// Worst-case spread applied to the workload term.
pub const HIGH_SPREAD: f64 = 0.90;

/// Profiled-file count required for high confidence.
pub const HIGH_CONFIDENCE_MIN_FILES: usize = 20;

/// Typical in-memory parse cost per file, by format.
pub const FORMAT_WEIGHTS: &[(InputFormat, f64)] = &[
    (InputFormat::Pptx, 9.0),
    (InputFormat::Xlsx, 8.0),
    (InputFormat::Docx, 7.0),
    (InputFormat::Html, 5.0),
    (InputFormat::Other, 4.0),
    (InputFormat::Rtf, 3.0),
    (InputFormat::Json, 3.0),
    (InputFormat::Txt, 2.0),
    (InputFormat::Yaml, 2.0),
    (InputFormat::Md, 2.0),
    (InputFormat::Csv, 2.0),
];

/// Workload multiplier per size bucket.
pub const SIZE_MULTIPLIERS: &[(FileSizeBucket, f64)] = &[
    (FileSizeBucket::Tiny, 0.7),
    (FileSizeBucket::Small, 1.0),
    (FileSizeBucket::Medium, 1.3),
    (FileSizeBucket::Large, 1.8),
    (FileSizeBucket::XLarge, 2.4),
];

const OTHER_WEIGHT: f64 = 4.0;
const MEDIUM_MULTIPLIER: f64 = 1.3;

/// Returns the parse-cost weight of a format.
///
/// Formats missing from [`FORMAT_WEIGHTS`] use the `other` weight.
#[must_use]
pub fn format_weight(format: InputFormat) -> f64 {
    FORMAT_WEIGHTS
        .iter()
        .find(|(f, _)| *f == format)
        .map_or(OTHER_WEIGHT, |(_, weight)| *weight)
}

/// Returns the workload multiplier of a size bucket.
#[must_use]
pub fn size_multiplier(bucket: FileSizeBucket) -> f64 {
    SIZE_MULTIPLIERS
        .iter()
        .find(|(b, _)| *b == bucket)
        .map_or(MEDIUM_MULTIPLIER, |(_, multiplier)| *multiplier)
}

/// Multiplier used when no files are profiled.
#[must_use]
pub fn default_size_multiplier() -> f64 {
    size_multiplier(FileSizeBucket::Medium)
}

/// Returns the memory multiplier of a conversion mode.
#[must_use]
pub const fn mode_multiplier(mode: ConversionMode) -> f64 {
    match mode {
        ConversionMode::Speed => 1.15,
        ConversionMode::Power => 0.90,
    }
}

/// Returns the per-worker overhead range in MB for the execution topology.
#[must_use]
pub const fn worker_overhead_mb(multiprocess_enabled: bool) -> (f64, f64) {
    if multiprocess_enabled {
        MULTIPROCESS_WORKER_MB
    } else {
        IN_PROCESS_WORKER_MB
    }
}
