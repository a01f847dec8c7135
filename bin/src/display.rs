//! Display utilities and output formatting for the preflight CLI.

use clap::ValueEnum;
use preflight_lib::prelude::*;
use preflight_lib::EstimateBreakdown;
use std::fmt::Write as _;

/// Output format for command results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

/// Notice shown when the recommendation calls for throttling.
pub(crate) const THROTTLE_NOTICE: &str = "Throttle + queue will be applied by default.";

/// Renders the pre-run summary for a completed cycle.
pub(crate) fn render_summary(snapshot: &Snapshot) -> String {
    let estimate = &snapshot.estimate;
    let mut out = String::new();

    let _ = writeln!(out, "Pre-run Summary");
    let _ = writeln!(out, "{:<24} {}", "Estimated runtime RAM:", estimate.label());
    let _ = writeln!(out, "{:<24} {} MB", "Configured cap:", snapshot.settings.max_ram_mb());
    let _ = writeln!(out, "{:<24} {}", "Status:", estimate.status().label());
    let _ = writeln!(out, "{:<24} {}", "Confidence:", estimate.confidence().label());
    let _ = writeln!(out, "{:<24} {}", "Files:", snapshot.profile.total_files());

    if let Some(warning) = snapshot.recommendation.warning() {
        let _ = writeln!(out, "\n{warning}");
    }
    if snapshot.should_throttle() {
        let _ = writeln!(out, "{THROTTLE_NOTICE}");
    }

    out
}

/// Renders the settings a cycle ran with.
pub(crate) fn render_settings(settings: &PerformanceSettings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<16} {}", "Mode:", settings.mode().label());
    let _ = writeln!(out, "{:<16} {} MB", "Max RAM:", settings.max_ram_mb());
    let _ = writeln!(out, "{:<16} {}", "Workers:", settings.worker_count());
    let _ = writeln!(
        out,
        "{:<16} {}",
        "Multiprocess:",
        if settings.multiprocess_enabled() { "enabled" } else { "disabled" }
    );
    out
}

/// Renders per-format and per-bucket counts and the estimate terms.
pub(crate) fn render_breakdown(
    profile: &InputProfilingResult,
    terms: &EstimateBreakdown,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:<10} {:>8}", "FORMAT", "FILES");
    let _ = writeln!(out, "{}", "-".repeat(19));
    for format in InputFormat::all() {
        let count = profile.format_count(*format);
        if count > 0 {
            let _ = writeln!(out, "{:<10} {:>8}", format.as_str(), count);
        }
    }

    let _ = writeln!(out, "\n{:<10} {:>8}", "SIZE", "FILES");
    let _ = writeln!(out, "{}", "-".repeat(19));
    for bucket in FileSizeBucket::all() {
        let count = profile.bucket_count(*bucket);
        if count > 0 {
            let _ = writeln!(out, "{:<10} {:>8}", bucket.as_str(), count);
        }
    }

    let _ = writeln!(out, "\nEstimate terms:");
    let _ = writeln!(out, "  workers           {}", terms.workers);
    let _ = writeln!(
        out,
        "  process floor     {:.0}-{:.0} MB",
        terms.process_floor_min_mb, terms.process_floor_max_mb
    );
    let _ = writeln!(out, "  format load       {:.1}", terms.format_load);
    let _ = writeln!(out, "  size multiplier   {:.3}", terms.size_multiplier);
    let _ = writeln!(out, "  mode multiplier   {:.2}", terms.mode_multiplier);
    let _ = writeln!(out, "  workload          {:.1} MB", terms.workload_mb());

    out
}

/// Formats a byte count with decimal units (e.g., "25 MB").
pub(crate) fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1_000;
    const MB: u64 = 1_000 * KB;
    const GB: u64 = 1_000 * MB;

    if bytes >= GB && bytes % GB == 0 {
        format!("{} GB", bytes / GB)
    } else if bytes >= MB && bytes % MB == 0 {
        format!("{} MB", bytes / MB)
    } else if bytes >= KB && bytes % KB == 0 {
        format!("{} KB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(status: EstimateStatus, warning: Option<&str>, throttle: bool) -> Snapshot {
        Snapshot {
            generation: 1,
            settings: PerformanceSettings::default(),
            profile: InputProfilingResult::from_counts(
                [(InputFormat::Docx, 3)],
                [(FileSizeBucket::Small, 3)],
            ),
            estimate: MemoryEstimate::new(130, 170, status, EstimateConfidence::Medium),
            recommendation: ExecutionPolicyRecommendation::new(
                throttle,
                warning.map(str::to_string),
            ),
        }
    }

    #[test]
    fn test_safe_summary() {
        let text = render_summary(&snapshot(EstimateStatus::Safe, None, false));
        assert!(text.contains("130-170 MB"));
        assert!(text.contains("500 MB"));
        assert!(text.contains("Safe"));
        assert!(text.contains("Files:"));
        assert!(!text.contains(THROTTLE_NOTICE));
    }

    #[test]
    fn test_over_cap_summary_shows_notice() {
        let text = render_summary(&snapshot(
            EstimateStatus::OverCap,
            Some("Estimated RAM usage exceeds the configured cap (500 MB)."),
            true,
        ));
        assert!(text.contains("Over cap"));
        assert!(text.contains("exceeds the configured cap"));
        assert!(text.contains(THROTTLE_NOTICE));
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1_000_000), "1 MB");
        assert_eq!(format_bytes(25_000_000), "25 MB");
        assert_eq!(format_bytes(1_500), "1500 B");
    }
}
