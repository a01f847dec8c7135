//! Formats command implementation.
//!
//! Lists the recognized input formats and size buckets together with the
//! weights the estimator applies to them.

use crate::display::format_bytes;
use preflight_lib::prelude::*;
use preflight_lib::weights::{format_weight, size_multiplier};

/// Print the format weight and size bucket tables.
pub(crate) fn list_formats() {
    println!("{:<8} {:<16} {:>7}", "FORMAT", "EXTENSIONS", "WEIGHT");
    println!("{}", "-".repeat(33));
    for format in InputFormat::all() {
        let extensions = format.extensions();
        let extensions = if extensions.is_empty() {
            "(anything else)".to_string()
        } else {
            extensions.join(", ")
        };
        println!(
            "{:<8} {:<16} {:>7.1}",
            format.as_str(),
            extensions,
            format_weight(*format)
        );
    }

    println!("\n{:<8} {:<22} {:>10}", "SIZE", "RANGE", "MULTIPLIER");
    println!("{}", "-".repeat(42));
    for bucket in FileSizeBucket::all() {
        println!(
            "{:<8} {:<22} {:>10.1}",
            bucket.as_str(),
            bucket_range(*bucket),
            size_multiplier(*bucket)
        );
    }

    println!("\nFiles whose size cannot be read are counted as {}.", FileSizeBucket::Medium);
}

/// Formats a bucket's byte range, e.g. "1 MB - 5 MB".
fn bucket_range(bucket: FileSizeBucket) -> String {
    match bucket.byte_range() {
        (0, Some(upper)) => format!("< {}", format_bytes(upper)),
        (lower, Some(upper)) => format!("{} - {}", format_bytes(lower), format_bytes(upper)),
        (lower, None) => format!(">= {}", format_bytes(lower)),
    }
}
