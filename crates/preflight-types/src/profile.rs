//! Aggregated classification of a file selection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{FileSizeBucket, InputFormat};

/// Per-format and per-size-bucket file counts for one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputProfilingResult {
    format_counts: BTreeMap<InputFormat, usize>,
    size_buckets: BTreeMap<FileSizeBucket, usize>,
}

impl InputProfilingResult {
    /// Creates an empty result.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            format_counts: BTreeMap::new(),
            size_buckets: BTreeMap::new(),
        }
    }

    /// Creates a result from explicit counts.
    ///
    /// The two maps are taken as given and need not agree on their totals.
    #[must_use]
    pub fn from_counts(
        format_counts: impl IntoIterator<Item = (InputFormat, usize)>,
        size_buckets: impl IntoIterator<Item = (FileSizeBucket, usize)>,
    ) -> Self {
        let mut result = Self::new();
        for (format, count) in format_counts {
            *result.format_counts.entry(format).or_default() += count;
        }
        for (bucket, count) in size_buckets {
            *result.size_buckets.entry(bucket).or_default() += count;
        }
        result
    }

    /// Records one classified file, incrementing both maps by exactly one.
    pub fn record(&mut self, format: InputFormat, bucket: FileSizeBucket) {
        *self.format_counts.entry(format).or_default() += 1;
        *self.size_buckets.entry(bucket).or_default() += 1;
    }

    /// Returns the file count per format.
    #[must_use]
    pub const fn format_counts(&self) -> &BTreeMap<InputFormat, usize> {
        &self.format_counts
    }

    /// Returns the file count per size bucket.
    #[must_use]
    pub const fn size_buckets(&self) -> &BTreeMap<FileSizeBucket, usize> {
        &self.size_buckets
    }

    /// Returns the number of files seen with the given format.
    #[must_use]
    pub fn format_count(&self, format: InputFormat) -> usize {
        self.format_counts.get(&format).copied().unwrap_or(0)
    }

    /// Returns the number of files in the given size bucket.
    #[must_use]
    pub fn bucket_count(&self, bucket: FileSizeBucket) -> usize {
        self.size_buckets.get(&bucket).copied().unwrap_or(0)
    }

    /// Total number of profiled files (sum of format counts).
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.format_counts.values().sum()
    }

    /// Sum of size-bucket counts.
    #[must_use]
    pub fn total_bucketed(&self) -> usize {
        self.size_buckets.values().sum()
    }

    /// Returns true if no files were profiled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_files() == 0
    }
}
