//! Benchmark fixtures for preflight.

use preflight_lib::{FileSizeBucket, InputFormat, InputProfilingResult};
use std::path::PathBuf;
use tempfile::TempDir;

/// Builds a profile of `files` inputs spread across every format and bucket.
#[must_use]
pub fn synthetic_profile(files: usize) -> InputProfilingResult {
    let formats = InputFormat::all();
    let buckets = FileSizeBucket::all();

    let mut profile = InputProfilingResult::new();
    for i in 0..files {
        profile.record(formats[i % formats.len()], buckets[i % buckets.len()]);
    }
    profile
}

/// A temporary directory populated with small input files.
#[derive(Debug)]
pub struct Selection {
    /// Keeps the directory alive for the selection's lifetime.
    pub dir: TempDir,
    /// Paths of the created files.
    pub files: Vec<PathBuf>,
}

/// Creates `count` small files cycling through every recognized extension.
///
/// # Panics
///
/// Panics if the temporary directory or a file cannot be created.
#[must_use]
pub fn temp_selection(count: usize) -> Selection {
    let dir = TempDir::new().expect("create temp dir");
    let extensions: Vec<&str> = InputFormat::all()
        .iter()
        .flat_map(|format| format.extensions().iter().copied())
        .collect();

    let files = (0..count)
        .map(|i| {
            let path = dir
                .path()
                .join(format!("input{i}.{}", extensions[i % extensions.len()]));
            std::fs::write(&path, vec![0u8; (i % 7) * 512]).expect("write input file");
            path
        })
        .collect();

    Selection { dir, files }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_profile_totals() {
        let profile = synthetic_profile(110);
        assert_eq!(profile.total_files(), 110);
        assert_eq!(profile.total_bucketed(), 110);
        assert_eq!(profile.format_count(InputFormat::Pptx), 10);
    }

    #[test]
    fn test_temp_selection_creates_files() {
        let selection = temp_selection(5);
        assert_eq!(selection.files.len(), 5);
        assert!(selection.files.iter().all(|f| f.exists()));
    }
}
