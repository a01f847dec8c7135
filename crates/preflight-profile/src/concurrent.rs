//! Concurrent input profiling.

use std::path::PathBuf;

use futures::stream::{self, StreamExt};
use preflight_types::{FileSizeBucket, InputFormat, InputProfilingResult};

use crate::profiler::bucket_for;

/// Default number of in-flight metadata reads.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Profiles a file selection with up to `concurrency` metadata reads in flight.
///
/// Produces the same result as [`InputProfiler::profile`](crate::InputProfiler::profile)
/// with the filesystem probe: accumulation order does not affect the counts.
pub async fn profile_concurrent(files: Vec<PathBuf>, concurrency: usize) -> InputProfilingResult {
    let concurrency = concurrency.max(1);

    let classified: Vec<(InputFormat, FileSizeBucket)> = stream::iter(files)
        .map(|path| async move {
            let format = InputFormat::from_path(&path);
            let size = tokio::fs::metadata(&path).await.map(|meta| meta.len());
            (format, bucket_for(&path, size))
        })
        .buffer_unordered(concurrency)
        .collect()
        .await;

    let mut result = InputProfilingResult::new();
    for (format, bucket) in classified {
        result.record(format, bucket);
    }
    tracing::debug!(
        total_files = result.total_files(),
        concurrency,
        "profiled selection concurrently"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputProfiler;

    #[tokio::test]
    async fn test_matches_sequential_profile() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = Vec::new();
        for (i, (ext, len)) in [("md", 10), ("docx", 2_000_000), ("json", 6_000_000), ("bin", 0)]
            .iter()
            .enumerate()
        {
            let path = dir.path().join(format!("file{i}.{ext}"));
            std::fs::write(&path, vec![1u8; *len]).unwrap();
            files.push(path);
        }
        files.push(dir.path().join("missing.rtf"));

        let sequential = InputProfiler::new().profile(&files);
        let concurrent = profile_concurrent(files, 2).await;

        assert_eq!(sequential, concurrent);
        assert_eq!(concurrent.bucket_count(FileSizeBucket::Medium), 2);
        assert_eq!(concurrent.format_count(InputFormat::Other), 1);
    }

    #[tokio::test]
    async fn test_zero_concurrency_is_normalized() {
        let result = profile_concurrent(vec![PathBuf::from("/nonexistent/a.txt")], 0).await;
        assert_eq!(result.total_files(), 1);
        assert_eq!(result.bucket_count(FileSizeBucket::Medium), 1);
    }
}
