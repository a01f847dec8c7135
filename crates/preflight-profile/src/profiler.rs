//! Sequential input profiling.

use std::io;
use std::path::Path;

use preflight_types::{FileSizeBucket, InputFormat, InputProfilingResult};

/// Bucket used when a file's size cannot be read.
pub const FALLBACK_BUCKET: FileSizeBucket = FileSizeBucket::Medium;

/// Source of file sizes.
///
/// Separates the profiler from the filesystem so selections can be profiled
/// against virtual or remote sources.
pub trait SizeProbe {
    /// Returns the size of the file at `path` in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be determined.
    fn file_size(&self, path: &Path) -> io::Result<u64>;
}

/// [`SizeProbe`] backed by filesystem metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl SizeProbe for FsProbe {
    fn file_size(&self, path: &Path) -> io::Result<u64> {
        std::fs::metadata(path).map(|meta| meta.len())
    }
}

/// Maps a size lookup to a bucket, falling back to [`FALLBACK_BUCKET`].
pub(crate) fn bucket_for(path: &Path, size: io::Result<u64>) -> FileSizeBucket {
    match size {
        Ok(bytes) => FileSizeBucket::from_size(bytes),
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "size unreadable, using medium bucket"
            );
            FALLBACK_BUCKET
        }
    }
}

/// Classifies file selections by format and size bucket.
///
/// Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputProfiler<P = FsProbe> {
    probe: P,
}

impl InputProfiler {
    /// Creates a profiler that reads sizes from the filesystem.
    #[must_use]
    pub const fn new() -> Self {
        Self { probe: FsProbe }
    }
}

impl<P: SizeProbe> InputProfiler<P> {
    /// Creates a profiler using a custom size probe.
    #[must_use]
    pub const fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Classifies a single file.
    #[must_use]
    pub fn classify(&self, path: &Path) -> (InputFormat, FileSizeBucket) {
        let format = InputFormat::from_path(path);
        let bucket = bucket_for(path, self.probe.file_size(path));
        (format, bucket)
    }

    /// Profiles a file selection.
    ///
    /// Per-file errors are absorbed into the fallback bucket; this never fails.
    pub fn profile<I>(&self, files: I) -> InputProfilingResult
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut result = InputProfilingResult::new();
        for file in files {
            let (format, bucket) = self.classify(file.as_ref());
            result.record(format, bucket);
        }
        tracing::debug!(total_files = result.total_files(), "profiled selection");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct FixedSizes(HashMap<PathBuf, u64>);

    impl SizeProbe for FixedSizes {
        fn file_size(&self, path: &Path) -> io::Result<u64> {
            self.0
                .get(path)
                .copied()
                .ok_or_else(|| io::Error::from(io::ErrorKind::PermissionDenied))
        }
    }

    fn write_file(dir: &Path, name: &str, len: usize) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, vec![0u8; len]).unwrap();
        path
    }

    #[test]
    fn test_profiles_formats_and_size_buckets() {
        let dir = tempfile::tempdir().unwrap();
        let txt = write_file(dir.path(), "a.txt", 10_000);
        let yaml = write_file(dir.path(), "b.yaml", 3_000_000);
        let pptx = write_file(dir.path(), "c.pptx", 12_000_000);

        let result = InputProfiler::new().profile([&txt, &yaml, &pptx]);

        assert_eq!(result.total_files(), 3);
        assert_eq!(result.format_count(InputFormat::Txt), 1);
        assert_eq!(result.format_count(InputFormat::Yaml), 1);
        assert_eq!(result.format_count(InputFormat::Pptx), 1);
        assert_eq!(result.bucket_count(FileSizeBucket::Tiny), 1);
        assert_eq!(result.bucket_count(FileSizeBucket::Small), 1);
        assert_eq!(result.bucket_count(FileSizeBucket::Medium), 1);
    }

    #[test]
    fn test_missing_file_falls_back_to_medium() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.docx");

        let result = InputProfiler::new().profile([&missing]);

        assert_eq!(result.format_count(InputFormat::Docx), 1);
        assert_eq!(result.bucket_count(FileSizeBucket::Medium), 1);
        assert_eq!(result.total_files(), result.total_bucketed());
    }

    #[test]
    fn test_custom_probe_boundaries() {
        let sizes = FixedSizes(HashMap::from([
            (PathBuf::from("a.csv"), 999_999),
            (PathBuf::from("b.csv"), 1_000_000),
            (PathBuf::from("c.csv"), 100_000_000),
        ]));
        let profiler = InputProfiler::with_probe(sizes);

        let result = profiler.profile(["a.csv", "b.csv", "c.csv", "denied.csv"]);

        assert_eq!(result.format_count(InputFormat::Csv), 4);
        assert_eq!(result.bucket_count(FileSizeBucket::Tiny), 1);
        assert_eq!(result.bucket_count(FileSizeBucket::Small), 1);
        assert_eq!(result.bucket_count(FileSizeBucket::XLarge), 1);
        assert_eq!(result.bucket_count(FileSizeBucket::Medium), 1);
    }

    #[test]
    fn test_empty_selection() {
        let files: Vec<PathBuf> = Vec::new();
        let result = InputProfiler::new().profile(&files);
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_and_missing_extensions() {
        let sizes = FixedSizes(HashMap::new());
        let result = InputProfiler::with_probe(sizes).profile(["data.xyz", "README", "Page.HTM"]);

        assert_eq!(result.format_count(InputFormat::Other), 2);
        assert_eq!(result.format_count(InputFormat::Html), 1);
    }
}
