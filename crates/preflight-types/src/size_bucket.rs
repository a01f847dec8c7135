//! File size buckets.

use serde::{Deserialize, Serialize};

/// Coarse size class of an input file.
///
/// Upper bounds are exclusive and contiguous, so every byte count maps to
/// exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileSizeBucket {
    /// Under 1 MB.
    Tiny,
    /// 1 MB up to 5 MB.
    Small,
    /// 5 MB up to 25 MB. Also used when a file's size cannot be read.
    Medium,
    /// 25 MB up to 100 MB.
    Large,
    /// 100 MB and above.
    XLarge,
}

impl FileSizeBucket {
    /// Exclusive upper bound of [`Self::Tiny`] in bytes.
    pub const TINY_LIMIT: u64 = 1_000_000;
    /// Exclusive upper bound of [`Self::Small`] in bytes.
    pub const SMALL_LIMIT: u64 = 5_000_000;
    /// Exclusive upper bound of [`Self::Medium`] in bytes.
    pub const MEDIUM_LIMIT: u64 = 25_000_000;
    /// Exclusive upper bound of [`Self::Large`] in bytes.
    pub const LARGE_LIMIT: u64 = 100_000_000;

    /// Classifies a file size in bytes.
    #[must_use]
    pub const fn from_size(bytes: u64) -> Self {
        if bytes < Self::TINY_LIMIT {
            Self::Tiny
        } else if bytes < Self::SMALL_LIMIT {
            Self::Small
        } else if bytes < Self::MEDIUM_LIMIT {
            Self::Medium
        } else if bytes < Self::LARGE_LIMIT {
            Self::Large
        } else {
            Self::XLarge
        }
    }

    /// Returns the inclusive lower and exclusive upper byte bounds.
    ///
    /// [`Self::XLarge`] is unbounded above.
    #[must_use]
    pub const fn byte_range(&self) -> (u64, Option<u64>) {
        match self {
            Self::Tiny => (0, Some(Self::TINY_LIMIT)),
            Self::Small => (Self::TINY_LIMIT, Some(Self::SMALL_LIMIT)),
            Self::Medium => (Self::SMALL_LIMIT, Some(Self::MEDIUM_LIMIT)),
            Self::Large => (Self::MEDIUM_LIMIT, Some(Self::LARGE_LIMIT)),
            Self::XLarge => (Self::LARGE_LIMIT, None),
        }
    }

    /// Returns the bucket as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xLarge",
        }
    }

    /// Returns all buckets from smallest to largest.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Tiny,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::XLarge,
        ]
    }
}

impl std::fmt::Display for FileSizeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        let cases = [
            (FileSizeBucket::TINY_LIMIT, FileSizeBucket::Tiny, FileSizeBucket::Small),
            (FileSizeBucket::SMALL_LIMIT, FileSizeBucket::Small, FileSizeBucket::Medium),
            (FileSizeBucket::MEDIUM_LIMIT, FileSizeBucket::Medium, FileSizeBucket::Large),
            (FileSizeBucket::LARGE_LIMIT, FileSizeBucket::Large, FileSizeBucket::XLarge),
        ];

        for (limit, below, at) in cases {
            assert_eq!(FileSizeBucket::from_size(limit - 1), below);
            assert_eq!(FileSizeBucket::from_size(limit), at);
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(FileSizeBucket::from_size(0), FileSizeBucket::Tiny);
        assert_eq!(FileSizeBucket::from_size(999_999), FileSizeBucket::Tiny);
        assert_eq!(FileSizeBucket::from_size(1_000_000), FileSizeBucket::Small);
        assert_eq!(FileSizeBucket::from_size(u64::MAX), FileSizeBucket::XLarge);
    }

    #[test]
    fn test_byte_ranges_are_contiguous() {
        let buckets = FileSizeBucket::all();
        for pair in buckets.windows(2) {
            let (_, upper) = pair[0].byte_range();
            let (lower, _) = pair[1].byte_range();
            assert_eq!(upper, Some(lower));
        }
    }

    #[test]
    fn test_serde_name() {
        let json = serde_json::to_string(&FileSizeBucket::XLarge).unwrap();
        assert_eq!(json, "\"xLarge\"");
    }
}
