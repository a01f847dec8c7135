//! Input document format classification.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Document format of a conversion input, derived from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// PowerPoint presentation.
    Pptx,
    /// Word document.
    Docx,
    /// Excel workbook.
    Xlsx,
    /// JSON document.
    Json,
    /// Plain text.
    Txt,
    /// HTML page (`.html`, `.htm`).
    Html,
    /// YAML document (`.yaml`, `.yml`).
    Yaml,
    /// Markdown (`.md`, `.markdown`).
    Md,
    /// Comma-separated values.
    Csv,
    /// Rich text format.
    Rtf,
    /// Anything unrecognized, including files without an extension.
    Other,
}

impl InputFormat {
    /// Classifies a file extension (without the leading dot).
    ///
    /// Matching is case-insensitive; unknown extensions map to [`Self::Other`].
    #[must_use]
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "pptx" => Self::Pptx,
            "docx" => Self::Docx,
            "xlsx" => Self::Xlsx,
            "json" => Self::Json,
            "txt" => Self::Txt,
            "html" | "htm" => Self::Html,
            "yaml" | "yml" => Self::Yaml,
            "md" | "markdown" => Self::Md,
            "csv" => Self::Csv,
            "rtf" => Self::Rtf,
            _ => Self::Other,
        }
    }

    /// Classifies a path by its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(Self::Other, Self::from_extension)
    }

    /// Returns the format as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pptx => "pptx",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
            Self::Json => "json",
            Self::Txt => "txt",
            Self::Html => "html",
            Self::Yaml => "yaml",
            Self::Md => "md",
            Self::Csv => "csv",
            Self::Rtf => "rtf",
            Self::Other => "other",
        }
    }

    /// Returns the file extensions recognized as this format.
    #[must_use]
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Pptx => &["pptx"],
            Self::Docx => &["docx"],
            Self::Xlsx => &["xlsx"],
            Self::Json => &["json"],
            Self::Txt => &["txt"],
            Self::Html => &["html", "htm"],
            Self::Yaml => &["yaml", "yml"],
            Self::Md => &["md", "markdown"],
            Self::Csv => &["csv"],
            Self::Rtf => &["rtf"],
            Self::Other => &[],
        }
    }

    /// Returns all input formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Pptx,
            Self::Docx,
            Self::Xlsx,
            Self::Json,
            Self::Txt,
            Self::Html,
            Self::Yaml,
            Self::Md,
            Self::Csv,
            Self::Rtf,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
