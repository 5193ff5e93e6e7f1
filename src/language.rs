//! Source language detection from file extensions.

use std::fmt;
use std::path::Path;

use crate::error::PipelineError;

/// File extensions the tool accepts (without dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["py", "js", "ts"];

/// Human-readable list of supported extensions for error messages.
pub fn supported_list() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A supported source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
}

impl Language {
    /// Language identifier used in reports and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    /// Map a file extension (without dot) to a language.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "py" => Some(Language::Python),
            "js" => Some(Language::JavaScript),
            "ts" => Some(Language::TypeScript),
            _ => None,
        }
    }

    /// Detect the language of a source file from its extension.
    ///
    /// This is the pipeline's gate: any other extension fails the run
    /// before anything is analyzed or written.
    pub fn detect(path: &Path) -> Result<Self, PipelineError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext).ok_or_else(|| PipelineError::UnsupportedLanguage {
            extension: ext.to_string(),
        })
    }

    /// Conventional test-file name for a source file stem.
    pub fn test_file_name(&self, stem: &str) -> String {
        match self {
            Language::Python => format!("test_{stem}.py"),
            Language::JavaScript => format!("{stem}.test.js"),
            Language::TypeScript => format!("{stem}.test.ts"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
