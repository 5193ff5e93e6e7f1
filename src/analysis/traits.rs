//! Core trait for language analysis.

use super::SourceOutline;

/// Language-specific analyzer trait.
///
/// Each supported language implements this trait to provide best-effort
/// declaration extraction over raw source text. Analysis never fails:
/// constructs the patterns cannot match are skipped rather than reported,
/// and an empty outline is a valid result.
pub trait LanguageAnalyzer: Send + Sync {
    /// Returns the language identifier (e.g., "python").
    fn language_id(&self) -> &'static str;

    /// Returns file extensions this analyzer handles (without dot).
    fn file_extensions(&self) -> &'static [&'static str];

    /// Scan source text and extract every recognizable public entity,
    /// preserving source order.
    fn analyze(&self, source: &str) -> SourceOutline;

    /// Check if this analyzer handles the given file extension.
    fn handles_extension(&self, ext: &str) -> bool {
        self.file_extensions().contains(&ext)
    }
}
