//! Language-specific analyzer implementations.

mod common;
mod javascript;
mod python;
mod typescript;

pub use javascript::JavaScriptAnalyzer;
pub use python::PythonAnalyzer;
pub use typescript::TypeScriptAnalyzer;

use once_cell::sync::OnceCell;

use super::LanguageAnalyzer;
use crate::language::Language;

/// Static storage for the Python analyzer.
static PYTHON_ANALYZER: OnceCell<PythonAnalyzer> = OnceCell::new();

/// Static storage for the JavaScript analyzer.
static JAVASCRIPT_ANALYZER: OnceCell<JavaScriptAnalyzer> = OnceCell::new();

/// Static storage for the TypeScript analyzer.
static TYPESCRIPT_ANALYZER: OnceCell<TypeScriptAnalyzer> = OnceCell::new();

/// Get the analyzer for a detected language.
pub fn analyzer_for(language: Language) -> &'static dyn LanguageAnalyzer {
    match language {
        Language::Python => {
            PYTHON_ANALYZER.get_or_init(PythonAnalyzer::new) as &'static dyn LanguageAnalyzer
        }
        Language::JavaScript => {
            JAVASCRIPT_ANALYZER.get_or_init(JavaScriptAnalyzer::new) as &'static dyn LanguageAnalyzer
        }
        Language::TypeScript => {
            TYPESCRIPT_ANALYZER.get_or_init(TypeScriptAnalyzer::new) as &'static dyn LanguageAnalyzer
        }
    }
}

/// Get the analyzer for a file extension, if any language claims it.
pub fn analyzer_for_extension(ext: &str) -> Option<&'static dyn LanguageAnalyzer> {
    Language::from_extension(ext).map(analyzer_for)
}
