//! Per-language stub test rendering.
//!
//! Each generator assembles a complete test-file body from a fixed
//! template: framework boilerplate at the top, then one stub group per
//! discovered entity. No assertions beyond trivial placeholders are
//! emitted; the stubs carry TODO markers for manual completion. Output is
//! always syntactically valid, even for an empty outline.

mod common;
mod javascript;
mod python;
mod typescript;

pub use javascript::JavaScriptGenerator;
pub use python::PythonGenerator;
pub use typescript::TypeScriptGenerator;

use once_cell::sync::OnceCell;

use crate::analysis::SourceOutline;
use crate::language::Language;

/// Language-specific test skeleton renderer.
pub trait TestGenerator: Send + Sync {
    /// Returns the language identifier (e.g., "python").
    fn language_id(&self) -> &'static str;

    /// Render the complete test-file body for one analyzed module.
    ///
    /// `module` is the source file's stem, used for imports and naming.
    fn render(&self, module: &str, outline: &SourceOutline) -> String;
}

/// Static storage for the Python generator.
static PYTHON_GENERATOR: OnceCell<PythonGenerator> = OnceCell::new();

/// Static storage for the JavaScript generator.
static JAVASCRIPT_GENERATOR: OnceCell<JavaScriptGenerator> = OnceCell::new();

/// Static storage for the TypeScript generator.
static TYPESCRIPT_GENERATOR: OnceCell<TypeScriptGenerator> = OnceCell::new();

/// Get the generator for a detected language.
pub fn generator_for(language: Language) -> &'static dyn TestGenerator {
    match language {
        Language::Python => {
            PYTHON_GENERATOR.get_or_init(PythonGenerator::new) as &'static dyn TestGenerator
        }
        Language::JavaScript => {
            JAVASCRIPT_GENERATOR.get_or_init(JavaScriptGenerator::new) as &'static dyn TestGenerator
        }
        Language::TypeScript => {
            TYPESCRIPT_GENERATOR.get_or_init(TypeScriptGenerator::new) as &'static dyn TestGenerator
        }
    }
}
