//! Heuristic source analysis.
//!
//! This module provides a language-agnostic interface for extracting an
//! outline of callable entities from raw source text:
//! - Top-level functions with best-effort parameter names
//! - Classes with their public methods
//! - Leading documentation comments, when present contiguously above a
//!   declaration
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌───────────────┐     ┌───────────────┐
//! │ Source Text     │────▶│ Analyzers     │────▶│ SourceOutline │
//! └─────────────────┘     │ (py, js, ts)  │     │ (functions,   │
//!                         └───────────────┘     │  classes)     │
//!                                               └───────────────┘
//! ```
//!
//! The analyzers are pattern tables plus a line scan, not grammars. They
//! skip whatever they cannot match and never fail a run.
//!
//! # Adding a New Language
//!
//! 1. Create a new module in `src/analysis/languages/`
//! 2. Implement `LanguageAnalyzer` over a set of declaration patterns
//! 3. Register the analyzer in `languages/mod.rs`
//!
//! See `languages/python.rs` for a reference implementation.

mod entities;
mod languages;
mod traits;

pub use entities::{ClassEntity, CodeEntity, EntityKind, SourceOutline};
pub use languages::{
    analyzer_for, analyzer_for_extension, JavaScriptAnalyzer, PythonAnalyzer, TypeScriptAnalyzer,
};
pub use traits::LanguageAnalyzer;
