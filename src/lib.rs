//! Testpilot - stub test scaffolding generator.
//!
//! Testpilot scans a single source file (Python, JavaScript, or
//! TypeScript), identifies its public functions and classes with
//! best-effort pattern matching, and writes two artifacts: a test-file
//! skeleton with TODO-marked stubs and a markdown coverage report. It
//! never parses a grammar, never infers behavior, and never runs the
//! generated tests - the output is scaffolding for a human to finish.
//!
//! # Architecture
//!
//! The pipeline is strictly linear, one invocation per file:
//!
//! - `language`: file-extension to language mapping
//! - `analysis`: per-language heuristic analyzers producing a `SourceOutline`
//! - `generate`: per-language test skeleton rendering
//! - `report`: markdown coverage report and run summary
//! - `output`: atomic all-or-nothing artifact writes
//! - `pipeline`: the orchestrator tying the stages together
//!
//! # Adding a New Language
//!
//! Implement `LanguageAnalyzer` and `TestGenerator` in the respective
//! `languages`/`generate` modules, register both in their dispatch tables,
//! and add the extension to `language`. The orchestrator does not change.

pub mod analysis;
pub mod cli;
pub mod error;
pub mod generate;
pub mod language;
pub mod output;
pub mod pipeline;
pub mod report;

pub use analysis::{
    analyzer_for, ClassEntity, CodeEntity, EntityKind, LanguageAnalyzer, SourceOutline,
};
pub use error::{Phase, PipelineError};
pub use generate::{generator_for, TestGenerator};
pub use language::Language;
pub use report::RunSummary;
