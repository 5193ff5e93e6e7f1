//! One-shot pipeline orchestration: detect, analyze, render, write.

use std::fs;
use std::path::Path;

use crate::analysis::analyzer_for;
use crate::error::PipelineError;
use crate::generate::generator_for;
use crate::language::Language;
use crate::output;
use crate::report::{self, RunSummary};

/// Fixed name of the markdown coverage report.
pub const REPORT_FILE_NAME: &str = "test-report.md";

/// Execute the full pipeline for one source file.
///
/// Control flow is strictly linear: detect, analyze, render the test body
/// and the report, then write both artifacts into `out_dir`. Both bodies
/// are rendered in memory before anything touches the filesystem, and the
/// writes are all-or-nothing.
pub fn run(input: &Path, out_dir: &Path) -> Result<RunSummary, PipelineError> {
    let metadata = fs::metadata(input).map_err(|_| PipelineError::InputNotFound {
        path: input.to_path_buf(),
    })?;
    if !metadata.is_file() {
        return Err(PipelineError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let language = Language::detect(input)?;

    let bytes = fs::read(input).map_err(|e| PipelineError::InputUnreadable {
        path: input.to_path_buf(),
        reason: e.to_string(),
    })?;
    let source = String::from_utf8(bytes).map_err(|_| PipelineError::InputUnreadable {
        path: input.to_path_buf(),
        reason: "not valid UTF-8 text".to_string(),
    })?;

    let outline = analyzer_for(language).analyze(&source);

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "module".to_string());
    let test_file_name = language.test_file_name(&stem);
    let test_body = generator_for(language).render(&stem, &outline);
    let report_body = report::render_report(input, &outline, &test_file_name);

    let test_path = out_dir.join(&test_file_name);
    let report_path = out_dir.join(REPORT_FILE_NAME);
    output::write_all(&[
        (test_path.as_path(), test_body.as_str()),
        (report_path.as_path(), report_body.as_str()),
    ])?;

    Ok(RunSummary {
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: input.display().to_string(),
        language: language.as_str().to_string(),
        test_file: test_path.display().to_string(),
        report_file: report_path.display().to_string(),
        functions: outline.function_count(),
        classes: outline.class_count(),
        methods: outline.method_count(),
    })
}
