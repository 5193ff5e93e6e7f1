//! Command-line interface for testpilot.

use clap::Parser;
use colored::*;
use std::path::PathBuf;

use crate::pipeline;
use crate::report::RunSummary;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Test scaffolding generator - scan one source file, emit stub tests and
/// a coverage report.
///
/// Testpilot reads a single Python, JavaScript, or TypeScript file,
/// identifies its public functions and classes with best-effort pattern
/// matching, and writes a TODO-marked test skeleton plus `test-report.md`
/// into the working directory. The generated tests are scaffolding only;
/// the assertions are left for the author.
#[derive(Parser)]
#[command(name = "testpilot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source file to scaffold tests for (.py, .js, or .ts)
    pub path: PathBuf,

    /// Directory the test file and report are written into
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Console summary format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Run the full generate pipeline for the given arguments.
pub fn run_generate(args: &Cli) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let summary = match pipeline::run(&args.path, &args.out_dir) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error ({} phase): {}", e.phase(), e);
            return Ok(EXIT_ERROR);
        }
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => print_pretty(&summary),
    }

    Ok(EXIT_SUCCESS)
}

fn print_pretty(summary: &RunSummary) {
    println!("{} {}", "Generated test file:".green().bold(), summary.test_file);
    println!(
        "{} {}",
        "Generated test report:".green().bold(),
        summary.report_file
    );
    println!();
    println!("Language: {}", summary.language);
    println!("Functions found: {}", summary.functions);
    println!("Classes found: {}", summary.classes);
    println!("Methods found: {}", summary.methods);
}
