//! Error taxonomy for the generate pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Pipeline half in which a fatal error occurred.
///
/// Everything up to and including source analysis is `Analysis`; template
/// rendering and artifact writes are `Generation`. Fatal messages name the
/// phase so the user knows which half of the run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Analysis,
    Generation,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Analysis => "analysis",
            Phase::Generation => "generation",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fatal errors the pipeline can produce.
///
/// Unrecognized declarations are not an error: the analyzers silently skip
/// what their patterns cannot match, and a zero-entity result flows through
/// to the report as a plain statement, not a failure.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("unsupported file extension {:?} (supported: {})", extension, crate::language::supported_list())]
    UnsupportedLanguage { extension: String },

    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("cannot read {}: {}", path.display(), reason)]
    InputUnreadable { path: PathBuf, reason: String },

    #[error("failed to write {}: {}", path.display(), source)]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Which pipeline half produced this error.
    pub fn phase(&self) -> Phase {
        match self {
            PipelineError::WriteFailed { .. } => Phase::Generation,
            _ => Phase::Analysis,
        }
    }
}
