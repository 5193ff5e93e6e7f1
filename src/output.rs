//! Atomic artifact writes.
//!
//! Both output files are staged as temporary files in the destination
//! directory and persisted by rename, so a file is never observable in a
//! half-written state. If a later write fails, earlier artifacts from the
//! same run are removed again: either every file lands or none do.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::PipelineError;

/// Write every (path, contents) pair, or none of them.
pub fn write_all(files: &[(&Path, &str)]) -> Result<(), PipelineError> {
    let mut written: Vec<&Path> = Vec::new();
    for &(path, contents) in files {
        if let Err(source) = write_atomic(path, contents) {
            for done in &written {
                let _ = fs::remove_file(done);
            }
            return Err(PipelineError::WriteFailed {
                path: path.to_path_buf(),
                source,
            });
        }
        written.push(path);
    }
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    // Stage in the destination directory so the final rename stays on one
    // filesystem.
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_all_success() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.txt");
        let second = dir.path().join("b.txt");

        write_all(&[(first.as_path(), "alpha"), (second.as_path(), "beta")]).unwrap();

        assert_eq!(fs::read_to_string(&first).unwrap(), "alpha");
        assert_eq!(fs::read_to_string(&second).unwrap(), "beta");
    }

    #[test]
    fn test_failed_write_rolls_back_earlier_files() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.txt");
        // A destination whose parent directory does not exist cannot be staged.
        let second = dir.path().join("missing").join("b.txt");

        let err = write_all(&[(first.as_path(), "alpha"), (second.as_path(), "beta")]).unwrap_err();

        assert!(matches!(err, PipelineError::WriteFailed { .. }));
        assert!(!first.exists(), "first artifact should be rolled back");
    }

    #[test]
    fn test_overwrite_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "old").unwrap();

        write_all(&[(path.as_path(), "new")]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
