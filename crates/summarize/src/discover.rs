//! Transcript discovery and merging.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PipelineError;

/// List `.txt` files directly under `dir`, in directory order. Names in
/// `exclude` are skipped so a previous run's outputs are never re-ingested.
pub fn discover_inputs(dir: &Path, exclude: &[&str]) -> Result<Vec<PathBuf>, PipelineError> {
    let entries = fs::read_dir(dir).map_err(|source| PipelineError::Io {
        op: "list",
        path: dir.to_path_buf(),
        source,
    })?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PipelineError::Io {
            op: "list",
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".txt") || exclude.contains(&name) || path.is_dir() {
            continue;
        }
        debug!("discovered {}", path.display());
        inputs.push(path);
    }

    if inputs.is_empty() {
        return Err(PipelineError::NoInputFiles {
            dir: dir.to_path_buf(),
        });
    }
    Ok(inputs)
}

/// Concatenate `files` in order into a new file at `merge_path`.
pub fn merge_inputs(files: &[PathBuf], merge_path: &Path) -> Result<(), PipelineError> {
    let mut merged = File::create(merge_path).map_err(|source| PipelineError::Io {
        op: "create",
        path: merge_path.to_path_buf(),
        source,
    })?;
    for file in files {
        let contents = fs::read_to_string(file).map_err(|source| PipelineError::Io {
            op: "read",
            path: file.clone(),
            source,
        })?;
        merged
            .write_all(contents.as_bytes())
            .map_err(|source| PipelineError::Io {
                op: "write",
                path: merge_path.to_path_buf(),
                source,
            })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn only_txt_files_are_discovered() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("talk.txt"), "a").unwrap();
        fs::write(dir.path().join("notes.md"), "b").unwrap();
        fs::write(dir.path().join("raw.txt.bak"), "c").unwrap();

        let inputs = discover_inputs(dir.path(), &[]).unwrap();
        assert_eq!(inputs.len(), 1);
        assert!(inputs[0].ends_with("talk.txt"));
    }

    #[test]
    fn excluded_names_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("talk.txt"), "a").unwrap();
        fs::write(dir.path().join("summary.txt"), "old run").unwrap();
        fs::write(dir.path().join("combined.txt"), "old run").unwrap();

        let inputs = discover_inputs(dir.path(), &["summary.txt", "combined.txt"]).unwrap();
        assert_eq!(inputs.len(), 1);
        assert!(inputs[0].ends_with("talk.txt"));
    }

    #[test]
    fn empty_directory_is_an_explicit_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            discover_inputs(dir.path(), &[]),
            Err(PipelineError::NoInputFiles { .. })
        ));
    }

    #[test]
    fn subdirectories_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("archive.txt")).unwrap();
        fs::write(dir.path().join("talk.txt"), "a").unwrap();

        let inputs = discover_inputs(dir.path(), &[]).unwrap();
        assert_eq!(inputs.len(), 1);
        assert!(inputs[0].ends_with("talk.txt"));
    }

    #[test]
    fn merge_concatenates_in_discovery_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "ABC").unwrap();
        fs::write(dir.path().join("b.txt"), "DEF").unwrap();

        let inputs = discover_inputs(dir.path(), &[]).unwrap();
        let merge_path = dir.path().join("combined.txt");
        merge_inputs(&inputs, &merge_path).unwrap();

        let expected: String = inputs
            .iter()
            .map(|p| fs::read_to_string(p).unwrap())
            .collect();
        assert_eq!(fs::read_to_string(&merge_path).unwrap(), expected);
    }
}
