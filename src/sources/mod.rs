//! Loading pathway records from disk.
//!
//! Two layouts are supported: a single `.json` file holding an array of
//! records, or a directory holding one record per `*.json` file (walked in
//! sorted path order, subdirectories included). Loading is the only I/O
//! boundary in the crate — everything downstream assumes an already-parsed
//! flat `Vec<Pathway>`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::model::Pathway;

/// Errors raised while reading or parsing record files.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no pathway data at {0}")]
    Missing(PathBuf),

    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

fn read_file(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_array(path: &Path, raw: &str) -> Result<Vec<Pathway>, SourceError> {
    serde_json::from_str(raw).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_record(path: &Path, raw: &str) -> Result<Pathway, SourceError> {
    serde_json::from_str(raw).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load all records beneath `path`.
///
/// A file parses as a JSON array of records; a directory is scanned for
/// `*.json` files, each holding exactly one record.
pub fn load_pathways(path: &Path) -> Result<Vec<Pathway>, SourceError> {
    if path.is_file() {
        let raw = read_file(path)?;
        let pathways = parse_array(path, &raw)?;
        info!(count = pathways.len(), path = %path.display(), "loaded pathway file");
        return Ok(pathways);
    }
    if !path.is_dir() {
        return Err(SourceError::Missing(path.to_path_buf()));
    }

    let mut pathways = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|source| SourceError::Walk {
            path: path.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file = entry.path();
        if file.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let raw = read_file(file)?;
        let pathway = parse_record(file, &raw)?;
        debug!(id = %pathway.id, path = %file.display(), "loaded pathway record");
        pathways.push(pathway);
    }
    info!(count = pathways.len(), path = %path.display(), "loaded pathway directory");
    Ok(pathways)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record_json(id: &str) -> String {
        format!(r#"{{"id": "{id}", "name": {{"full": "Pathway {id}"}}}}"#)
    }

    #[test]
    fn loads_an_array_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("pathways.json");
        fs::write(
            &file,
            format!("[{},{}]", record_json("a"), record_json("b")),
        )
        .unwrap();

        let pathways = load_pathways(&file).unwrap();
        assert_eq!(pathways.len(), 2);
        assert_eq!(pathways[0].id, "a");
    }

    #[test]
    fn loads_a_directory_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("02.json"), record_json("second")).unwrap();
        fs::write(dir.path().join("01.json"), record_json("first")).unwrap();
        fs::write(dir.path().join("notes.txt"), "not json").unwrap();

        let pathways = load_pathways(dir.path()).unwrap();
        let ids: Vec<&str> = pathways.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn parse_errors_carry_the_offending_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ok.json"), record_json("ok")).unwrap();
        fs::write(dir.path().join("zz-bad.json"), "{not json").unwrap();

        let err = load_pathways(dir.path()).unwrap_err();
        match err {
            SourceError::Parse { path, .. } => {
                assert!(path.to_string_lossy().contains("zz-bad.json"));
            }
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn missing_path_is_reported() {
        let err = load_pathways(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, SourceError::Missing(_)));
    }
}
