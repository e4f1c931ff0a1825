//! Reading and writing the YAML manifests.
//!
//! Manifests are parsed into [`serde_yaml::Value`] for inspection only. They
//! are written back as text, so bytes the generator does not edit (comments,
//! tags such as `!!python/name:`) stay exactly as they were.

use log::debug;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads the manifest at `path` as text.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading manifest {}", path.display());

    fs::read_to_string(path).map_err(|e| Error::ConfigReadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Parses the manifest `text` read from `path`.
pub fn parse_yaml<P: AsRef<Path>>(text: &str, path: P) -> Result<Value> {
    serde_yaml::from_str(text).map_err(|e| Error::ConfigReadError {
        path: path.as_ref().display().to_string(),
        reason: e.to_string(),
    })
}

/// Replaces the file at `path` with `content` atomically.
///
/// The content goes to a sibling `.tmp` file first and is then renamed over
/// the destination, so readers see either the old or the new manifest.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let write_error = |reason: String| Error::ConfigWriteError {
        path: path.display().to_string(),
        reason,
    };

    let filename = path
        .file_name()
        .ok_or_else(|| write_error("path has no file name".to_string()))?;
    let tmp_path = path.with_file_name(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content).map_err(|e| write_error(e.to_string()))?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_error(e.to_string()));
    }

    debug!("Wrote manifest {}", path.display());
    Ok(())
}

/// Returns the string stored under `key` in a YAML mapping, if any.
pub fn get_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_leaves_no_temporary_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("manifest.yml");

        write_text_atomic(&path, "key: value\n").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("manifest.yml.tmp").exists());
        assert_eq!(read_text(&path).unwrap(), "key: value\n");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_text(temp_dir.path().join("missing.yml"));
        assert!(matches!(result, Err(Error::ConfigReadError { .. })));
    }

    #[test]
    fn test_parse_malformed_yaml() {
        let result = parse_yaml("nav: [unclosed", "mkdocs.yml");
        assert!(matches!(result, Err(Error::ConfigReadError { .. })));
    }
}
