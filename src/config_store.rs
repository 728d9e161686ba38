//! Config document store: JSON on disk under the extension directory.
//!
//! Reads absorb every failure and fall back to a caller-supplied default;
//! writes are atomic-replace (uniquely named sibling temp file + rename) so
//! concurrent readers never observe a partial document and concurrent
//! writers are last-writer-wins at whole-document granularity.

use serde_json::Value;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{error, instrument, warn};

/// Default filename for the config document under the extension directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Failure reading, parsing, serializing, or writing a config document.
#[derive(Debug, Error)]
pub enum StorageError {
  #[error("failed to read {path}: {source}")]
  Read { path: PathBuf, source: io::Error },
  #[error("invalid JSON in {path}: {source}")]
  Parse {
    path: PathBuf,
    source: serde_json::Error,
  },
  #[error("failed to serialize config document: {source}")]
  Serialize { source: serde_json::Error },
  #[error("failed to write {path}: {source}")]
  Write { path: PathBuf, source: io::Error },
}

/// Store for JSON documents under the extension's install directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
  dir: PathBuf,
}

impl ConfigStore {
  /// Store rooted at `dir`, the directory the host installed the extension into.
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  /// Path of `filename` under the store directory.
  pub fn path_for(&self, filename: &str) -> PathBuf {
    self.dir.join(filename)
  }

  /// Reads `filename` as JSON. A missing file yields `default` silently;
  /// an unreadable or unparsable file yields `default` with a logged warning.
  /// Never creates the file and never propagates the failure.
  #[instrument(level = "trace", skip(self, default))]
  pub fn read(&self, filename: &str, default: Value) -> Value {
    match self.try_read(filename) {
      Ok(Some(document)) => document,
      Ok(None) => default,
      Err(e) => {
        let path = self.path_for(filename);
        warn!(file = %path.display(), error = %e, "config read failed, returning default");
        default
      }
    }
  }

  fn try_read(&self, filename: &str) -> Result<Option<Value>, StorageError> {
    let path = self.path_for(filename);
    if !path.exists() {
      return Ok(None);
    }
    let bytes = std::fs::read(&path).map_err(|source| StorageError::Read {
      path: path.clone(),
      source,
    })?;
    let document =
      serde_json::from_slice(&bytes).map_err(|source| StorageError::Parse { path, source })?;
    Ok(Some(document))
  }

  /// Writes `document` to `filename` as pretty-printed UTF-8 JSON (2-space
  /// indent, non-ASCII unescaped), creating parent directories as needed.
  /// Each write stages to its own temp file beside the target and renames
  /// it into place.
  #[instrument(level = "trace", skip(self, document))]
  pub fn write(&self, filename: &str, document: &Value) -> Result<(), StorageError> {
    match self.try_write(filename, document) {
      Ok(()) => Ok(()),
      Err(e) => {
        let path = self.path_for(filename);
        error!(file = %path.display(), error = %e, "config write failed");
        Err(e)
      }
    }
  }

  fn try_write(&self, filename: &str, document: &Value) -> Result<(), StorageError> {
    let path = self.path_for(filename);
    let json = serde_json::to_string_pretty(document)
      .map_err(|source| StorageError::Serialize { source })?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|source| StorageError::Write {
      path: path.clone(),
      source,
    })?;
    // Staging is per-write; a shared temp path would let one writer rename
    // another's half-written file into place.
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| StorageError::Write {
      path: path.clone(),
      source,
    })?;
    tmp.write_all(json.as_bytes()).map_err(|source| StorageError::Write {
      path: tmp.path().to_path_buf(),
      source,
    })?;
    tmp.persist(&path).map_err(|e| StorageError::Write { path, source: e.error })?;
    Ok(())
  }
}
