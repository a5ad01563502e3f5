//! Reading, rendering and rewriting JSON artifacts.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;

use crate::error::{FixError, FixResult};
use crate::models::FixOutcome;
use crate::persist::replace_file;

const INDENT: &[u8] = b"    ";

/// Read and deserialise a JSON document.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> FixResult<T> {
  let content = fs::read(path).map_err(|source| FixError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  serde_json::from_slice(&content).map_err(|source| FixError::Parse {
    path: path.to_path_buf(),
    source,
  })
}

/// Render a document in canonical form: four-space indentation and a trailing newline.
pub fn prepare_json_data<T: Serialize + ?Sized>(document: &T) -> FixResult<Vec<u8>> {
  let mut data = Vec::new();
  let mut serializer =
    serde_json::Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(INDENT));
  document
    .serialize(&mut serializer)
    .map_err(FixError::Serialize)?;
  data.push(b'\n');
  Ok(data)
}

/// Replace the JSON file at `path` with already rendered `data`.
pub fn create_json_file(path: &Path, data: &[u8]) -> FixResult<()> {
  replace_file(path, data)
}

/// Rewrite a JSON file in canonical form, leaving it alone when it already is.
pub fn format_json_file(path: &Path) -> FixResult<FixOutcome> {
  let current = fs::read(path).map_err(|source| FixError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  let document: serde_json::Value =
    serde_json::from_slice(&current).map_err(|source| FixError::Parse {
      path: path.to_path_buf(),
      source,
    })?;

  let formatted = prepare_json_data(&document)?;
  if formatted == current {
    return Ok(FixOutcome::Unchanged);
  }

  create_json_file(path, &formatted)?;
  Ok(FixOutcome::Rewritten)
}
