//! Whole-file replacement for artifacts.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{FixError, FixResult};

/// Replace the contents of `path` with `data`.
///
/// The bytes are written to a sibling temporary file which is then renamed over `path`, so a
/// crash mid-write never leaves a truncated artifact behind. An existing file keeps its
/// permissions, and a symlink keeps pointing at its target, which receives the new bytes.
pub fn replace_file(path: &Path, data: &[u8]) -> FixResult<()> {
  let write_error = |source: std::io::Error| FixError::Write {
    path: path.to_path_buf(),
    source,
  };

  let target = resolve_symlink(path).map_err(write_error)?;
  let dir = target
    .parent()
    .filter(|parent| !parent.as_os_str().is_empty())
    .unwrap_or_else(|| Path::new("."));

  let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
  temp.write_all(data).map_err(write_error)?;
  if let Ok(existing) = fs::metadata(&target) {
    temp
      .as_file()
      .set_permissions(existing.permissions())
      .map_err(write_error)?;
  }
  temp.as_file().sync_all().map_err(write_error)?;
  temp.persist(&target).map_err(|err| write_error(err.error))?;
  Ok(())
}

fn resolve_symlink(path: &Path) -> std::io::Result<PathBuf> {
  match fs::symlink_metadata(path) {
    Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path),
    _ => Ok(path.to_path_buf()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn overwrites_existing_file_without_leftovers() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("info.json");
    fs::write(&path, b"old contents that are longer").unwrap();

    replace_file(&path, b"new").unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"new");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
  }

  #[test]
  fn reports_missing_directory() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("missing").join("info.json");

    let err = replace_file(&path, b"{}").unwrap_err();
    assert!(matches!(err, FixError::Write { .. }));
  }

  #[cfg(unix)]
  #[test]
  fn keeps_permissions_of_replaced_file() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    let path = temp.path().join("info.json");
    fs::write(&path, b"{}").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    replace_file(&path, b"{\"type\": \"coin\"}").unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
  }

  #[cfg(unix)]
  #[test]
  fn writes_through_symlinks() {
    let temp = tempdir().unwrap();
    let target = temp.path().join("shared.png");
    let link = temp.path().join("logo.png");
    fs::write(&target, b"old").unwrap();
    std::os::unix::fs::symlink(&target, &link).unwrap();

    replace_file(&link, b"new").unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read(&target).unwrap(), b"new");
  }
}
