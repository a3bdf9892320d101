use crate::error::AppError;
use std::path::{Path, PathBuf};

/// Traversal guard for client-supplied file names.
///
/// Rejects any candidate containing `..` anywhere in the raw string. The
/// check is deliberately coarse: `a..b` is rejected along with `a/../b`,
/// and symlinks are not resolved. On acceptance only the last path segment
/// of the candidate is honored, so nested separators flatten into the
/// served directory and the result is always a direct child of it.
pub fn validate_name(served_dir: &Path, candidate: &str) -> Result<PathBuf, AppError> {
    if candidate.contains("..") {
        return Err(AppError::InvalidPath);
    }
    let name = base_name(candidate).ok_or(AppError::InvalidPath)?;
    Ok(served_dir.join(name))
}

/// Last path segment of a candidate name. `None` when the candidate has no
/// usable final segment (empty string, bare `/`, `.`).
pub fn base_name(candidate: &str) -> Option<&str> {
    Path::new(candidate).file_name()?.to_str()
}
