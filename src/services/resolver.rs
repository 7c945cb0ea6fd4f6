use crate::domain::models::{Policy, ResolvedPath};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum PathError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("not a regular file: {0}")]
    NotAFile(String),
    #[error("symbolic link target does not exist: {0}")]
    DanglingSymlink(String),
    #[error("path outside the working directory and allowed roots: {0}")]
    UnsafeLocation(String),
}

/// Canonicalizes `raw` and enforces the containment policy.
///
/// A symbolic link (detected on the raw path, before any resolution) is
/// followed to its target; the target, not the link, becomes the candidate
/// path. Following is recorded for audit but is not by itself a rejection.
/// `cwd` is the containment base, alongside `policy.allowed_roots`.
/// Stat calls only; no writes.
pub fn resolve(raw: &str, policy: &Policy, cwd: &Path) -> Result<ResolvedPath, PathError> {
    let input = Path::new(raw);

    if let Ok(meta) = std::fs::symlink_metadata(input) {
        if meta.file_type().is_symlink() {
            if std::fs::metadata(input).is_err() {
                return Err(PathError::DanglingSymlink(raw.to_string()));
            }
            tracing::warn!(path = raw, "input is a symbolic link; following it");
        }
    }

    let canonical = input
        .canonicalize()
        .map_err(|_| PathError::NotFound(raw.to_string()))?;
    let meta = std::fs::metadata(&canonical).map_err(|_| PathError::NotFound(raw.to_string()))?;
    if !meta.is_file() {
        return Err(PathError::NotAFile(raw.to_string()));
    }

    if !is_contained(&canonical, policy, cwd) {
        return Err(PathError::UnsafeLocation(raw.to_string()));
    }

    Ok(ResolvedPath::new(canonical))
}

fn is_contained(path: &Path, policy: &Policy, cwd: &Path) -> bool {
    if let Ok(base) = cwd.canonicalize() {
        if path.starts_with(&base) {
            return true;
        }
    }
    policy
        .allowed_roots
        .iter()
        .any(|root| match root.canonicalize() {
            Ok(r) => path.starts_with(r),
            Err(_) => false,
        })
}
