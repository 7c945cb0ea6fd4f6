use crate::domain::models::{mime_for_extension, Policy, ResolvedPath};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("file is empty")]
    EmptyFile,
    #[error("file size {size} bytes exceeds the {max} byte ceiling")]
    TooLarge { size: u64, max: u64 },
    #[error("file extension {0:?} is not allow-listed")]
    DisallowedExtension(String),
    #[error("MIME type {0:?} is not allow-listed")]
    DisallowedMimeType(String),
    #[error("could not read file metadata: {0}")]
    Metadata(#[source] std::io::Error),
}

/// Enforces the size ceiling and the extension/MIME allow-lists.
///
/// Size comes from metadata only; no content is read here, so the cheap
/// checks short-circuit before any hashing. Type trust is declarative,
/// based on the extension; content is never sniffed. The policy
/// construction invariant guarantees allow-listed extensions resolve to a
/// type, so an unresolvable lookup means a hand-built policy and is
/// rejected rather than defaulted.
pub fn validate(path: &ResolvedPath, policy: &Policy) -> Result<(String, u64), ValidationError> {
    let meta = path.as_path().metadata().map_err(ValidationError::Metadata)?;
    let size = meta.len();
    if size == 0 {
        return Err(ValidationError::EmptyFile);
    }
    if size > policy.max_size {
        return Err(ValidationError::TooLarge {
            size,
            max: policy.max_size,
        });
    }

    let ext = extension_of(path.as_path());
    if !policy.allowed_extensions.contains(&ext) {
        return Err(ValidationError::DisallowedExtension(ext));
    }

    let mime = mime_for_extension(&ext)
        .ok_or_else(|| ValidationError::DisallowedMimeType(format!("unresolvable for {ext}")))?;
    if !policy.allowed_mime_types.contains(&mime) {
        return Err(ValidationError::DisallowedMimeType(mime));
    }

    Ok((mime, size))
}

/// Lowercase extension with a leading dot; empty string when absent.
fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default()
}
