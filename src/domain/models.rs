use crate::domain::constants;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(thiserror::Error, Debug)]
pub enum PolicyError {
    #[error("allow-listed extension {extension:?} does not resolve to an allow-listed MIME type")]
    InconsistentAllowList { extension: String },
}

/// Immutable security policy, constructed once at startup and passed by
/// reference into every pipeline stage.
#[derive(Debug, Clone)]
pub struct Policy {
    pub max_size: u64,
    pub allowed_extensions: BTreeSet<String>,
    pub allowed_mime_types: BTreeSet<String>,
    pub allowed_roots: Vec<PathBuf>,
}

impl Policy {
    /// Builds a policy, rejecting allow-lists where an extension would not
    /// resolve to an allow-listed MIME type. Fail closed rather than let a
    /// mismatched pair widen trust at validation time.
    pub fn new(
        max_size: u64,
        extensions: impl IntoIterator<Item = String>,
        mime_types: impl IntoIterator<Item = String>,
        allowed_roots: Vec<PathBuf>,
    ) -> Result<Self, PolicyError> {
        let allowed_extensions: BTreeSet<String> =
            extensions.into_iter().map(|e| normalize_extension(&e)).collect();
        let allowed_mime_types: BTreeSet<String> = mime_types.into_iter().collect();

        for ext in &allowed_extensions {
            match mime_for_extension(ext) {
                Some(mime) if allowed_mime_types.contains(&mime) => {}
                _ => {
                    return Err(PolicyError::InconsistentAllowList {
                        extension: ext.clone(),
                    })
                }
            }
        }

        Ok(Self {
            max_size,
            allowed_extensions,
            allowed_mime_types,
            allowed_roots,
        })
    }

    /// Default policy: 100 MiB ceiling, document extensions, and the
    /// caller's home plus the system temp directories as safe roots.
    pub fn defaults(home: Option<PathBuf>) -> Result<Self, PolicyError> {
        let mut roots = Vec::new();
        if let Some(h) = home {
            roots.push(h);
        }
        roots.push(PathBuf::from("/tmp"));
        roots.push(PathBuf::from("/var/tmp"));

        Policy::new(
            constants::MAX_FILE_SIZE,
            constants::DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()),
            constants::DEFAULT_MIME_TYPES.iter().map(|s| s.to_string()),
            roots,
        )
    }
}

fn normalize_extension(raw: &str) -> String {
    let e = raw.trim().to_ascii_lowercase();
    if e.starts_with('.') {
        e
    } else {
        format!(".{e}")
    }
}

/// Two-stage extension-to-type lookup: system inference first, then the
/// built-in fallback table. Returns `None` only for extensions covered by
/// neither source.
pub fn mime_for_extension(ext: &str) -> Option<String> {
    let bare = ext.trim_start_matches('.');
    if let Some(mime) = mime_guess::from_ext(bare).first() {
        return Some(mime.to_string());
    }
    constants::FALLBACK_MIME_TABLE
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, m)| (*m).to_string())
}

/// Absolute, symlink-resolved location of an existing regular file.
/// Constructed only by `services::resolver` after the containment check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Output of the validation stages; consumed exactly once by the dispatcher.
#[derive(Debug)]
pub struct ValidatedFile {
    pub path: ResolvedPath,
    pub mime_type: String,
    pub byte_size: u64,
    pub sha256: String,
}

/// The service's acknowledgment of a successful dispatch. Not a locally
/// durable record; the audit log is the only persistence.
#[derive(Debug, Serialize)]
pub struct DispatchResult {
    pub id: String,
    pub filename: String,
    pub purpose: String,
    pub bytes: u64,
    pub created_at: String,
    pub status: String,
}
