//! Stable process-wide constants.
//!
//! Changing any of the allow-lists below widens or narrows what the tool is
//! willing to hand to the remote service; keep changes explicit and reviewed.

/// Environment variable holding the service credential.
pub const API_KEY_ENV: &str = "SLUICE_API_KEY";

/// Environment variable overriding the service endpoint.
pub const API_URL_ENV: &str = "SLUICE_API_URL";

/// Default endpoint of the content-processing service.
pub const DEFAULT_API_URL: &str = "https://api.sluice.dev/v1/files";

/// Fallback credential file read from the working directory.
pub const ENV_FILE: &str = ".env";

/// Size ceiling for dispatched files.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Timeout for the single remote call.
pub const DISPATCH_TIMEOUT_MS: u64 = 30_000;

/// Read granularity while hashing; bounds peak memory for any input size.
pub const HASH_CHUNK_SIZE: usize = 4096;

pub const DEFAULT_EXTENSIONS: &[&str] = &[".pdf", ".txt", ".md", ".docx", ".doc"];

pub const DEFAULT_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "text/plain",
    "text/markdown",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
];

/// Extension-to-type table used when system inference yields nothing.
/// Covers exactly the default allow-listed extensions so no allow-listed
/// file ever falls through to an unchecked default type.
pub const FALLBACK_MIME_TABLE: &[(&str, &str)] = &[
    (".pdf", "application/pdf"),
    (".txt", "text/plain"),
    (".md", "text/markdown"),
    (
        ".docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    (".doc", "application/msword"),
];
