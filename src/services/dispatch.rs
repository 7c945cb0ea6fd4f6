use crate::domain::constants::{API_URL_ENV, DEFAULT_API_URL, DISPATCH_TIMEOUT_MS};
use crate::domain::models::{DispatchResult, ValidatedFile};
use crate::services::credentials::Credentials;
use serde::Deserialize;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("service rejected the credential: {0}")]
    Authentication(String),
    #[error("service denied permission: {0}")]
    Permission(String),
    #[error("service reported a failure (status {status}): {message}")]
    Transport { status: u16, message: String },
    #[error("unexpected dispatch failure: {0}")]
    Unexpected(String),
}

#[derive(Deserialize)]
struct ServiceAck {
    id: String,
    filename: String,
    purpose: String,
    bytes: u64,
    created_at: i64,
}

pub fn endpoint() -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Transmits the validated file with its declared MIME type and original
/// filename, plus the optional instruction text. Trusts the pipeline's
/// earlier stages completely; performs no validation of its own. Exactly
/// one attempt, no retry.
pub fn dispatch(
    file: ValidatedFile,
    instruction: Option<&str>,
    creds: &Credentials,
) -> Result<DispatchResult, DispatchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(DISPATCH_TIMEOUT_MS))
        .build()
        .map_err(|e| DispatchError::Unexpected(e.to_string()))?;

    let part = reqwest::blocking::multipart::Part::file(file.path.as_path())
        .map_err(|e| DispatchError::Unexpected(e.to_string()))?
        .file_name(file.path.file_name())
        .mime_str(&file.mime_type)
        .map_err(|e| DispatchError::Unexpected(e.to_string()))?;
    let mut form = reqwest::blocking::multipart::Form::new().part("file", part);
    if let Some(text) = instruction {
        form = form.text("instruction", text.to_string());
    }

    let response = client
        .post(endpoint())
        .bearer_auth(creds.api_key())
        .multipart(form)
        .send()
        .map_err(|e| DispatchError::Unexpected(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().unwrap_or_default();
        return Err(classify_failure(status.as_u16(), message.trim().to_string()));
    }

    let ack: ServiceAck = response
        .json()
        .map_err(|e| DispatchError::Unexpected(e.to_string()))?;
    Ok(DispatchResult {
        id: ack.id,
        filename: ack.filename,
        purpose: ack.purpose,
        bytes: ack.bytes,
        created_at: format_created_at(ack.created_at),
        status: "success".to_string(),
    })
}

fn classify_failure(status: u16, message: String) -> DispatchError {
    match status {
        401 => DispatchError::Authentication(message),
        403 => DispatchError::Permission(message),
        _ => DispatchError::Transport { status, message },
    }
}

fn format_created_at(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
        .unwrap_or_else(|| ts.to_string())
}
