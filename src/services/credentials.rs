use crate::domain::constants::{API_KEY_ENV, ENV_FILE};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum CredentialError {
    #[error("SLUICE_API_KEY is not set and no usable .env fallback was found")]
    Missing,
}

#[derive(Clone)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Loads the service credential: environment variable first, then a
/// `KEY=value` line in the working directory's `.env` file. A missing or
/// blank credential is a fatal startup condition, checked before any path
/// is touched.
pub fn load() -> Result<Credentials, CredentialError> {
    if let Ok(value) = std::env::var(API_KEY_ENV) {
        let value = value.trim();
        if !value.is_empty() {
            return Ok(Credentials {
                api_key: value.to_string(),
            });
        }
    }

    if let Some(key) = read_env_file(Path::new(ENV_FILE)) {
        tracing::debug!("credential loaded from {} fallback", ENV_FILE);
        return Ok(Credentials { api_key: key });
    }

    Err(CredentialError::Missing)
}

fn read_env_file(path: &Path) -> Option<String> {
    let raw = std::fs::read_to_string(path).ok()?;
    let prefix = format!("{API_KEY_ENV}=");
    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix(&prefix) {
            let key = rest.trim().trim_matches(|c| c == '"' || c == '\'').trim();
            if !key.is_empty() {
                return Some(key.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::read_env_file;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn env_file_value_is_stripped_of_quotes_and_whitespace() {
        let tmp = TempDir::new().expect("temp dir");
        let file = tmp.path().join(".env");
        fs::write(&file, "OTHER=x\nSLUICE_API_KEY=\"  sk-test-1  \"\n").expect("write .env");
        assert_eq!(read_env_file(&file).as_deref(), Some("sk-test-1"));
    }

    #[test]
    fn blank_env_file_value_is_not_a_credential() {
        let tmp = TempDir::new().expect("temp dir");
        let file = tmp.path().join(".env");
        fs::write(&file, "SLUICE_API_KEY=''\n").expect("write .env");
        assert_eq!(read_env_file(&file), None);
    }

    #[test]
    fn missing_env_file_yields_nothing() {
        let tmp = TempDir::new().expect("temp dir");
        assert_eq!(read_env_file(&tmp.path().join(".env")), None);
    }
}
