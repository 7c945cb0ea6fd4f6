use chrono::{SecondsFormat, Utc};
use std::io::Write;
use std::path::PathBuf;

/// Appends one `<timestamp> <LEVEL> <message>` line to the audit log.
///
/// Best effort: the audit destination is write-only and a failed append
/// never aborts the pipeline. Lines are written whole, so cross-process
/// interleaving stays line-granular.
pub fn audit(level: &str, message: &str) {
    let Some(path) = audit_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let line = format!(
        "{} {} {}\n",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        level,
        message
    );
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| f.write_all(line.as_bytes()));
}

fn audit_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/sluice/audit.log"))
}
