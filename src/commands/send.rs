use crate::cli::Cli;
use crate::domain::models::{DispatchResult, JsonOut, Policy, ValidatedFile};
use crate::services::credentials::Credentials;
use crate::services::{audit, credentials, dispatch, hasher, resolver, validator};
use std::path::{Path, PathBuf};

/// Runs one invocation end to end: credential, policy, then the strictly
/// linear resolve/validate/hash/dispatch pipeline. The credential loads
/// before any path is touched, so a missing key always fails first. The
/// first failure is terminal; there is no retry and no partial state.
pub fn handle_send(cli: &Cli) -> anyhow::Result<()> {
    match run(cli) {
        Ok(result) => {
            audit::audit(
                "INFO",
                &format!(
                    "dispatch succeeded id={} filename={} bytes={}",
                    result.id, result.filename, result.bytes
                ),
            );
            print_result(cli.json, &result)?;
            Ok(())
        }
        Err(err) => {
            audit::audit(
                "ERROR",
                &format!("dispatch failed path={} reason={:#}", cli.path, err),
            );
            Err(err)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<DispatchResult> {
    let creds = credentials::load()?;
    let policy = Policy::defaults(std::env::var_os("HOME").map(PathBuf::from))?;
    let cwd = std::env::current_dir()?;
    run_pipeline(cli, &creds, &policy, &cwd)
}

fn run_pipeline(
    cli: &Cli,
    creds: &Credentials,
    policy: &Policy,
    cwd: &Path,
) -> anyhow::Result<DispatchResult> {
    let resolved = resolver::resolve(&cli.path, policy, cwd)?;
    tracing::info!(path = %resolved.as_path().display(), "path resolved");

    let (mime_type, byte_size) = validator::validate(&resolved, policy)?;
    tracing::info!(mime = %mime_type, size = byte_size, "file validated");

    let sha256 = hasher::digest(&resolved)?;
    tracing::debug!(sha256 = %sha256, "content hashed");

    let file = ValidatedFile {
        path: resolved,
        mime_type,
        byte_size,
        sha256,
    };
    audit::audit(
        "INFO",
        &format!(
            "dispatching filename={} size={} mime={} sha256={}",
            file.path.file_name(),
            file.byte_size,
            file.mime_type,
            file.sha256
        ),
    );

    let instruction = cli.instruction_text();
    Ok(dispatch::dispatch(file, instruction.as_deref(), creds)?)
}

fn print_result(json: bool, result: &DispatchResult) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: result
            })?
        );
    } else {
        println!("dispatched {}", result.filename);
        println!("id: {}", result.id);
        println!("purpose: {}", result.purpose);
        println!("size: {} bytes", result.bytes);
        println!("created: {}", result.created_at);
    }
    Ok(())
}
