//! Service layer containing the pipeline stages and side-effect helpers.
//!
//! ## Service map
//! - `credentials.rs` — API key retrieval (environment, then `.env` fallback).
//! - `resolver.rs` — path canonicalization, symlink handling, containment.
//! - `validator.rs` — size/extension/MIME allow-list enforcement.
//! - `hasher.rs` — streaming SHA-256 content digest.
//! - `dispatch.rs` — the single remote call and its error mapping.
//! - `audit.rs` — append-only audit log.
//!
//! ## Conventions
//! - Each stage exposes a closed error enum; nothing is retried.
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod audit;
pub mod credentials;
pub mod dispatch;
pub mod hasher;
pub mod resolver;
pub mod validator;
