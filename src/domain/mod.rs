//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the pipeline's value types in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — policy, pipeline value types, output envelope.
//! - `constants.rs` — stable constants (limits, allow-lists, env var names).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//! The one lookup that lives here (`mime_for_extension`) is a pure table
//! query shared by policy construction and validation.

pub mod constants;
pub mod models;
