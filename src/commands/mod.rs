//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `send.rs` — the single validate-hash-dispatch pipeline.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate stage logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod send;

pub use send::handle_send;
