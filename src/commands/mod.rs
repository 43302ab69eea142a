//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — analyze/policy/contexts/frameworks/score/demo.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate template selection and scoring to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;

pub use runtime::handle_runtime_commands;
