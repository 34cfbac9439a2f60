//! Shared utilities for the shipkit deployment tool.
//!
//! This crate provides cross-cutting concerns used by all other shipkit
//! crates: error types, filesystem helpers, and terminal status lines.

pub mod errors;
pub mod fs;
pub mod progress;
