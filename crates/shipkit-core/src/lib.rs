//! Core data types for the shipkit deployment tool.
//!
//! This crate defines the fundamental types that represent a deployable
//! game project: the `Shipkit.toml` manifest, SDK module entries, the
//! per-run build configuration mutated during target generation, and the
//! deploy context passed through to per-platform hooks.
//!
//! This crate is intentionally free of async code and network I/O.

/// File name of the deployment manifest at the project root.
pub const MANIFEST_FILE: &str = "Shipkit.toml";

pub mod build_config;
pub mod context;
pub mod manifest;
pub mod module;
