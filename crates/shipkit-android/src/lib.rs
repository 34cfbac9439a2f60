//! Android generation pass for the shipkit deployment tool.
//!
//! Applies Android-specific changes to the per-run build configuration for
//! each enabled SDK module, then renders the configuration into the Gradle
//! build file of the generated project.

pub mod gradle;
pub mod sdk_module;
