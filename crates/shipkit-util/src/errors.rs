use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all shipkit operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ShipkitError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed deployment manifest (e.g. Shipkit.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Shipkit.toml for syntax errors"))]
    Manifest { message: String },

    /// An SDK module entry lacks a key the deploy pass requires.
    #[error("SDK module '{module}' is missing required key '{key}'")]
    #[diagnostic(help(
        "Add the missing key to the module's [[modules]] entry in Shipkit.toml"
    ))]
    MissingConfigKey { module: String, key: String },

    /// Requested deploy target is unknown or not configured for the project.
    #[error("Target error: {message}")]
    Target { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ShipkitResult<T> = miette::Result<T>;
