//! Common types and utilities shared across Onlycheck crates.
//!
//! This crate defines the shared error taxonomy and the centralised
//! tracing/logging initialisation used by the binary and the integration
//! tests. It is intentionally lightweight so every crate can depend on it
//! without pulling in heavy transitive costs.
//!
//! - [`OnlycheckError`] and [`Result`]: shared error handling
//! - [`observability`]: centralised tracing/logging initialisation

pub mod observability;

/// Error types used across the Onlycheck workspace.
#[derive(thiserror::Error, Debug)]
pub enum OnlycheckError {
    /// The WebDriver endpoint or the browser itself misbehaved.
    #[error("driver error: {0}")]
    Driver(#[from] anyhow::Error),

    /// Configuration was incomplete or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A footer check failed; the message carries the verdict.
    #[error("check failed: {0}")]
    Check(String),
}

impl OnlycheckError {
    /// Process exit code for the CLI: failed checks exit with 1,
    /// infrastructure problems with 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            OnlycheckError::Check(_) => 1,
            OnlycheckError::Driver(_) | OnlycheckError::Config(_) => 2,
        }
    }
}

/// Convenient alias for results that use [`OnlycheckError`].
pub type Result<T> = std::result::Result<T, OnlycheckError>;
