use std::io;
use thiserror::Error;

// Import module-level errors for AppError
use crate::config::settings::ConfigError;

/// Errors that can occur while introspecting a repository
#[derive(Debug, Error)]
pub enum IntrospectError {
    #[error("git command `{command}` failed with exit code {exit_code}: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stdout: String,
        stderr: String,
    },

    #[error("failed to parse git output: {0}")]
    Parse(String),

    #[error("git executable not found on PATH")]
    GitNotInstalled,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Top-level application error that wraps all module-specific errors
///
/// This provides a unified error type for the binary while preserving the
/// specific error context from each module. All module errors automatically
/// convert to AppError via the `From` trait.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("introspection error: {0}")]
    Introspect(#[from] IntrospectError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for introspection operations
pub type IntrospectResult<T> = std::result::Result<T, IntrospectError>;

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
