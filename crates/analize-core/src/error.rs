//! Error and warning types for scanning.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Root directory does not exist.
    #[error("The directory '{}' does not exist.", .path.display())]
    NotFound { path: PathBuf },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// Permission denied for the root path.
    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Generic I/O error on the root path.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Output(#[source] std::io::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Kind of scan warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Permission was denied.
    PermissionDenied,
    /// Error reading a directory.
    ReadError,
    /// Error reading metadata.
    MetadataError,
    /// Entry is neither a regular file nor a directory.
    SkippedEntry,
    /// Permission bits cannot be inspected on this platform.
    PermissionsUnsupported,
}

/// Non-fatal warning encountered during a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new scan warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a warning for a failed metadata read.
    pub fn metadata(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        let kind = if error.kind() == std::io::ErrorKind::PermissionDenied {
            WarningKind::PermissionDenied
        } else {
            WarningKind::MetadataError
        };
        Self {
            message: format!("Cannot read metadata: {error}"),
            path,
            kind,
        }
    }

    /// Create a read error warning.
    pub fn read_error(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        Self {
            path: path.into(),
            message: format!("Read error: {message}"),
            kind: WarningKind::ReadError,
        }
    }

    /// Create a warning for an entry that is neither file nor directory.
    pub fn skipped(path: impl Into<PathBuf>, what: &str) -> Self {
        let path = path.into();
        Self {
            message: format!("Skipped {what}: {}", path.display()),
            path,
            kind: WarningKind::SkippedEntry,
        }
    }
}
