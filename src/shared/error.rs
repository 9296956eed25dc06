use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can use these to tell a bad invocation apart from a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Graph resolved and rendered
    Success = 0,
    /// Application error (corrupt cache, render failure, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency graph generation.
///
/// `CacheCorrupt` is the only error that aborts a run before resolution starts.
/// `PackageNotFound` and `MetadataLookupError` are raised by metadata sources and
/// recovered by the resolver, which turns the package into a leaf node.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Dependency cache is corrupt: {path}\nDetails: {details}\n\n💡 Hint: Fix or delete the cache file, or run with --no-cache")]
    CacheCorrupt { path: PathBuf, details: String },

    #[error("Failed to read dependency cache: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is readable")]
    CacheReadError { path: PathBuf, details: String },

    #[error("Failed to write dependency cache: {path}\nDetails: {details}\n\n💡 Hint: The graph was still generated; check disk space and write permissions")]
    CacheWriteError { path: PathBuf, details: String },

    #[error("Package not found: {package_name}\nDetails: {details}")]
    PackageNotFound {
        package_name: String,
        details: String,
    },

    #[error("Failed to look up dependencies of {package_name}\nDetails: {details}\n\n💡 Hint: Please check your internet connection or the package index URL")]
    MetadataLookupError {
        package_name: String,
        details: String,
    },

    #[error("Failed to render dependency graph to {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    RenderError {
        path: PathBuf,
        details: String,
        hint: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid output path: {path}\nReason: {reason}\n\n💡 Hint: Use one of the extensions .png, .svg, .pdf, .jpg, .gif, .dot or .gv")]
    InvalidOutputPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
