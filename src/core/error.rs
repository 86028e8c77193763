//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`HubError`] which covers every failure mode of the hub:
//! repository and catalog operations, account handling, menu input and
//! configuration. It uses `thiserror` for ergonomic error definitions and
//! includes constructors for the common failure scenarios.
//!
//! # Public API
//! - [`HubError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, HubError>`
//!
//! # Error Categories
//! - **Catalog**: Empty or duplicate repository names, out of range selections
//! - **Files**: Missing files, untracked names, read failures, size ceiling
//! - **Accounts**: Credential validation and sign-in mismatches
//! - **Configuration**: Config directory, read, parse and write errors
//!
//! Every variant is recoverable: callers report it and return to the menu.

use crate::core::account::AccountField;
use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for cvhub
#[derive(Error, Debug)]
pub enum HubError {
    // Catalog errors
    #[error("Repository name cannot be empty")]
    EmptyName,

    #[error("Repository '{name}' already exists. Try a different name")]
    DuplicateName { name: String },

    #[error("Selection {index} is out of range ({max} available)")]
    OutOfRange { index: usize, max: usize },

    // File errors
    #[error("File does not exist at the provided path: {path}")]
    FileNotFound { path: String },

    #[error("File '{name}' not found in repository")]
    NotTracked { name: String },

    #[error("File does not exist at the path: {path}")]
    MissingOnDisk { path: String },

    #[error("Error reading file '{path}': {source}")]
    IoRead {
        path: String,
        source: std::io::Error,
    },

    #[error("File '{path}' is {size} bytes, larger than the {limit} byte limit")]
    FileTooLarge { path: String, size: u64, limit: u64 },

    // Input errors
    #[error("Invalid input '{input}'. Please enter a number")]
    InvalidNumber { input: String },

    #[error("Nothing available to select")]
    EmptySelection,

    #[error("Input stream closed")]
    InputClosed,

    // Account errors
    #[error("Invalid username: {reason}")]
    InvalidUsername { reason: String },

    #[error("Invalid email: {reason}")]
    InvalidEmail { reason: String },

    #[error("Invalid password: {reason}")]
    InvalidPassword { reason: String },

    #[error("No user found. Please sign up first")]
    NoUser,

    #[error("No account found with this email")]
    UnknownEmail,

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Incorrect current {field}")]
    IncorrectCurrent { field: AccountField },

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using HubError
pub type Result<T> = std::result::Result<T, HubError>;

impl HubError {
    /// Create a duplicate repository name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a selection out of range error
    pub fn out_of_range(index: usize, max: usize) -> Self {
        Self::OutOfRange { index, max }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an error for a lookup name that matches no tracked path
    pub fn not_tracked(name: impl Into<String>) -> Self {
        Self::NotTracked { name: name.into() }
    }

    /// Create an error for a tracked path that vanished from disk
    pub fn missing_on_disk(path: impl Into<String>) -> Self {
        Self::MissingOnDisk { path: path.into() }
    }

    /// Create a file read error
    pub fn io_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoRead {
            path: path.into(),
            source,
        }
    }

    /// Create a file size ceiling error
    pub fn file_too_large(path: impl Into<String>, size: u64, limit: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            size,
            limit,
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }

    pub fn invalid_username(reason: impl Into<String>) -> Self {
        Self::InvalidUsername {
            reason: reason.into(),
        }
    }

    pub fn invalid_email(reason: impl Into<String>) -> Self {
        Self::InvalidEmail {
            reason: reason.into(),
        }
    }

    pub fn invalid_password(reason: impl Into<String>) -> Self {
        Self::InvalidPassword {
            reason: reason.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }
}
