//! Core functionality for the cvhub tool.
//!
//! This module provides the repository data model, the session that owns it,
//! error handling, configuration and the terminal building blocks the
//! interactive commands are made of.

pub mod account;
pub mod catalog;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod index_parser;
pub mod output;
pub mod prompt;
pub mod repository;
pub mod session;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{HubError, Result};

// === Repositories ===
// Tracked files, commit log and the catalog that owns them
pub use catalog::RepositoryCatalog;
pub use repository::{CommitAction, CommitRecord, Repository, DEFAULT_MAX_FILE_SIZE};

// === Session ===
// Explicit per-process context replacing global user/repository state
pub use account::{AccountField, User};
pub use session::Session;

// === Configuration ===
pub use config::HubConfig;

// === Input ===
// Menu selection parsing and the line reader built on it
pub use index_parser::IndexParser;
pub use prompt::Prompt;

// === Color system ===
pub use colors::{format_commit_line, get_action_color_style};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    print_banner, print_error, print_info, print_menu, print_numbered_item,
    print_section_header, print_success, print_warning,
};
