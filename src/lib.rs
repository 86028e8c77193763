//! CvHub - a terminal source-control hub simulation.
//!
//! Users sign up, sign in, create named repositories and manage files inside
//! them with a linear commit log. Everything lives in memory for the duration of
//! one session.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Repositories, commit records and the repository catalog
//! - The session context and account handling
//! - Error handling and result types
//! - Configuration and terminal output helpers
//!
//! The interactive menus live in [`commands`].

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    // Session and accounts
    AccountField,
    CommitAction,
    CommitRecord,
    // Error handling
    HubError,
    // Configuration
    HubConfig,
    // Input
    IndexParser,
    Prompt,
    // Repositories
    Repository,
    RepositoryCatalog,
    Result,
    Session,
    User,
    DEFAULT_MAX_FILE_SIZE,
};
