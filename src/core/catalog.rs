//! The session's ordered collection of repositories.
//!
//! [`RepositoryCatalog`] owns every [`Repository`] created during a session,
//! keeps them in creation order and rejects names that differ from an existing
//! one only by case. Selections are 1-based, matching the numbered listings
//! shown to the user.

use crate::core::error::{HubError, Result};
use crate::core::index_parser::IndexParser;
use crate::core::repository::{Repository, DEFAULT_MAX_FILE_SIZE};

#[derive(Debug)]
pub struct RepositoryCatalog {
    repositories: Vec<Repository>,
    max_file_size: u64,
}

impl Default for RepositoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryCatalog {
    pub fn new() -> Self {
        Self::with_file_limit(DEFAULT_MAX_FILE_SIZE)
    }

    /// Catalog whose repositories refuse files above `max_file_size` bytes
    pub fn with_file_limit(max_file_size: u64) -> Self {
        Self {
            repositories: Vec::new(),
            max_file_size,
        }
    }

    /// Create an empty repository and append it to the catalog.
    ///
    /// The name is trimmed; blank names and case-insensitive duplicates are
    /// rejected without touching the catalog.
    pub fn create(&mut self, name: &str) -> Result<&mut Repository> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HubError::EmptyName);
        }

        if let Some(existing) = self.find_by_name(name) {
            log::warn!("Repository '{}' already exists", existing.name());
            return Err(HubError::duplicate_name(name));
        }

        self.repositories
            .push(Repository::with_file_limit(name, self.max_file_size));
        log::info!(
            "Created repository '{name}' ({} total)",
            self.repositories.len()
        );

        let last = self.repositories.len() - 1;
        Ok(&mut self.repositories[last])
    }

    /// Repositories in creation order
    pub fn list(&self) -> &[Repository] {
        &self.repositories
    }

    /// Case-insensitive exact name lookup
    pub fn find_by_name(&self, name: &str) -> Option<&Repository> {
        let wanted = name.trim().to_lowercase();
        self.repositories
            .iter()
            .find(|repo| repo.name().to_lowercase() == wanted)
    }

    pub fn select(&self, index: usize) -> Result<&Repository> {
        IndexParser::validate(index, self.repositories.len())?;
        Ok(&self.repositories[index - 1])
    }

    pub fn select_mut(&mut self, index: usize) -> Result<&mut Repository> {
        IndexParser::validate(index, self.repositories.len())?;
        Ok(&mut self.repositories[index - 1])
    }

    /// Remove the repository at 1-based `index` and hand it back.
    pub fn delete_by_selection(&mut self, index: usize) -> Result<Repository> {
        IndexParser::validate(index, self.repositories.len())?;
        let removed = self.repositories.remove(index - 1);
        log::info!("Deleted repository '{}'", removed.name());
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }
}
