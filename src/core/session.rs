//! Per-process session state.
//!
//! A [`Session`] bundles the signed-up user, the repository catalog and the
//! effective configuration. The binary creates one at start-up and passes it by
//! mutable reference into every interactive flow; it is dropped when the hub
//! exits.

use crate::core::account::{AccountField, User};
use crate::core::catalog::RepositoryCatalog;
use crate::core::config::HubConfig;
use crate::core::error::{HubError, Result};

#[derive(Debug)]
pub struct Session {
    user: Option<User>,
    catalog: RepositoryCatalog,
    config: HubConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(HubConfig::default())
    }
}

impl Session {
    pub fn new(config: HubConfig) -> Self {
        Self {
            user: None,
            catalog: RepositoryCatalog::with_file_limit(config.max_file_size),
            config,
        }
    }

    /// Register the session's user, replacing any earlier sign-up.
    pub fn sign_up(&mut self, username: &str, email: &str, password: &str) -> Result<&User> {
        let user = User::new(username, email, password)?;
        if let Some(previous) = &self.user {
            log::info!("Replacing account '{}'", previous.username());
        }
        log::info!("Signed up '{}'", user.username());
        Ok(&*self.user.insert(user))
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<&User> {
        let user = self.user.as_ref().ok_or(HubError::NoUser)?;
        if !user.matches(AccountField::Email, email) {
            log::warn!("Sign-in with unknown email");
            return Err(HubError::UnknownEmail);
        }
        if !user.matches(AccountField::Password, password) {
            log::warn!("Sign-in with wrong password for '{}'", user.username());
            return Err(HubError::IncorrectPassword);
        }
        log::debug!("Signed in '{}'", user.username());
        Ok(user)
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Confirm the caller knows the current value of `field`.
    pub fn verify_account_field(&self, field: AccountField, current: &str) -> Result<()> {
        let user = self.user.as_ref().ok_or(HubError::NoUser)?;
        if user.matches(field, current) {
            Ok(())
        } else {
            Err(HubError::IncorrectCurrent { field })
        }
    }

    pub fn update_account_field(&mut self, field: AccountField, value: &str) -> Result<()> {
        let user = self.user.as_mut().ok_or(HubError::NoUser)?;
        user.update(field, value)?;
        log::info!("Updated {field} for '{}'", user.username());
        Ok(())
    }

    pub fn catalog(&self) -> &RepositoryCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut RepositoryCatalog {
        &mut self.catalog
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }
}
