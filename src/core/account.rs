//! The hub's single user account and its credential rules.
//!
//! # Public API
//! - [`User`]: Username, email and password held for the session
//! - [`AccountField`]: Which credential an account-settings change targets
//! - [`validate_username`], [`validate_email`], [`validate_password`]
//!
//! # Rules
//! - **Username**: 5+ characters, no special characters
//! - **Email**: ends with `@gmail.com`, `@` not first, no spaces
//! - **Password**: 8+ characters with a special character, a digit and an
//!   uppercase letter
//!
//! The first rule that fails is reported.

use crate::core::error::{HubError, Result};
use std::fmt;

/// Characters counted as "special" by the username and password rules
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+{}[]|\\:;\"'<>,.?/~`-=";

pub const MIN_USERNAME_LENGTH: usize = 5;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const EMAIL_DOMAIN: &str = "@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Username,
    Email,
    Password,
}

impl AccountField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountField::Username => "username",
            AccountField::Email => "email",
            AccountField::Password => "password",
        }
    }

    pub fn validate(&self, value: &str) -> Result<()> {
        match self {
            AccountField::Username => validate_username(value),
            AccountField::Email => validate_email(value),
            AccountField::Password => validate_password(value),
        }
    }
}

impl fmt::Display for AccountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    email: String,
    password: String,
}

impl User {
    /// Build a user after checking every credential rule.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let user = Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        };
        validate_username(&user.username)?;
        validate_email(&user.email)?;
        validate_password(&user.password)?;
        Ok(user)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Exact comparison against the stored value of `field`
    pub fn matches(&self, field: AccountField, value: &str) -> bool {
        self.get(field) == value
    }

    /// Replace `field` with `value` if it passes the field's rule.
    pub fn update(&mut self, field: AccountField, value: &str) -> Result<()> {
        field.validate(value)?;
        let slot = match field {
            AccountField::Username => &mut self.username,
            AccountField::Email => &mut self.email,
            AccountField::Password => &mut self.password,
        };
        *slot = value.to_string();
        Ok(())
    }

    fn get(&self, field: AccountField) -> &str {
        match field {
            AccountField::Username => &self.username,
            AccountField::Email => &self.email,
            AccountField::Password => &self.password,
        }
    }
}

pub fn contains_special_character(value: &str) -> bool {
    value.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

pub fn validate_username(username: &str) -> Result<()> {
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(HubError::invalid_username(format!(
            "should be at least {MIN_USERNAME_LENGTH} characters long"
        )));
    }
    if contains_special_character(username) {
        return Err(HubError::invalid_username(
            "cannot contain special characters",
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(HubError::invalid_email("cannot be empty"));
    }
    if !email.ends_with(EMAIL_DOMAIN) {
        return Err(HubError::invalid_email(format!(
            "should end with {EMAIL_DOMAIN}"
        )));
    }
    if email.find('@') == Some(0) {
        return Err(HubError::invalid_email("'@' should not be at the start"));
    }
    if email.contains(' ') {
        return Err(HubError::invalid_email("no spaces allowed"));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(HubError::invalid_password(format!(
            "should be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    if !contains_special_character(password) {
        return Err(HubError::invalid_password(
            "should contain at least one special character",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(HubError::invalid_password(
            "should contain at least one number",
        ));
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(HubError::invalid_password(
            "should contain at least one uppercase letter",
        ));
    }
    Ok(())
}
