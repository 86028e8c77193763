//! Parsing of user-provided menu selections.
//!
//! This module provides [`IndexParser`] which turns a line typed at a numbered
//! menu into a validated 1-based index.
//!
//! # Public API
//! - [`IndexParser`]: Static methods for parsing and bounds checking
//!
//! # Accepted Input
//! - **Single number**: `3`
//! - **Surrounding whitespace**: ` 3 ` is accepted and trimmed
//!
//! Anything else (letters, signs, ranges, empty lines) is an
//! [`HubError::InvalidNumber`].

use crate::core::error::{HubError, Result};

pub struct IndexParser;

impl IndexParser {
    pub fn parse_selection(input: &str) -> Result<usize> {
        let trimmed = input.trim();
        trimmed
            .parse::<usize>()
            .map_err(|_| HubError::invalid_number(trimmed))
    }

    /// Check that `index` is within `1..=max`.
    pub fn validate(index: usize, max: usize) -> Result<()> {
        if index == 0 || index > max {
            return Err(HubError::out_of_range(index, max));
        }
        Ok(())
    }

    /// Parse and validate in one step
    pub fn parse_choice(input: &str, max: usize) -> Result<usize> {
        if max == 0 {
            return Err(HubError::EmptySelection);
        }
        let index = Self::parse_selection(input)?;
        Self::validate(index, max)?;
        Ok(index)
    }
}
