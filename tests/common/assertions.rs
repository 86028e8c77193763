//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating cvhub menu output, error messages and
//! commit log lines.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the farewell message
pub fn left_the_hub() -> impl Predicate<str> {
    predicates::str::contains("Thank You!")
}

/// Creates a predicate that checks for a successful sign-in
pub fn signed_in(username: &str) -> impl Predicate<str> {
    predicates::str::contains("Signin successful!")
        .and(predicates::str::contains(format!("Welcome, {username}!")))
}

/// Creates a predicate that checks for an exact "Added file" log line
pub fn added_entry(path: &str, message: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Added file: {path} | Commit: {message}"))
}

/// Creates a predicate that checks for an exact "Removed file" log line
pub fn removed_entry(path: &str, message: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Removed file: {path} | Commit: {message}"))
}

/// Creates a predicate that checks for an error line
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("✕ Error: {message}"))
}
