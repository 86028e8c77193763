//! Consolidated test utilities for cvhub
//!
//! This module provides unified testing utilities for integration tests that
//! drive the `cvhub` binary through scripted stdin sessions.

pub mod assertions;
pub mod fixtures;
pub mod workspace;
